use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;

/// Apply paddle movement based on intents, clamped to the arena
pub fn move_paddles(world: &mut World, arena: &Arena, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed;
            paddle.y = config.clamp_paddle_y(arena, paddle.y);
        }
    }
}

/// Move ball by its velocity, unconditionally
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
