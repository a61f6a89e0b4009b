use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, ScriptedOpponent};

/// Scripted opponent tracking, run every tick.
///
/// Moves the marked paddle toward the ball's vertical position, or holds
/// still when exactly aligned. Non-predictive: only the paddle speed limits
/// how well it keeps up.
pub fn track_ball(world: &mut World) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_entity, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, (paddle, intent, _)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &ScriptedOpponent)>()
    {
        intent.dir = if ball_y < paddle.y {
            -1
        } else if ball_y > paddle.y {
            1
        } else {
            0
        };
    }
}
