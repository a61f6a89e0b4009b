use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Bounce the ball off the top and bottom walls.
///
/// The velocity sign only flips while the ball is moving outward, so a
/// crossing produces exactly one flip and lingering overlap on later ticks
/// cannot flip it back. No positional correction is applied.
pub fn bounce_walls(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = config.ball_radius;
        let crossed_top = ball.pos.y - r <= 0.0 && ball.vel.y < 0.0;
        let crossed_bottom = ball.pos.y + r >= arena.height && ball.vel.y > 0.0;
        if crossed_top || crossed_bottom {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off paddles.
///
/// Circle-vs-rect overlap test; on contact the horizontal velocity sign
/// flips, nothing else changes. The moving-toward-paddle guard keeps the
/// flip to exactly one per collision event.
pub fn bounce_paddles(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_entity, ball)| (ball.pos, ball.vel))
    };

    let (ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return,
    };

    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_entity, paddle)| (paddle.side, paddle.y))
        .collect();

    let mut bounced = false;
    for (side, y) in paddles {
        let rect = config.paddle_rect(arena, side, y);
        if !rect.intersects_circle(ball_pos, config.ball_radius) {
            continue;
        }

        let moving_toward = match side {
            Side::Left => ball_vel.x < 0.0,
            Side::Right => ball_vel.x > 0.0,
        };
        if moving_toward {
            ball_vel.x = -ball_vel.x;
            bounced = true;
        }
    }

    if bounced {
        events.ball_hit_paddle = true;
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.vel = ball_vel;
        }
    }
}
