use hecs::World;

use crate::arena::Arena;
use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Check if the ball crossed a scoring edge.
///
/// Left edge: the scripted opponent scores. Right edge: the player scores.
/// Either way the ball recenters and serves again immediately. A ball
/// strictly inside the field changes nothing here.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let center = arena.center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - config.ball_radius <= 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            ball.reset(center, config.ball_speed, rng);
        } else if ball.pos.x + config.ball_radius >= arena.width {
            score.increment_player();
            events.player_scored = true;
            ball.reset(center, config.ball_speed, rng);
        }
    }
}
