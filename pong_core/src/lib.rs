pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by exactly one tick.
///
/// Velocities are in pixels per tick; the caller is responsible for pacing
/// calls at the fixed tick rate.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply buffered player inputs to paddle intents
    apply_inputs(world, input_queue);

    // 2. Scripted opponent picks its direction for this tick
    track_ball(world);

    // 3. Move the ball, then bounce off walls and paddles
    move_ball(world);
    bounce_walls(world, arena, config, events);
    bounce_paddles(world, arena, config, events);

    // 4. Scoring edges: credit the point and re-serve
    check_scoring(world, arena, config, score, events, rng);

    // 5. Move paddles (with clamping)
    move_paddles(world, arena, config);
}

/// Helper to create a player-controlled paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the scripted opponent's paddle entity
pub fn create_scripted_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new(), ScriptedOpponent))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
