use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::InputQueue;

/// Apply queued key-event translations to paddle intents.
///
/// Events are applied in arrival order, so when a key-down and a key-up for
/// the same side land in one tick the later event wins.
pub fn apply_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for &(side, dir) in &input_queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.dir = dir;
            }
        }
    }
    input_queue.clear();
}
