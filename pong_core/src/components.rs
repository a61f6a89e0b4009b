use glam::Vec2;
use rand::Rng;

/// Which column of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component; `y` is the vertical center of the paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter the ball and serve it with a random sign on each axis.
    /// Speed magnitude per axis is always exactly `speed`.
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        self.pos = center;
        let dx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let dy = if rng.0.gen_bool(0.5) { speed } else { -speed };
        self.vel = Vec2::new(dx, dy);
    }
}

/// Movement intent for paddle, written by a controller each tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker for the paddle driven by the scripted opponent
#[derive(Debug, Clone, Copy)]
pub struct ScriptedOpponent;
