use crate::arena::{Aabb, Arena};
use crate::components::Side;
use crate::params::Params;
use glam::Vec2;

/// Game configuration
///
/// Immutable tuning values, built once and passed to the simulation.
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal center of a paddle column
    pub fn paddle_x(&self, arena: &Arena, side: Side) -> f32 {
        let offset = self.paddle_margin + self.paddle_width / 2.0;
        match side {
            Side::Left => offset,
            Side::Right => arena.width - offset,
        }
    }

    /// Full paddle rectangle for collision checks
    pub fn paddle_rect(&self, arena: &Arena, side: Side, y: f32) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.paddle_x(arena, side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Clamp a paddle center Y to keep the whole paddle on screen
    pub fn clamp_paddle_y(&self, arena: &Arena, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, arena.height - half_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let arena = Arena::default();
        assert_eq!(config.paddle_x(&arena, Side::Left), 25.0);
        assert_eq!(config.paddle_x(&arena, Side::Right), 775.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let arena = Arena::default();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(&arena, 0.0), half_height);
        assert_eq!(
            config.clamp_paddle_y(&arena, 1000.0),
            arena.height - half_height
        );
        let valid_y = 300.0;
        assert_eq!(config.clamp_paddle_y(&arena, valid_y), valid_y);
    }

    #[test]
    fn test_config_paddle_rect() {
        let config = Config::new();
        let arena = Arena::default();
        let rect = config.paddle_rect(&arena, Side::Left, 300.0);
        assert_eq!(rect.min.x, 20.0);
        assert_eq!(rect.max.x, 30.0);
        assert_eq!(rect.min.y, 250.0);
        assert_eq!(rect.max.y, 350.0);
    }
}
