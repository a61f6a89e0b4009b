use hecs::World;
use pong_core::{Arena, Ball, Config, Paddle, Score};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

// The gfx bitmap font is a fixed 8x8 cell
const GLYPH_WIDTH: i16 = 8;
const SCORE_MARGIN: i16 = 10;

/// Colors for everything on screen
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub ball: Color,
    pub paddle: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::RGB(0, 0, 0),
            ball: Color::RGB(255, 255, 255),
            paddle: Color::RGB(255, 255, 255),
            text: Color::RGB(255, 255, 255),
        }
    }
}

/// Draw one frame: clear, ball, paddles, score overlay, present
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    world: &World,
    arena: &Arena,
    config: &Config,
    score: &Score,
    theme: &Theme,
) -> Result<(), String> {
    canvas.set_draw_color(theme.background);
    canvas.clear();

    for (_entity, ball) in world.query::<&Ball>().iter() {
        canvas.filled_circle(
            (ball.pos.x + 0.5) as i16,
            (ball.pos.y + 0.5) as i16,
            config.ball_radius as i16,
            theme.ball,
        )?;
    }

    canvas.set_draw_color(theme.paddle);
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        let rect = config.paddle_rect(arena, paddle.side, paddle.y);
        canvas.fill_rect(Rect::new(
            rect.min.x as i32,
            rect.min.y as i32,
            config.paddle_width as u32,
            config.paddle_height as u32,
        ))?;
    }

    draw_scores(canvas, arena, score, theme)?;

    canvas.present();
    Ok(())
}

fn draw_scores(
    canvas: &mut Canvas<Window>,
    arena: &Arena,
    score: &Score,
    theme: &Theme,
) -> Result<(), String> {
    let player = format!("Player: {}", score.player);
    canvas.string(SCORE_MARGIN, SCORE_MARGIN, &player, theme.text)?;

    let ai = format!("AI: {}", score.opponent);
    let x = arena.width as i16 - ai.len() as i16 * GLYPH_WIDTH - SCORE_MARGIN;
    canvas.string(x, SCORE_MARGIN, &ai, theme.text)?;

    Ok(())
}
