mod input;
mod render;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use hecs::World;
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use pong_core::{
    create_ball, create_paddle, create_scripted_paddle, step, Arena, Ball, Config, Events,
    GameRng, InputQueue, Params, Score, Side,
};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use render::Theme;

const WINDOW_TITLE: &str = "Pong Game";

fn init_logging() -> Result<(), String> {
    let stdout = ConsoleAppender::builder().build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| e.to_string())?;
    log4rs::init_config(config).map_err(|e| e.to_string())?;
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn run() -> Result<(), String> {
    init_logging()?;

    let arena = Arena::default();
    let config = Config::new();
    let theme = Theme::default();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window(WINDOW_TITLE, arena.width as u32, arena.height as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // World setup: player left, scripted opponent right, ball served from center
    let mut world = World::new();
    let mut rng = GameRng::new(time_seed());
    let mid = arena.height / 2.0;
    create_paddle(&mut world, Side::Left, mid);
    create_scripted_paddle(&mut world, Side::Right, mid);
    let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
    ball.reset(arena.center(), config.ball_speed, &mut rng);
    create_ball(&mut world, ball.pos, ball.vel);

    let mut score = Score::new();
    let mut events = Events::new();
    let mut input_queue = InputQueue::new();

    let frame_budget = Duration::from_secs(1) / Params::TICK_RATE;
    info!(
        "Starting {} ({}x{} @ {} fps)",
        WINDOW_TITLE,
        arena.width,
        arena.height,
        Params::TICK_RATE
    );

    'running: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(dir) = input::dir_for_key_down(key) {
                        input_queue.push(Side::Left, dir);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(dir) = input::dir_for_key_up(key) {
                        input_queue.push(Side::Left, dir);
                    }
                }
                _ => {}
            }
        }

        step(
            &mut world,
            &arena,
            &config,
            &mut score,
            &mut events,
            &mut input_queue,
            &mut rng,
        );

        if events.player_scored {
            info!("Player scores: {} - {}", score.player, score.opponent);
        }
        if events.opponent_scored {
            info!("AI scores: {} - {}", score.player, score.opponent);
        }

        render::draw_frame(&mut canvas, &world, &arena, &config, &score, &theme)?;

        // Block out the rest of the fixed 60 Hz frame
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!("Final score: player {} - AI {}", score.player, score.opponent);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}
