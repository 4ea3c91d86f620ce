//! Brickfall entry point
//!
//! Runs the simulation headless with the autopilot at a fixed 60 Hz frame
//! clock. Window, sprites and keyboard belong to a graphical host.
//!
//! Usage: `brickfall [tuning.json] [frames]`

use brickfall::Game;
use brickfall::Tuning;
use brickfall::renderer::RecordingCanvas;
use brickfall::sim::{Screen, StepOutcome, TickInput};

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({}); running {} frames", e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let screen = Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut game = Game::from_entropy(tuning);
    let mut canvas = RecordingCanvas::new();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    game.on_start(screen);

    let mut draw_calls = 0usize;
    let mut resets = 0u32;
    for _ in 0..frames {
        canvas.clear();
        if game.on_update(FRAME_DT, &input, screen, &mut canvas) == Some(StepOutcome::Reset) {
            resets += 1;
        }
        draw_calls += canvas.calls.len();
    }

    println!(
        "{} frames, {} resets, {} bricks left, {} draw calls",
        frames,
        resets,
        game.state.live_bricks(),
        draw_calls
    );

    game.on_shutdown();
}
