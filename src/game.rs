//! Host-facing game hooks
//!
//! The host owns the window, the event pump and the frame clock. It calls
//! `on_start` once, `on_update` every frame and `on_shutdown` on exit.

use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GameState, Screen, StepOutcome, TickInput, round, tick};
use crate::tuning::Tuning;

/// Game instance holding all simulation state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    /// Frames simulated since `on_start`
    pub frames: u64,
    running: bool,
}

impl Game {
    /// Game with a reproducible brick layout
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(tuning, seed),
            frames: 0,
            running: false,
        }
    }

    /// Game with a random brick layout
    pub fn from_entropy(tuning: Tuning) -> Self {
        let state = GameState::from_entropy(tuning);
        log::info!("Game seed: {}", state.seed);
        Self {
            state,
            frames: 0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn on_start(&mut self, screen: Screen) {
        log::info!("Starting on {}x{} screen", screen.width, screen.height);
        round::reset(&mut self.state, screen);
        self.frames = 0;
        self.running = true;
    }

    /// Step one frame and draw it
    ///
    /// Reset frames draw nothing. Updates before `on_start` or after
    /// `on_shutdown` are ignored.
    pub fn on_update<C: Canvas + ?Sized>(
        &mut self,
        dt: f32,
        input: &TickInput,
        screen: Screen,
        canvas: &mut C,
    ) -> Option<StepOutcome> {
        if !self.running {
            return None;
        }

        // Frame length is capped; NaN counts as no time
        let dt = if dt.is_finite() {
            dt.min(self.state.tuning.max_frame_dt).max(0.0)
        } else {
            0.0
        };

        let outcome = tick(&mut self.state, input, dt, screen);
        self.frames += 1;
        if outcome == StepOutcome::Advanced {
            draw_frame(&self.state, screen, canvas);
        }
        Some(outcome)
    }

    pub fn on_shutdown(&mut self) {
        if self.running {
            log::info!(
                "Shutting down after {} frames and {} rounds",
                self.frames,
                self.state.rounds
            );
        }
        self.running = false;
    }
}
