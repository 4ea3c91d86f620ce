//! Brick-breaker simulation module
//!
//! All gameplay logic lives here:
//! - Single owned state, passed explicitly to every step
//! - Seeded RNG only (brick appearance)
//! - Stable scan order over the brick grid
//! - No rendering or platform dependencies

pub mod collision;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{
    Direction, ImpactResult, Rect, circle_rect_impact, classify_direction, rect_overlap,
};
pub use round::{build_brick_grid, reset};
pub use state::{Ball, Brick, GameState, Paddle, Screen};
pub use tick::{StepOutcome, TickInput, bounce_off_paddle, tick};
