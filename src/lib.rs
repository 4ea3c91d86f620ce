//! Brickfall - a single-screen brick-breaker
//!
//! Core modules:
//! - `sim`: Per-frame simulation (collisions, entities, round lifecycle)
//! - `renderer`: Draw-call boundary to the host's sprite renderer
//! - `game`: Host-facing start/update/shutdown hooks
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Paddle defaults (sprite is 50x12, drawn at 2x)
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 24.0;
    /// Horizontal paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 400.0;
    /// Distance from the screen bottom to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 32.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_LAUNCH_VEL_X: f32 = 100.0;
    pub const BALL_LAUNCH_VEL_Y: f32 = -350.0;
    /// Ball spawn position relative to the paddle's top-center
    pub const BALL_SPAWN_OFFSET_X: f32 = -24.0;
    pub const BALL_SPAWN_OFFSET_Y: f32 = -32.0;

    /// Brick defaults (sprite is 38x12, drawn at 2x)
    pub const BRICK_WIDTH: f32 = 76.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_GUTTER: f32 = 3.0;
    /// Empty rows (in brick cells) above the grid
    pub const BRICK_TOP_ROWS: u32 = 2;
    pub const BRICK_VARIANTS: u8 = 4;
    /// Upper bound accepted for `brick_rows` and `brick_top_rows`
    pub const MAX_BRICK_ROWS: u32 = 64;
    /// Smallest accepted brick side (pixels)
    pub const MIN_BRICK_SIZE: f32 = 1.0;

    /// Paddle english: vel.x = strength * contact fraction * influence
    pub const BOUNCE_STRENGTH: f32 = 100.0;
    pub const PADDLE_INFLUENCE: f32 = 2.0;

    /// Longest frame the host may feed into one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
