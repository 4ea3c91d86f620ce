//! Data-driven game balance
//!
//! Loaded from an optional JSON file; any missing field keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddle ===
    pub paddle_size: Vec2,
    /// Horizontal speed (pixels/s)
    pub paddle_speed: f32,
    /// Distance from screen bottom to the paddle's top edge
    pub paddle_bottom_offset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity given to the ball on every round reset
    pub ball_launch_velocity: Vec2,
    /// Spawn position relative to the paddle's top-center
    pub ball_spawn_offset: Vec2,

    // === Bricks ===
    pub brick_size: Vec2,
    pub brick_rows: u32,
    pub brick_gutter: f32,
    pub brick_top_rows: u32,
    pub brick_variants: u8,

    // === Paddle english ===
    pub bounce_strength: f32,
    pub paddle_influence: f32,

    // === Frame timing ===
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            ball_radius: BALL_RADIUS,
            ball_launch_velocity: Vec2::new(BALL_LAUNCH_VEL_X, BALL_LAUNCH_VEL_Y),
            ball_spawn_offset: Vec2::new(BALL_SPAWN_OFFSET_X, BALL_SPAWN_OFFSET_Y),

            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_rows: BRICK_ROWS,
            brick_gutter: BRICK_GUTTER,
            brick_top_rows: BRICK_TOP_ROWS,
            brick_variants: BRICK_VARIANTS,

            bounce_strength: BOUNCE_STRENGTH,
            paddle_influence: PADDLE_INFLUENCE,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults and
    /// out-of-range fields are replaced by theirs.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace every out-of-range field with its default
    pub fn validated(mut self) -> Self {
        let d = Self::default();
        let t = &mut self;

        let ok = positive(t.paddle_size.x) && positive(t.paddle_size.y);
        fallback("paddle_size", &mut t.paddle_size, d.paddle_size, ok);
        let ok = t.paddle_speed.is_finite() && t.paddle_speed >= 0.0;
        fallback("paddle_speed", &mut t.paddle_speed, d.paddle_speed, ok);
        let ok = t.paddle_bottom_offset.is_finite();
        fallback("paddle_bottom_offset", &mut t.paddle_bottom_offset, d.paddle_bottom_offset, ok);

        let ok = positive(t.ball_radius);
        fallback("ball_radius", &mut t.ball_radius, d.ball_radius, ok);
        let ok = t.ball_launch_velocity.is_finite();
        fallback("ball_launch_velocity", &mut t.ball_launch_velocity, d.ball_launch_velocity, ok);
        let ok = t.ball_spawn_offset.is_finite();
        fallback("ball_spawn_offset", &mut t.ball_spawn_offset, d.ball_spawn_offset, ok);

        let ok = t.brick_size.is_finite() && t.brick_size.min_element() >= MIN_BRICK_SIZE;
        fallback("brick_size", &mut t.brick_size, d.brick_size, ok);
        let ok = t.brick_rows <= MAX_BRICK_ROWS;
        fallback("brick_rows", &mut t.brick_rows, d.brick_rows, ok);
        let ok = t.brick_gutter.is_finite() && t.brick_gutter >= 0.0;
        fallback("brick_gutter", &mut t.brick_gutter, d.brick_gutter, ok);
        let ok = t.brick_top_rows <= MAX_BRICK_ROWS;
        fallback("brick_top_rows", &mut t.brick_top_rows, d.brick_top_rows, ok);
        let ok = t.brick_variants > 0;
        fallback("brick_variants", &mut t.brick_variants, d.brick_variants, ok);

        let ok = t.bounce_strength.is_finite();
        fallback("bounce_strength", &mut t.bounce_strength, d.bounce_strength, ok);
        let ok = t.paddle_influence.is_finite();
        fallback("paddle_influence", &mut t.paddle_influence, d.paddle_influence, ok);

        // dt.min(max_frame_dt).max(0.0) needs a positive cap
        let ok = positive(t.max_frame_dt);
        fallback("max_frame_dt", &mut t.max_frame_dt, d.max_frame_dt, ok);

        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Columns that fit across a screen of the given width
    pub fn brick_columns(&self, screen_width: u32) -> u32 {
        if self.brick_size.x <= 0.0 {
            return 0;
        }
        (screen_width as f32 / self.brick_size.x).floor() as u32
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Swap in the default for a rejected field
fn fallback<T: Copy + std::fmt::Debug>(name: &str, value: &mut T, default: T, ok: bool) {
    if !ok {
        log::warn!("Tuning {} = {:?} is out of range; using {:?}", name, value, default);
        *value = default;
    }
}
