//! Game state and core simulation types
//!
//! All mutable simulation state is owned by a single `GameState` value.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::Tuning;

/// Screen dimensions supplied by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f(), self.height_f())
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Keep the paddle fully on screen
    pub fn clamp_to(&mut self, screen_width: f32) {
        let max_x = (screen_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Top-left corner of the ball's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Riding on the paddle, waiting for launch
    pub stuck: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            stuck: true,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Bounding square, also used as the draw rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    pub fn launch(&mut self) {
        if self.stuck {
            self.stuck = false;
            log::debug!("Ball launched at ({:.1}, {:.1})", self.pos.x, self.pos.y);
        }
    }
}

/// A brick in the level grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    /// Appearance tag selecting one of the brick sprites
    pub variant: u8,
    /// Hit this frame; removed at the next compaction pass
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, variant: u8) -> Self {
        Self {
            pos,
            variant,
            destroyed: false,
        }
    }

    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::from_pos_size(self.pos, size)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values used by every step
    pub tuning: Tuning,
    /// Seed the brick-variant RNG was created from
    pub seed: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks in grid scan order
    pub bricks: Vec<Brick>,
    /// Ball left through the bottom of the screen
    pub game_over: bool,
    /// Number of round resets performed so far
    pub rounds: u32,
    /// Source of brick variants
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an empty state; the first step (or `round::reset`) builds a round
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.validated();
        let paddle = Paddle::new(tuning.paddle_size);
        let ball = Ball::new(Vec2::ZERO, tuning.ball_launch_velocity, tuning.ball_radius);
        Self {
            tuning,
            seed,
            paddle,
            ball,
            bricks: Vec::new(),
            game_over: false,
            rounds: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a state with a non-reproducible brick layout
    pub fn from_entropy(tuning: Tuning) -> Self {
        Self::new(tuning, rand::random())
    }

    /// A round ends when the ball is lost or every brick is gone
    pub fn round_over(&self) -> bool {
        self.game_over || self.bricks.is_empty()
    }

    pub fn brick_rect(&self, brick: &Brick) -> Rect {
        brick.rect(self.tuning.brick_size)
    }

    /// Bricks not yet hit
    pub fn live_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_brick_is_intact() {
        let brick = Brick::new(Vec2::new(79.0, 54.0), 3);
        assert!(!brick.destroyed);
        assert_eq!(brick.variant, 3);
        assert_eq!(
            brick.rect(Vec2::new(76.0, 24.0)),
            Rect::new(79.0, 54.0, 76.0, 24.0)
        );
    }

    #[test]
    fn test_ball_center_and_rect() {
        let ball = Ball::new(Vec2::new(10.0, 20.0), Vec2::ZERO, 6.0);
        assert_eq!(ball.center(), Vec2::new(16.0, 26.0));
        assert_eq!(ball.rect(), Rect::new(10.0, 20.0, 12.0, 12.0));
        assert!(ball.stuck);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle::new(Vec2::new(100.0, 24.0));
        paddle.pos.x = -15.0;
        paddle.clamp_to(640.0);
        assert_eq!(paddle.pos.x, 0.0);

        paddle.pos.x = 600.0;
        paddle.clamp_to(640.0);
        assert_eq!(paddle.pos.x, 540.0);
    }

    #[test]
    fn test_new_state_is_round_over() {
        let state = GameState::new(Tuning::default(), 7);
        assert!(state.bricks.is_empty());
        assert!(state.round_over());
        assert_eq!(state.rounds, 0);
    }
}
