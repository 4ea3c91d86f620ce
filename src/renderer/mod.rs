//! Draw-call boundary
//!
//! The simulation does not own textures or a window. Each frame it hands the
//! host a fixed sequence of "draw sprite at rectangle" calls through `Canvas`.

use crate::sim::{GameState, Rect, Screen};

/// Sprite-sheet regions the host knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Paddle,
    Ball,
    /// Brick appearance by variant
    Brick(u8),
}

/// Host-side renderer
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: Sprite, dest: Rect);
}

/// Issue the frame's draw calls: background, paddle, ball, then bricks in grid order
///
/// Bricks hit during this frame are still drawn; they are removed next frame.
/// The ball is drawn where this frame's collision pushes left it.
pub fn draw_frame<C: Canvas + ?Sized>(state: &GameState, screen: Screen, canvas: &mut C) {
    canvas.draw_sprite(Sprite::Background, screen.rect());
    canvas.draw_sprite(Sprite::Paddle, state.paddle.rect());
    canvas.draw_sprite(Sprite::Ball, state.ball.rect());
    for brick in &state.bricks {
        canvas.draw_sprite(Sprite::Brick(brick.variant), state.brick_rect(brick));
    }
}

/// Canvas that keeps every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<(Sprite, Rect)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn brick_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|(sprite, _)| matches!(sprite, Sprite::Brick(_)))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, sprite: Sprite, dest: Rect) {
        self.calls.push((sprite, dest));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Brick, TickInput, round, tick};
    use glam::Vec2;
    use crate::tuning::Tuning;

    #[test]
    fn test_draw_order() {
        let screen = Screen::new(640, 480);
        let mut state = GameState::new(Tuning::default(), 11);
        round::reset(&mut state, screen);

        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, screen, &mut canvas);

        assert_eq!(canvas.calls.len(), 3 + 48);
        assert_eq!(canvas.calls[0], (Sprite::Background, Rect::new(0.0, 0.0, 640.0, 480.0)));
        assert_eq!(canvas.calls[1], (Sprite::Paddle, state.paddle.rect()));
        assert_eq!(canvas.calls[2], (Sprite::Ball, Rect::new(296.0, 416.0, 12.0, 12.0)));
        for (call, brick) in canvas.calls[3..].iter().zip(&state.bricks) {
            assert_eq!(call.0, Sprite::Brick(brick.variant));
            assert_eq!(call.1, Rect::new(brick.pos.x, brick.pos.y, 76.0, 24.0));
        }
    }

    #[test]
    fn test_destroyed_brick_still_drawn() {
        let screen = Screen::new(640, 480);
        let mut state = GameState::new(Tuning::default(), 11);
        round::reset(&mut state, screen);
        state.bricks[3].destroyed = true;

        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, screen, &mut canvas);
        assert_eq!(canvas.brick_calls(), 48);
    }

    #[test]
    fn test_ball_drawn_after_brick_push() {
        let screen = Screen::new(640, 480);
        let mut state = GameState::new(Tuning::default(), 11);
        round::reset(&mut state, screen);
        state.bricks = vec![Brick::new(Vec2::new(300.0, 250.0), 0)];
        state.ball.pos = Vec2::new(332.0, 240.0);
        state.ball.vel = Vec2::new(0.0, 100.0);
        state.ball.stuck = false;

        tick(&mut state, &TickInput::default(), 0.0, screen);
        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, screen, &mut canvas);
        assert_eq!(canvas.calls[2].0, Sprite::Ball);
        assert!((canvas.calls[2].1.y - 238.0).abs() < 0.001);
        assert_eq!(canvas.brick_calls(), 1);
    }
}
