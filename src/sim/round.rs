//! Round lifecycle: placing the paddle and ball and building the brick grid

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Brick, GameState, Screen};

/// Start a new round on a screen of the given size
pub fn reset(state: &mut GameState, screen: Screen) {
    let tuning = &state.tuning;

    state.game_over = false;
    state.rounds += 1;

    state.paddle.size = tuning.paddle_size;
    state.paddle.pos = Vec2::new(
        screen.width_f() / 2.0 - tuning.paddle_size.x / 2.0,
        screen.height_f() - tuning.paddle_bottom_offset,
    );

    let spawn = Vec2::new(
        state.paddle.center_x() + tuning.ball_spawn_offset.x,
        state.paddle.pos.y + tuning.ball_spawn_offset.y,
    );
    state.ball = Ball::new(spawn, tuning.ball_launch_velocity, tuning.ball_radius);

    let bricks = build_brick_grid(state, screen);
    state.bricks = bricks;

    log::info!(
        "Round {}: {} bricks on {}x{}",
        state.rounds,
        state.bricks.len(),
        screen.width,
        screen.height
    );
}

/// Lay out a fresh grid in row-major scan order with random variants
pub fn build_brick_grid(state: &mut GameState, screen: Screen) -> Vec<Brick> {
    let tuning = &state.tuning;
    let columns = tuning.brick_columns(screen.width);
    let rows = tuning.brick_rows;
    let step = tuning.brick_size + Vec2::splat(tuning.brick_gutter);
    let variants = tuning.brick_variants.max(1);
    let top = tuning.brick_top_rows;

    let mut bricks = Vec::with_capacity(columns.saturating_mul(rows) as usize);
    for row in 0..rows {
        for col in 0..columns {
            let pos = Vec2::new(col as f32 * step.x, row.saturating_add(top) as f32 * step.y);
            let variant = state.rng.random_range(0..variants);
            bricks.push(Brick::new(pos, variant));
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn fresh(seed: u64) -> (GameState, Screen) {
        let screen = Screen::new(640, 480);
        let mut state = GameState::new(Tuning::default(), seed);
        reset(&mut state, screen);
        (state, screen)
    }

    #[test]
    fn test_reset_structure() {
        let (state, screen) = fresh(42);

        assert_eq!(state.bricks.len(), 48);
        assert!(state.ball.stuck);
        assert_eq!(state.ball.radius, 6.0);
        assert_eq!(state.ball.vel, Vec2::new(100.0, -350.0));
        assert!(!state.game_over);
        assert_eq!(state.rounds, 1);

        assert_eq!(state.paddle.center_x(), screen.width_f() / 2.0);
        assert_eq!(state.paddle.pos.y, 448.0);
        // Ball spawns above and left of the paddle center
        assert!(state.ball.pos.x < state.paddle.center_x());
        assert!(state.ball.pos.y < state.paddle.pos.y);
    }

    #[test]
    fn test_grid_layout() {
        let (state, _) = fresh(42);

        assert_eq!(state.bricks[0].pos, Vec2::new(0.0, 54.0));
        assert_eq!(state.bricks[1].pos, Vec2::new(79.0, 54.0));
        assert_eq!(state.bricks[8].pos, Vec2::new(0.0, 81.0));
        assert_eq!(state.bricks[47].pos, Vec2::new(553.0, 189.0));
        assert!(state.bricks.iter().all(|b| b.variant < 4 && !b.destroyed));
    }

    #[test]
    fn test_brick_count_tracks_width() {
        let mut state = GameState::new(Tuning::default(), 1);
        for width in [76u32, 151, 152, 800, 1024] {
            reset(&mut state, Screen::new(width, 600));
            assert_eq!(state.bricks.len() as u32, 6 * (width / 76));
        }
    }

    #[test]
    fn test_reset_replaces_old_grid() {
        let (mut state, screen) = fresh(3);
        state.bricks.truncate(5);
        state.bricks[0].destroyed = true;
        state.game_over = true;

        reset(&mut state, screen);
        assert_eq!(state.bricks.len(), 48);
        assert_eq!(state.live_bricks(), 48);
        assert!(!state.game_over);
        assert_eq!(state.rounds, 2);
    }

    #[test]
    fn test_seed_fixes_variants() {
        let (a, _) = fresh(1234);
        let (b, _) = fresh(1234);
        let variants = |s: &GameState| s.bricks.iter().map(|b| b.variant).collect::<Vec<_>>();
        assert_eq!(variants(&a), variants(&b));
    }
}
