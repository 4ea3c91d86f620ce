//! Per-frame simulation step
//!
//! Advances the game state by one host frame of variable length.

use glam::Vec2;

use super::collision::{Direction, circle_rect_impact, rect_overlap};
use super::round;
use super::state::{Ball, GameState, Paddle, Screen};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move paddle left (wins over `move_right`)
    pub move_left: bool,
    /// Move paddle right
    pub move_right: bool,
    /// Release the ball from the paddle
    pub launch: bool,
    /// Idle/demo mode - the paddle tracks the ball on its own
    pub idle_mode: bool,
}

/// What a step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new round was set up; nothing else ran this frame
    Reset,
    /// Normal frame
    Advanced,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, screen: Screen) -> StepOutcome {
    if state.round_over() {
        round::reset(state, screen);
        return StepOutcome::Reset;
    }

    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    move_paddle(state, &input, dt, screen);

    if !state.ball.stuck {
        integrate_ball(state, dt, screen);
    }

    // Bricks hit last frame
    state.bricks.retain(|b| !b.destroyed);

    if !state.ball.stuck {
        let tuning = &state.tuning;
        bounce_off_paddle(
            &mut state.ball,
            &state.paddle,
            tuning.bounce_strength,
            tuning.paddle_influence,
        );
    }

    hit_bricks(state);

    StepOutcome::Advanced
}

/// Steer toward the ball and launch it when it is riding the paddle
fn autopilot(state: &GameState) -> TickInput {
    let target = state.ball.center().x;
    let center = state.paddle.center_x();
    // Dead zone keeps the paddle from jittering around the target
    let dead_zone = state.paddle.size.x / 8.0;
    TickInput {
        move_left: target < center - dead_zone,
        move_right: target > center + dead_zone,
        launch: state.ball.stuck,
        idle_mode: true,
    }
}

fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32, screen: Screen) {
    let step = state.tuning.paddle_speed * dt;
    let before = state.paddle.pos.x;

    if input.move_left {
        state.paddle.pos.x -= step;
    } else if input.move_right {
        state.paddle.pos.x += step;
    }
    state.paddle.clamp_to(screen.width_f());

    if state.ball.stuck {
        state.ball.pos.x += state.paddle.pos.x - before;
    }

    if input.launch {
        state.ball.launch();
    }
}

fn integrate_ball(state: &mut GameState, dt: f32, screen: Screen) {
    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    if ball.pos.x <= 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = 0.0;
    } else if ball.pos.x + ball.radius >= screen.width_f() {
        ball.vel.x = -ball.vel.x;
        ball.pos.x -= ball.radius;
    }

    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = 0.0;
    }

    if ball.pos.y + ball.radius >= screen.height_f() && !state.game_over {
        state.game_over = true;
        log::info!("Ball lost at x={:.1}; round {} over", ball.pos.x, state.rounds);
    }
}

/// Redirect the ball by where it struck the paddle, keeping its speed
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, strength: f32, influence: f32) -> bool {
    let impact = circle_rect_impact(ball.center(), ball.radius, &paddle.rect());
    if !impact.hit {
        return false;
    }

    // Ball center offset from paddle center in half-widths; a ball clipping
    // the paddle's corner still counts as an edge hit
    let half_width = paddle.size.x / 2.0;
    let fraction = if half_width > 0.0 {
        ((ball.center().x - paddle.center_x()) / half_width).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let old_vel = ball.vel;
    let redirected = Vec2::new(strength * fraction * influence, -old_vel.y);
    ball.vel = redirected
        .try_normalize()
        .map_or(old_vel, |dir| dir * old_vel.length());
    ball.vel.y = -ball.vel.y.abs();
    true
}

/// Resolve the ball against every brick in scan order
///
/// Each hit is resolved from the ball state left by the previous one; earlier
/// bricks are not re-tested after the ball moves.
fn hit_bricks(state: &mut GameState) {
    let size = state.tuning.brick_size;
    let ball = &mut state.ball;

    for brick in state.bricks.iter_mut() {
        let rect = brick.rect(size);
        if !rect_overlap(&ball.rect(), &rect) {
            continue;
        }

        let impact = circle_rect_impact(ball.center(), ball.radius, &rect);
        if !impact.hit {
            continue;
        }

        brick.destroyed = true;
        // Push back out along the contact normal, away from the brick
        let penetration = impact.penetration(ball.radius);
        match impact.direction {
            Direction::Left => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x += penetration;
            }
            Direction::Right => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x -= penetration;
            }
            Direction::Up => {
                ball.vel.y = -ball.vel.y;
                ball.pos.y += penetration;
            }
            Direction::Down => {
                ball.vel.y = -ball.vel.y;
                ball.pos.y -= penetration;
            }
        }
        log::debug!(
            "Brick at ({}, {}) hit from {:?}, penetration {:.2}",
            brick.pos.x,
            brick.pos.y,
            impact.direction,
            penetration
        );
    }
}
