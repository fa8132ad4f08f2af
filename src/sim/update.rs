//! Per-frame entity updates: paddle from input, ball from physics

use super::collision::resolve_ball_rect;
use super::geometry::{Rect, brick_rect, circle_rect_overlap, paddle_rect};
use super::state::{Ball, Brick, Paddle};
use super::tick::FrameInput;
use crate::consts::*;

/// What the ball did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    /// Still in play
    InPlay,
    /// No live bricks remain
    Won,
    /// Ball passed the paddle
    Lost,
}

/// Move the paddle from held input, keeping it within the arena
///
/// Bounds are checked against the position at the start of the frame, so the
/// paddle may end a frame up to one step past a wall but never moves further
/// once its edge reaches it.
pub fn update_paddle(paddle: &mut Paddle, inner: &Rect, input: &FrameInput, dt: f32) {
    let within_left = paddle.left() > inner.left();
    let within_right = paddle.right() < inner.right();
    let step = PLAYER_HORIZONTAL_SPEED * dt;

    if input.left && within_left {
        log::debug!("Left key registered.");
        paddle.pos.x -= step;
    }
    if input.right && within_right {
        log::debug!("Right key registered.");
        paddle.pos.x += step;
    }
}

/// Bounce, destroy bricks, integrate, and report the outcome
///
/// Collision order is fixed: paddle, arena, then live bricks by index.
pub fn update_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    inner: &Rect,
    bricks: &mut [Brick],
    dt: f32,
) -> BallOutcome {
    resolve_ball_rect(ball, &paddle_rect(paddle));
    resolve_ball_rect(ball, inner);

    let mut live = 0;
    for brick in bricks.iter_mut().filter(|b| b.live) {
        let rect = brick_rect(brick);
        resolve_ball_rect(ball, &rect);
        if circle_rect_overlap(ball.pos, BALL_RADIUS, &rect) {
            log::debug!("Killed a brick");
            brick.live = false;
        } else {
            live += 1;
        }
    }
    if live == 0 {
        return BallOutcome::Won;
    }

    ball.pos += ball.vel * dt;

    if ball.pos.y > paddle.pos.y + PADDLE_HEIGHT + LOSE_MARGIN {
        log::debug!("Ball passed the paddle");
        return BallOutcome::Lost;
    }
    BallOutcome::InPlay
}
