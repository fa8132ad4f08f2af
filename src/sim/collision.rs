//! Collision detection and response for the ball
//!
//! Bounces are axis-aligned: a collision only ever flips the sign of one or
//! both velocity components, so the ball's speed never changes.

use super::geometry::{Rect, circle_rect_overlap};
use super::state::Ball;

/// Bounce the ball off a rectangle, in place
///
/// Two passes run on every call:
///
/// 1. Approach: if the circle overlaps the rectangle, flip each axis on which
///    the center lies outside the rectangle's span. This reflects a ball
///    coming from outside before it gets in.
/// 2. Penetration: if the center lies inside the rectangle, every edge the
///    circle touches or crosses pushes the center back to one radius inside
///    that edge and flips the matching axis. This keeps the ball inside the
///    arena walls and pulls it out of deep overlaps on large frame deltas.
///
/// The approach test looks at position only, not at the direction of travel.
pub fn resolve_ball_rect(ball: &mut Ball, rect: &Rect) {
    if circle_rect_overlap(ball.pos, ball.radius, rect) {
        if ball.pos.x < rect.left() || ball.pos.x > rect.right() {
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.y < rect.top() || ball.pos.y > rect.bottom() {
            ball.vel.y = -ball.vel.y;
        }
    }

    if rect.contains(ball.pos) {
        let r = ball.radius;
        if ball.pos.x - r <= rect.left() {
            ball.pos.x = rect.left() + r;
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.x + r >= rect.right() {
            ball.pos.x = rect.right() - r;
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.y - r <= rect.top() {
            ball.pos.y = rect.top() + r;
            ball.vel.y = -ball.vel.y;
        }
        if ball.pos.y + r >= rect.bottom() {
            ball.pos.y = rect.bottom() - r;
            ball.vel.y = -ball.vel.y;
        }
    }
}
