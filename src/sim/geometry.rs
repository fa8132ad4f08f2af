//! Axis-aligned rectangles for collision and drawing
//!
//! Entities are center-anchored; everything that touches collision works on
//! left-top anchored rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Brick, Paddle};
use crate::consts::*;

/// A rectangle anchored at its left-top corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Closest point of the rectangle to `point`
    #[inline]
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Circle vs rectangle overlap (touching counts)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Collision rectangle of the paddle
pub fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::from_center(paddle.pos, PADDLE_WIDTH, PADDLE_HEIGHT)
}

/// Collision rectangle of a brick
pub fn brick_rect(brick: &Brick) -> Rect {
    Rect::from_center(brick.pos, BRICK_WIDTH, BRICK_HEIGHT)
}

/// Arena outline, drawn as the wall
pub fn outer_boundary() -> Rect {
    Rect::new(
        BOUNDARY_SIDE_MARGIN,
        FPS_FONT_SIZE,
        SCREEN_WIDTH - 2.0 * BOUNDARY_SIDE_MARGIN,
        SCREEN_HEIGHT - BOUNDARY_BOTTOM_MARGIN,
    )
}

/// Playable region inside the wall
///
/// Left, right and top are inset by the wall thickness. The bottom only loses
/// one thickness from the height, so the region runs past the bottom wall.
pub fn inner_boundary(outer: &Rect) -> Rect {
    Rect::new(
        outer.x + BOUNDARY_THICKNESS,
        outer.y + BOUNDARY_THICKNESS,
        outer.width - 2.0 * BOUNDARY_THICKNESS,
        outer.height - BOUNDARY_THICKNESS,
    )
}
