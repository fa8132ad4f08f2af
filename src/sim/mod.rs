//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time arrives as a per-frame delta only
//! - Input arrives as booleans sampled once per frame
//! - Fixed update order: paddle, then ball against paddle, arena, bricks

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod update;

pub use autopilot::autopilot;
pub use collision::resolve_ball_rect;
pub use geometry::{
    Rect, brick_rect, circle_rect_overlap, inner_boundary, outer_boundary, paddle_rect,
};
pub use state::{Ball, Brick, GameState, Paddle, SessionState, brick_grid};
pub use tick::{FrameInput, tick};
pub use update::{BallOutcome, update_ball, update_paddle};
