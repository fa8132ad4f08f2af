//! Brick Breaker - A single-screen paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Simulation (geometry, collisions, entity updates, session state)
//! - `settings`: Presentation preferences loaded from JSON
//! - `frontend`: raylib window, input, audio and drawing (feature `raylib`)

#[cfg(feature = "raylib")]
pub mod frontend;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const BASE_SIZE: f32 = 50.0;
    pub const SCREEN_WIDTH: f32 = BASE_SIZE * 9.0;
    pub const SCREEN_HEIGHT: f32 = BASE_SIZE * 16.0;

    /// Paddle defaults - y of the paddle center, measured from the top
    pub const PADDLE_CEILING_DISTANCE: f32 = SCREEN_HEIGHT - 50.0;
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle speed (units/s)
    pub const PLAYER_HORIZONTAL_SPEED: f32 = 175.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 78.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_ROWS: usize = 4;
    pub const BRICK_COUNT: usize = BRICK_COLUMNS * BRICK_ROWS;
    /// Grid layout
    pub const BRICK_INLINE_MARGIN: f32 = 20.0;
    pub const BRICK_SPACING: f32 = 5.0;
    pub const BRICK_CEILING_MARGIN: f32 = 10.0 + FPS_FONT_SIZE + BOUNDARY_THICKNESS;

    /// Arena wall
    pub const BOUNDARY_THICKNESS: f32 = 10.0;
    pub const BOUNDARY_SIDE_MARGIN: f32 = 5.0;
    pub const BOUNDARY_BOTTOM_MARGIN: f32 = 10.0;

    /// HUD
    pub const FPS_FONT_SIZE: f32 = 20.0;
    pub const BANNER_FONT_SIZE: i32 = 20;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Total ball speed (units/s), constant for the whole session
    pub const BALL_SPEED: f32 = 300.0;
    /// Horizontal launch component; vertical is derived to match `BALL_SPEED`
    pub const BALL_INITIAL_VX: f32 = 100.0;

    /// How far past the paddle's bottom the ball may travel before it is lost
    pub const LOSE_MARGIN: f32 = 10.0;
}
