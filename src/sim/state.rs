//! Game state and core simulation types
//!
//! Everything the frame driver owns lives here, along with the full reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, inner_boundary, outer_boundary};
use crate::consts::*;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Title screen, waiting for the start input
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Ball got past the paddle
    GameOver,
    /// Every brick destroyed
    Won,
}

impl SessionState {
    /// Banner text and its x position, for every state that shows one
    pub fn banner(&self) -> Option<(&'static str, i32)> {
        match self {
            SessionState::Start => Some(("Press SPACE to start game!", 80)),
            SessionState::GameOver => Some(("Game Over, press R to start again", 40)),
            SessionState::Won => Some(("You won, press R to start again", 45)),
            SessionState::Playing => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Start => "Start",
            SessionState::Playing => "Playing",
            SessionState::GameOver => "GameOver",
            SessionState::Won => "Won",
        }
    }
}

/// The player's paddle (center-anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, PADDLE_CEILING_DISTANCE),
        }
    }
}

impl Paddle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - PADDLE_WIDTH / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + PADDLE_WIDTH / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in units/s
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball with the given horizontal velocity, the vertical component chosen
    /// so the total speed is `speed` (heading down the screen)
    pub fn launch(pos: Vec2, vx: f32, speed: f32) -> Self {
        let vy = (speed * speed - vx * vx).max(0.0).sqrt();
        Self {
            pos,
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::launch(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            BALL_INITIAL_VX,
            BALL_SPEED,
        )
    }
}

/// A brick (center-anchored). Destroyed bricks stay in the grid with `live`
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub live: bool,
}

/// Build the fixed 5x4 brick grid, row-major, all live
pub fn brick_grid() -> [Brick; BRICK_COUNT] {
    std::array::from_fn(|i| {
        let row = (i / BRICK_COLUMNS) as f32;
        let col = (i % BRICK_COLUMNS) as f32;
        let x = BRICK_INLINE_MARGIN + col * (BRICK_WIDTH + BRICK_SPACING) + BRICK_WIDTH / 2.0;
        let y = BRICK_CEILING_MARGIN + row * (BRICK_SPACING + BRICK_HEIGHT) + BRICK_HEIGHT / 2.0;
        Brick {
            pos: Vec2::new(x, y),
            live: true,
        }
    })
}

/// Complete game state, owned by the frame driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub session: SessionState,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: [Brick; BRICK_COUNT],
    /// Arena outline
    pub boundary: Rect,
    /// Frames simulated in the current round
    pub frames_played: u64,
    /// Seconds simulated in the current round
    pub time_played: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let mut state = Self {
            session: SessionState::Start,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: brick_grid(),
            boundary: outer_boundary(),
            frames_played: 0,
            time_played: 0.0,
        };
        state.reset();
        state
    }

    /// Full reset: entities back to the initial layout, session at Start
    pub fn reset(&mut self) {
        self.paddle = Paddle::default();
        self.ball = Ball::default();
        self.bricks = brick_grid();
        self.boundary = outer_boundary();
        self.frames_played = 0;
        self.time_played = 0.0;
        self.session = SessionState::Start;
        log::info!("Game reset: {} bricks", self.live_bricks());
    }

    /// Region the ball and paddle are kept within
    pub fn inner_boundary(&self) -> Rect {
        inner_boundary(&self.boundary)
    }

    pub fn live_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.live).count()
    }
}
