//! Demo input source - steers the paddle under the ball
//!
//! Drives the headless run and end-to-end tests. It plays well enough to
//! return most balls, not perfectly.

use super::state::{GameState, SessionState};
use super::tick::FrameInput;

/// Horizontal distance from the ball at which the paddle stops chasing
const DEAD_ZONE: f32 = 6.0;

/// Pick this frame's input from the current state
///
/// With `replay` set the autopilot restarts after a win or loss, otherwise it
/// idles on the end screen.
pub fn autopilot(state: &GameState, replay: bool) -> FrameInput {
    match state.session {
        SessionState::Start => FrameInput {
            start: true,
            ..Default::default()
        },
        SessionState::GameOver | SessionState::Won => FrameInput {
            restart: replay,
            ..Default::default()
        },
        SessionState::Playing => {
            let offset = state.ball.pos.x - state.paddle.pos.x;
            FrameInput {
                left: offset < -DEAD_ZONE,
                right: offset > DEAD_ZONE,
                ..Default::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_autopilot_chases_ball() {
        let mut state = GameState::new();
        state.session = SessionState::Playing;

        state.ball.pos = Vec2::new(100.0, 400.0);
        assert!(autopilot(&state, false).left);

        state.ball.pos = Vec2::new(300.0, 400.0);
        assert!(autopilot(&state, false).right);

        state.ball.pos = Vec2::new(228.0, 400.0);
        assert_eq!(autopilot(&state, false), FrameInput::default());
    }

    #[test]
    fn test_autopilot_screens() {
        let mut state = GameState::new();
        assert!(autopilot(&state, false).start);

        state.session = SessionState::GameOver;
        assert!(!autopilot(&state, false).restart);
        assert!(autopilot(&state, true).restart);
    }

    #[test]
    fn test_session_reaches_an_ending() {
        let mut state = GameState::new();
        let mut ending = None;

        for _ in 0..60 * 60 * 10 {
            let input = autopilot(&state, false);
            if let Some(next) = tick(&mut state, &input, DT) {
                if matches!(next, SessionState::Won | SessionState::GameOver) {
                    ending = Some(next);
                    break;
                }
            }
        }

        let ending = ending.expect("session should end");
        if ending == SessionState::Won {
            assert_eq!(state.live_bricks(), 0);
        } else {
            assert!(state.ball.pos.y > state.paddle.pos.y + 30.0);
        }
        // Destroyed bricks stay in storage
        assert_eq!(state.bricks.len(), 20);
    }
}
