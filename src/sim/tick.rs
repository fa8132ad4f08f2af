//! Frame driver
//!
//! One call per rendered frame: dispatch on the session state, run the
//! updaters in order while playing, and apply the resulting transition.

use super::state::{GameState, SessionState};
use super::update::{BallOutcome, update_ball, update_paddle};

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Left arrow or A held
    pub left: bool,
    /// Right arrow or D held
    pub right: bool,
    /// Space held
    pub start: bool,
    /// R held
    pub restart: bool,
}

/// Advance the game by one frame of `dt` seconds
///
/// Returns the new session state when this frame changed it.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> Option<SessionState> {
    match state.session {
        SessionState::Start => {
            if input.start {
                return Some(enter(state, SessionState::Playing));
            }
            None
        }
        SessionState::GameOver | SessionState::Won => {
            if input.restart {
                state.reset();
                return Some(state.session);
            }
            None
        }
        SessionState::Playing => {
            let inner = state.inner_boundary();
            update_paddle(&mut state.paddle, &inner, input, dt);
            let outcome = update_ball(
                &mut state.ball,
                &state.paddle,
                &inner,
                &mut state.bricks,
                dt,
            );
            state.frames_played += 1;
            state.time_played += dt;

            match outcome {
                BallOutcome::InPlay => None,
                BallOutcome::Won => Some(enter(state, SessionState::Won)),
                BallOutcome::Lost => Some(enter(state, SessionState::GameOver)),
            }
        }
    }
}

fn enter(state: &mut GameState, next: SessionState) -> SessionState {
    log::info!(
        "{} -> {} after {} frames ({:.2}s)",
        state.session.as_str(),
        next.as_str(),
        state.frames_played,
        state.time_played
    );
    state.session = next;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn start() -> FrameInput {
        FrameInput {
            start: true,
            ..Default::default()
        }
    }

    fn restart() -> FrameInput {
        FrameInput {
            restart: true,
            ..Default::default()
        }
    }

    fn playing() -> GameState {
        let mut state = GameState::new();
        tick(&mut state, &start(), DT);
        state
    }

    #[test]
    fn test_tick_start_to_playing() {
        let mut state = GameState::new();
        let ball = state.ball;

        // No input - stays on the title screen, nothing moves
        assert_eq!(tick(&mut state, &FrameInput::default(), DT), None);
        assert_eq!(state.session, SessionState::Start);
        assert_eq!(state.ball, ball);

        // Start consumes the frame
        assert_eq!(tick(&mut state, &start(), DT), Some(SessionState::Playing));
        assert_eq!(state.ball, ball);
        assert_eq!(state.frames_played, 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = playing();

        assert_eq!(tick(&mut state, &restart(), DT), None);
        assert_eq!(state.session, SessionState::Playing);
        assert_eq!(state.frames_played, 1);
    }

    #[test]
    fn test_playing_moves_ball_and_paddle() {
        let mut state = playing();
        let ball = state.ball;
        let input = FrameInput {
            right: true,
            ..Default::default()
        };

        assert_eq!(tick(&mut state, &input, DT), None);
        assert_eq!(state.ball.pos, ball.pos + ball.vel * DT);
        assert!(state.paddle.pos.x > 225.0);
    }

    #[test]
    fn test_lose_transitions_to_game_over() {
        let mut state = playing();
        state.ball.pos = Vec2::new(40.0, 779.0);
        state.ball.vel = Vec2::new(100.0, 282.0);

        assert_eq!(
            tick(&mut state, &FrameInput::default(), DT),
            Some(SessionState::GameOver)
        );
        assert_eq!(state.session, SessionState::GameOver);

        // Frozen until restart
        let frozen = state.ball;
        assert_eq!(tick(&mut state, &start(), DT), None);
        assert_eq!(state.ball, frozen);
    }

    #[test]
    fn test_last_brick_transitions_to_won() {
        let mut state = playing();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.live = false;
        }
        let target = state.bricks[0].pos;
        state.ball.pos = Vec2::new(target.x, target.y + 19.0);
        state.ball.vel = Vec2::new(-100.0, -282.0);
        let before = state.ball.pos;

        assert_eq!(
            tick(&mut state, &FrameInput::default(), DT),
            Some(SessionState::Won)
        );
        assert_eq!(state.live_bricks(), 0);
        assert_eq!(state.ball.pos, before);
    }

    #[test]
    fn test_restart_routes_through_start() {
        for end in [SessionState::GameOver, SessionState::Won] {
            let mut state = playing();
            state.session = end;
            state.bricks[3].live = false;

            assert_eq!(tick(&mut state, &FrameInput::default(), DT), None);
            assert_eq!(tick(&mut state, &restart(), DT), Some(SessionState::Start));
            assert_eq!(state.live_bricks(), 20);
            assert_eq!(state.frames_played, 0);

            assert_eq!(tick(&mut state, &start(), DT), Some(SessionState::Playing));
        }
    }

    #[test]
    fn test_speed_constant_over_a_session() {
        let mut state = playing();
        let speed = state.ball.speed();

        for _ in 0..2_000 {
            let input = crate::sim::autopilot(&state, false);
            tick(&mut state, &input, DT);
            assert!((state.ball.speed() - speed).abs() < 1e-3);
            if state.session != SessionState::Playing {
                break;
            }
        }
    }
}
