//! Brick Breaker entry point
//!
//! Opens the game window. Built with `--no-default-features` (no raylib) the
//! autopilot plays one session headless and logs how it went.

use brick_breaker::Settings;

#[cfg(feature = "raylib")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker starting...");

    let settings = Settings::load();
    brick_breaker::frontend::run(&settings);
}

#[cfg(not(feature = "raylib"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker (headless) starting...");
    log::info!("Built without the `raylib` feature - no window, autopilot only");

    let settings = Settings::load();
    run_headless(&settings);
}

/// Play one session with the autopilot at the configured frame rate
#[cfg(not(feature = "raylib"))]
fn run_headless(settings: &Settings) {
    use brick_breaker::sim::{GameState, SessionState, autopilot, tick};

    // Ten minutes of simulated play
    let dt = 1.0 / settings.target_fps as f32;
    let max_frames = settings.target_fps as u64 * 60 * 10;

    let mut state = GameState::new();
    for _ in 0..max_frames {
        let input = autopilot(&state, false);
        match tick(&mut state, &input, dt) {
            Some(SessionState::Won) => {
                log::info!("Autopilot cleared the board in {:.1}s", state.time_played);
                return;
            }
            Some(SessionState::GameOver) => {
                log::info!(
                    "Autopilot lost with {} bricks left after {:.1}s",
                    state.live_bricks(),
                    state.time_played
                );
                return;
            }
            _ => {}
        }
    }
    log::warn!(
        "Session still running after {} frames, {} bricks left",
        max_frames,
        state.live_bricks()
    );
}
