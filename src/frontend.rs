//! raylib frontend: window, input sampling, clock, music and drawing
//!
//! Everything in here is a thin wrapper over raylib. Game logic stays in
//! [`crate::sim`]; this module only feeds it input and frame deltas and draws
//! what it produces.

use raylib::prelude::*;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{self, FrameInput, GameState, SessionState};

fn rect(rect: &sim::Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

/// Sample this frame's input from the keyboard
fn sample_input(rl: &RaylibHandle) -> FrameInput {
    FrameInput {
        left: rl.is_key_down(KeyboardKey::KEY_LEFT) || rl.is_key_down(KeyboardKey::KEY_A),
        right: rl.is_key_down(KeyboardKey::KEY_RIGHT) || rl.is_key_down(KeyboardKey::KEY_D),
        start: rl.is_key_down(KeyboardKey::KEY_SPACE),
        restart: rl.is_key_down(KeyboardKey::KEY_R),
    }
}

/// Fraction of the music track played so far, clamped to 1.0
fn music_progress(played: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    (played / length).min(1.0)
}

fn draw(d: &mut impl RaylibDraw, state: &GameState, settings: &Settings) {
    d.clear_background(Color::BLACK);

    if let Some((text, x)) = state.session.banner() {
        d.draw_text(
            text,
            x,
            (SCREEN_HEIGHT / 2.0) as i32,
            BANNER_FONT_SIZE,
            Color::RAYWHITE,
        );
        return;
    }

    if settings.show_fps {
        d.draw_fps(0, 0);
    }
    d.draw_rectangle_lines_ex(rect(&state.boundary), BOUNDARY_THICKNESS, Color::RAYWHITE);
    d.draw_rectangle_rec(rect(&sim::paddle_rect(&state.paddle)), Color::RAYWHITE);
    d.draw_circle_v(
        Vector2::new(state.ball.pos.x, state.ball.pos.y),
        state.ball.radius,
        Color::RAYWHITE,
    );
    for brick in state.bricks.iter().filter(|b| b.live) {
        d.draw_rectangle_rec(rect(&sim::brick_rect(brick)), Color::RAYWHITE);
    }
}

/// Open the window and run until it is closed
pub fn run(settings: &Settings) {
    let (mut rl, thread) = raylib::init()
        .size(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32)
        .title("Brick Breaker")
        .build();
    rl.set_trace_log(TraceLogLevel::LOG_NONE);
    rl.set_target_fps(settings.target_fps);

    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => Some(device),
        Err(e) => {
            log::warn!("Failed to initialize audio device - music disabled: {}", e);
            None
        }
    };
    let music = match (&audio, settings.music_enabled) {
        (Some(audio), true) => match audio.new_music(&settings.music_path) {
            Ok(music) => Some(music),
            Err(e) => {
                log::warn!("Failed to load music '{}': {}", settings.music_path, e);
                None
            }
        },
        _ => None,
    };
    if let Some(music) = &music {
        music.set_volume(settings.effective_music_volume());
        music.play_stream();
    }

    let mut state = GameState::new();
    let mut track_finished = false;
    log::info!("Brick Breaker running!");

    while !rl.window_should_close() {
        if let Some(music) = &music {
            music.update_stream();
            let progress = music_progress(music.get_time_played(), music.get_time_length());
            if progress >= 1.0 && !track_finished {
                log::debug!("Music track finished");
            }
            track_finished = progress >= 1.0;
        }

        let dt = rl.get_frame_time();
        let input = sample_input(&rl);
        if let Some(next) = sim::tick(&mut state, &input, dt) {
            if next == SessionState::Start {
                log::info!("Back to the title screen");
            }
        }

        let mut d = rl.begin_drawing(&thread);
        draw(&mut d, &state, settings);
    }

    log::info!("Window closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_progress() {
        assert_eq!(music_progress(30.0, 120.0), 0.25);
        assert_eq!(music_progress(125.0, 120.0), 1.0);
        assert_eq!(music_progress(5.0, 0.0), 0.0);
    }
}
