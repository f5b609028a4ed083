//! Session driver
//!
//! Owns the simulation state plus the session-level toggles (pause, slow
//! motion) and runs one frame at a time: read input, simulate, play sounds,
//! draw.

use glam::Vec2;

use crate::audio::{AudioManager, SoundBackend};
use crate::consts::MIN_SCREEN_SIDE;
use crate::platform::Platform;
use crate::renderer::{Canvas, HudState, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameState, destroy_all_asteroids, tick};

/// Time factor at or above which the session counts as running at full speed
const FULL_SPEED_THRESHOLD: f32 = 0.9;

pub struct Game<B: SoundBackend> {
    state: GameState,
    paused: bool,
    time_factor: f32,
    slow_motion_factor: f32,
    audio: AudioManager<B>,
    frames: u64,
}

impl<B: SoundBackend> Game<B> {
    pub fn new(settings: &Settings, seed: u64, backend: B) -> Self {
        let mut audio = AudioManager::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        log::info!(
            "New session: {}x{}, seed {}",
            settings.screen_width,
            settings.screen_height,
            seed
        );

        Self {
            state: GameState::new(seed, settings.screen_width, settings.screen_height),
            paused: false,
            time_factor: 1.0,
            slow_motion_factor: settings.slow_motion_factor,
            audio,
            frames: 0,
        }
    }

    /// Run one frame; returns whether the game is over afterwards
    pub fn frame(&mut self, platform: &impl Platform, canvas: &mut impl Canvas) -> bool {
        self.frames += 1;
        self.handle_session_input(platform);

        if !self.paused {
            self.adopt_screen_size(platform.screen_size());
            let input = platform.tick_input();
            let dt = platform.frame_time() * self.time_factor;
            let game_over = tick(&mut self.state, &input, dt);

            if game_over {
                let destroyed = destroy_all_asteroids(&mut self.state);
                if destroyed > 0 {
                    log::debug!("Cleared {} asteroids after game over", destroyed);
                }
            }
        }

        let events = self.state.drain_events();
        self.audio.play_events(&events);

        draw_frame(
            canvas,
            &self.state,
            HudState {
                paused: self.paused,
            },
        );

        self.state.game_over
    }

    /// Follow the host's screen size, ignoring sizes too small to play on
    ///
    /// A minimized window reports zero; the last usable size stays in force.
    fn adopt_screen_size(&mut self, size: Vec2) {
        let min = MIN_SCREEN_SIDE as f32;
        if size.x < min || size.y < min {
            if size != self.state.screen {
                log::trace!("Ignoring unusable screen size {:?}", size);
            }
            return;
        }
        if size != self.state.screen {
            log::debug!("Screen resized to {}x{}", size.x, size.y);
            self.state.screen = size;
        }
    }

    fn handle_session_input(&mut self, platform: &impl Platform) {
        if platform.pause_pressed() && !self.state.game_over {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        }

        if self.state.game_over && platform.restart_pressed() {
            log::info!(
                "Restarting after {} frames, final score {}",
                self.frames,
                self.state.score
            );
            self.state.restart();
        }

        if platform.slow_motion_toggle_pressed() {
            self.time_factor = if self.time_factor < FULL_SPEED_THRESHOLD {
                1.0
            } else {
                self.slow_motion_factor
            };
            log::debug!("Time factor now {}", self.time_factor);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts that script the session
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time_factor(&self) -> f32 {
        self.time_factor
    }

    /// Frames run since the session was created
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn audio(&self) -> &AudioManager<B> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager<B> {
        &mut self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::platform::{FrameInput, ScriptedPlatform};
    use crate::renderer::{Color, VertexCanvas};
    use crate::sim::{Asteroid, AsteroidSize};

    #[derive(Default)]
    struct Recorder {
        played: Vec<SoundEffect>,
    }

    impl SoundBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.played.push(effect);
        }
    }

    #[derive(Default)]
    struct TextCanvas {
        texts: Vec<String>,
    }

    impl Canvas for TextCanvas {
        fn clear_background(&mut self, _color: Color) {}

        fn draw_line(&mut self, _p1: Vec2, _p2: Vec2, _thickness: f32, _color: Color) {}

        fn draw_filled_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}

        fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _size: f32, _color: Color) {
            self.texts.push(text.to_string());
        }
    }

    fn new_game() -> Game<Recorder> {
        Game::new(&Settings::default(), 7, Recorder::default())
    }

    fn press(platform: &mut ScriptedPlatform, input: FrameInput) {
        platform.set_input(FrameInput {
            pointer: Vec2::new(400.0, 0.0),
            ..input
        });
    }

    fn asteroid_on_player(game: &Game<Recorder>) -> Asteroid {
        let pos = game.state().player.pos;
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            points: vec![
                Vec2::new(0.0, -32.0),
                Vec2::new(32.0, 0.0),
                Vec2::new(0.0, 32.0),
                Vec2::new(-32.0, 0.0),
                Vec2::new(0.0, -32.0),
            ],
            size: AsteroidSize::Big,
            has_entered_screen: true,
        }
    }

    #[test]
    fn test_pause_freezes_simulation_but_still_draws() {
        let mut game = new_game();
        let mut platform = ScriptedPlatform::default();
        let mut canvas = TextCanvas::default();

        press(&mut platform, FrameInput { pause: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert!(game.is_paused());
        assert_eq!(game.state().clock, 0.0);
        assert!(canvas.texts.contains(&"Paused".to_string()));

        press(&mut platform, FrameInput::default());
        game.frame(&platform, &mut canvas);
        assert_eq!(game.state().clock, 0.0);

        press(&mut platform, FrameInput { pause: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert!(!game.is_paused());
        assert!(game.state().clock > 0.0);
    }

    #[test]
    fn test_slow_motion_scales_dt() {
        let mut game = new_game();
        let mut platform = ScriptedPlatform::default();
        platform.set_frame_time(1.0);
        let mut canvas = VertexCanvas::new();

        press(&mut platform, FrameInput { slow_motion: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert_eq!(game.time_factor(), 0.1);
        assert!((game.state().clock - 0.1).abs() < 1e-6);

        press(&mut platform, FrameInput { slow_motion: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert_eq!(game.time_factor(), 1.0);
        assert!((game.state().clock - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_fire_plays_laser() {
        let mut game = new_game();
        let mut platform = ScriptedPlatform::default();
        let mut canvas = VertexCanvas::new();

        press(&mut platform, FrameInput { fire: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert_eq!(game.state().bullets.len(), 1);
        assert_eq!(game.audio().backend().played, vec![SoundEffect::LaserFire]);
        assert!(game.state().events.is_empty());
    }

    #[test]
    fn test_game_over_clears_asteroids_and_ignores_pause() {
        let mut game = new_game();
        let asteroid = asteroid_on_player(&game);
        game.state_mut().asteroids.spawn(asteroid);
        let mut platform = ScriptedPlatform::default();
        let mut canvas = TextCanvas::default();

        press(&mut platform, FrameInput::default());
        assert!(game.frame(&platform, &mut canvas));
        assert!(game.state().asteroids.is_empty());
        assert!(!game.state().particles.is_empty());
        assert!(canvas.texts.iter().any(|t| t.starts_with("Game Over")));

        press(&mut platform, FrameInput { pause: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert!(!game.is_paused());
    }

    #[test]
    fn test_restart_only_while_game_over() {
        let mut game = new_game();
        let mut platform = ScriptedPlatform::default();
        let mut canvas = VertexCanvas::new();

        game.state_mut().score = 3;
        press(&mut platform, FrameInput { restart: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert_eq!(game.state().score, 3);

        let asteroid = asteroid_on_player(&game);
        game.state_mut().asteroids.spawn(asteroid);
        press(&mut platform, FrameInput::default());
        assert!(game.frame(&platform, &mut canvas));

        press(&mut platform, FrameInput { restart: true, ..FrameInput::default() });
        assert!(!game.frame(&platform, &mut canvas));
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_minimized_window_keeps_last_screen() {
        let mut game = new_game();
        let mut platform = ScriptedPlatform::default();
        let mut canvas = VertexCanvas::new();
        press(&mut platform, FrameInput { thrust: true, ..FrameInput::default() });

        platform.set_screen_size(Vec2::ZERO);
        game.frame(&platform, &mut canvas);
        assert_eq!(game.state().screen, Vec2::new(800.0, 600.0));
        assert!(game.state().player.pos.is_finite());

        platform.set_screen_size(Vec2::new(800.0, 600.0));
        for _ in 0..5 {
            game.frame(&platform, &mut canvas);
        }
        let pos = game.state().player.pos;
        assert!(pos.is_finite());
        assert!(pos.x >= 0.0 && pos.x < 800.0 && pos.y >= 0.0 && pos.y < 600.0);

        platform.set_screen_size(Vec2::new(1024.0, 768.0));
        game.frame(&platform, &mut canvas);
        assert_eq!(game.state().screen, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_settings_reach_audio() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut game = Game::new(&settings, 1, Recorder::default());
        let mut platform = ScriptedPlatform::default();
        let mut canvas = VertexCanvas::new();
        press(&mut platform, FrameInput { fire: true, ..FrameInput::default() });
        game.frame(&platform, &mut canvas);
        assert!(game.audio().backend().played.is_empty());
    }
}
