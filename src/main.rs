//! Wrap Asteroids entry point
//!
//! The window, GPU and audio device belong to a host shell. Natively this
//! binary runs a headless session with an autopilot at the controls, renders
//! every frame into a vertex buffer and prints a JSON summary.
//!
//! Usage: `wrap-asteroids [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use glam::Vec2;
    use serde::Serialize;

    use wrap_asteroids::audio::SilentBackend;
    use wrap_asteroids::platform::{FrameInput, ScriptedPlatform};
    use wrap_asteroids::renderer::{TextCommand, VertexCanvas};
    use wrap_asteroids::sim::GameState;
    use wrap_asteroids::{Game, Settings};

    /// Frames between autopilot shots
    const FIRE_INTERVAL: u64 = 8;
    /// Frames the autopilot waits on the game-over screen before restarting
    const RESTART_DELAY: u64 = 90;

    #[derive(Debug, Default, Serialize)]
    struct Report {
        seed: u64,
        frames: u32,
        games_played: u32,
        best_score: u64,
        final_score: u64,
        live_asteroids: usize,
        live_particles: usize,
        last_frame_vertices: usize,
        last_frame_bytes: usize,
        /// HUD text left for the host's text renderer on the last frame
        last_frame_texts: Vec<TextCommand>,
    }

    /// Aims at the nearest asteroid and keeps firing; restarts after a crash
    struct Autopilot {
        game_over_frames: u64,
    }

    impl Autopilot {
        fn steer(&mut self, state: &GameState, frame: u64) -> FrameInput {
            if state.game_over {
                self.game_over_frames += 1;
                return FrameInput {
                    restart: self.game_over_frames >= RESTART_DELAY,
                    ..FrameInput::default()
                };
            }
            self.game_over_frames = 0;

            let ship = state.player.pos;
            let target = state
                .asteroids
                .iter()
                .map(|a| a.pos)
                .min_by(|a, b| a.distance_squared(ship).total_cmp(&b.distance_squared(ship)));

            match target {
                Some(pointer) => FrameInput {
                    pointer,
                    fire: frame % FIRE_INTERVAL == 0,
                    ..FrameInput::default()
                },
                // Nothing to shoot: drift back toward the centre
                None => FrameInput {
                    pointer: state.screen / 2.0,
                    thrust: ship.distance(state.screen / 2.0) > 100.0,
                    ..FrameInput::default()
                },
            }
        }
    }

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    fn load_settings() -> Settings {
        let Some(path) = std::env::args().nth(1) else {
            return Settings::load_or_default(None);
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Settings::load_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Could not read {}: {}", path, e);
                Settings::default()
            }
        }
    }

    pub fn run() -> Result<(), serde_json::Error> {
        let settings = load_settings();
        let seed = settings.seed.unwrap_or_else(time_seed);

        let mut game = Game::new(&settings, seed, SilentBackend);
        let mut platform = ScriptedPlatform::new(
            Vec2::new(settings.screen_width as f32, settings.screen_height as f32),
            settings.demo_frame_time,
        );
        let mut canvas = VertexCanvas::new();
        let mut pilot = Autopilot {
            game_over_frames: 0,
        };

        let mut report = Report {
            seed,
            frames: settings.demo_frames,
            games_played: 1,
            ..Report::default()
        };

        for frame in 0..u64::from(settings.demo_frames) {
            let input = pilot.steer(game.state(), frame);
            if input.restart {
                report.games_played += 1;
            }
            platform.set_input(input);

            canvas.clear();
            game.frame(&platform, &mut canvas);
            report.best_score = report.best_score.max(game.state().score);
            log::trace!(
                "frame {}: {} vertices, {} asteroids",
                frame,
                canvas.vertices().len(),
                game.state().asteroids.len()
            );
        }

        let state = game.state();
        report.final_score = state.score;
        report.live_asteroids = state.asteroids.len();
        report.live_particles = state.particles.len();
        report.last_frame_vertices = canvas.vertices().len();
        report.last_frame_bytes = canvas.vertex_bytes().len();
        report.last_frame_texts = canvas.texts().to_vec();

        log::info!(
            "Session finished: {} games, best score {}",
            report.games_played,
            report.best_score
        );
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wrap Asteroids (headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("Failed to write report: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Game::frame` from their own animation loop
}
