//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives in `GameState`, so
//! independent sessions never share hidden state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry;
use super::pool::FixedPool;
use crate::consts::*;

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Big,
    Small,
}

impl AsteroidSize {
    /// Nominal polygon radius before jitter
    pub fn radius(&self) -> f32 {
        match self {
            AsteroidSize::Big => ASTEROID_BIG_RADIUS,
            AsteroidSize::Small => ASTEROID_SMALL_RADIUS,
        }
    }

    /// Whether destroying this size spawns fragments
    pub fn fragments(&self) -> bool {
        matches!(self, AsteroidSize::Big)
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Radians, 0 = up, clockwise on screen
    pub rotation: f32,
    /// Thrust acceleration (units/s²)
    pub acceleration: f32,
    pub vel: Vec2,
}

impl Player {
    /// A fresh ship at the centre of the screen
    pub fn centered(screen: Vec2) -> Self {
        Self {
            pos: screen / 2.0,
            rotation: std::f32::consts::FRAC_PI_2,
            acceleration: PLAYER_ACCELERATION,
            vel: Vec2::ZERO,
        }
    }

    /// Unit vector the ship's nose points along
    pub fn heading(&self) -> Vec2 {
        geometry::heading_from_rotation(self.rotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Closed ring in local space (last point repeats the first)
    pub points: Vec<Vec2>,
    pub size: AsteroidSize,
    /// Set once the whole polygon has been inside the visible rect
    pub has_entered_screen: bool,
}

impl Asteroid {
    /// Polygon ring translated to world space
    pub fn world_ring(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(move |p| *p + self.pos)
    }

    /// Whether a world-space point lies inside the polygon
    pub fn contains(&self, point: Vec2) -> bool {
        geometry::point_in_polygon(point - self.pos, &self.points)
    }

    /// Number of unique vertices
    pub fn sides(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime (seconds)
    pub life: f32,
}

/// Sound-worthy things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A bullet left the ship
    BulletFired,
    /// An asteroid was shot
    AsteroidDestroyed { size: AsteroidSize },
    /// The ship touched an asteroid
    PlayerDestroyed,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// World (= screen) size in units
    pub screen: Vec2,
    pub player: Player,
    pub score: u64,
    /// Countdown to the next asteroid spawn (seconds)
    pub asteroid_spawn_sec: f32,
    /// Countdown to the next thruster particle (seconds)
    pub thruster_sec: f32,
    pub game_over: bool,
    /// Simulated seconds since the session (re)started
    pub clock: f32,
    pub bullets: FixedPool<Bullet>,
    pub asteroids: FixedPool<Asteroid>,
    pub particles: FixedPool<Particle>,
    /// Events raised by the last tick, drained by the frame driver
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session for a `width` x `height` screen
    ///
    /// Each side is raised to at least `MIN_SCREEN_SIDE`.
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let screen = Vec2::new(
            width.max(MIN_SCREEN_SIDE) as f32,
            height.max(MIN_SCREEN_SIDE) as f32,
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen,
            player: Player::centered(screen),
            score: 0,
            asteroid_spawn_sec: ASTEROID_SPAWN_SEC,
            thruster_sec: 0.0,
            game_over: false,
            clock: 0.0,
            bullets: FixedPool::new(MAX_BULLET_COUNT),
            asteroids: FixedPool::new(MAX_ASTEROID_COUNT),
            particles: FixedPool::new(MAX_PARTICLE_COUNT),
            events: Vec::new(),
        }
    }

    /// Start a fresh session on the same screen, keeping the RNG stream
    ///
    /// All pools are emptied; nothing from the previous run carries over.
    pub fn restart(&mut self) {
        self.player = Player::centered(self.screen);
        self.score = 0;
        self.asteroid_spawn_sec = ASTEROID_SPAWN_SEC;
        self.thruster_sec = 0.0;
        self.game_over = false;
        self.clock = 0.0;
        self.bullets.clear();
        self.asteroids.clear();
        self.particles.clear();
        self.events.clear();
    }

    /// Uniform random integer in `[lo, hi]`
    pub fn random_value(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }

    /// Uniform random boolean
    pub fn random_bool(&mut self) -> bool {
        self.random_value(0, 1) == 1
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
