//! Wrap Asteroids - a wrapping-world arcade simulation
//!
//! Core modules:
//! - `sim`: Simulation (entity pools, physics, collisions, spawning)
//! - `renderer`: Presentation adapter over an abstract line/rect canvas
//! - `platform`: Input and timing queries supplied by the host shell
//! - `audio`: Sound effect routing to a host audio backend
//! - `game`: Frame driver (pause, restart, slow motion)

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player speed cap (units/s)
    pub const MAX_PLAYER_VELOCITY: f32 = 400.0;
    /// Thrust acceleration (units/s²)
    pub const PLAYER_ACCELERATION: f32 = 100.0;
    /// Half-height of the ship triangle, also its collision/muzzle radius
    pub const PLAYER_HEIGHT: f32 = 10.0;

    pub const MAX_BULLET_COUNT: usize = 100;
    pub const BULLET_SPEED: f32 = 1000.0;
    /// Bullets die this far outside the visible rect
    pub const BULLET_BOUND_MARGIN: f32 = 20.0;

    pub const MAX_ASTEROID_COUNT: usize = 256;
    pub const ASTEROID_BIG_RADIUS: f32 = 32.0;
    pub const ASTEROID_SMALL_RADIUS: f32 = 16.0;
    pub const ASTEROID_MIN_SIDES: i32 = 5;
    pub const ASTEROID_MAX_SIDES: i32 = 11;
    /// Per-coordinate vertex jitter (units)
    pub const ASTEROID_JITTER: f32 = 5.0;
    pub const ASTEROID_SPAWN_SEC: f32 = 2.0;
    pub const ASTEROID_SPAWN_SPEED: f32 = 100.0;
    /// Distance beyond the screen edge where new asteroids appear
    pub const ASTEROID_SPAWN_MARGIN: f32 = 50.0;
    pub const ASTEROID_FRAGMENTS: usize = 4;

    pub const MAX_PARTICLE_COUNT: usize = 10_000;
    pub const THRUSTER_INTERVAL_SEC: f32 = 0.05;
    pub const THRUSTER_PARTICLE_LIFE: f32 = 0.35;
    pub const THRUSTER_PARTICLE_SPEED: f32 = 100.0;
    /// Exhaust spread either side of the reverse heading (π/10 = 18°)
    pub const THRUSTER_SPREAD: f32 = std::f32::consts::PI / 10.0;
    pub const EXPLOSION_PARTICLE_COUNT: usize = 20;
    pub const EXPLOSION_PARTICLE_LIFE: f32 = 0.3;
    pub const EXPLOSION_OFFSET: f32 = 10.0;
    pub const EXPLOSION_MIN_SPEED: i32 = 10;
    pub const EXPLOSION_MAX_SPEED: i32 = 50;

    /// Default screen size (world units = pixels)
    pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;
    /// Smallest screen side the spawn and wrap rules make sense on
    pub const MIN_SCREEN_SIDE: u32 = 64;
}

/// Screen-space "up" (y grows downward); rotation 0 points here
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Angle in radians for a `[0, 100]` percentage of a full turn
#[inline]
pub fn percent_turn(roll: i32) -> f32 {
    std::f32::consts::TAU * roll as f32 / 100.0
}
