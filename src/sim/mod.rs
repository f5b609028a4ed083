//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, so a seed and an input stream replay exactly
//! - Fixed-capacity pools, spawns beyond capacity are dropped
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{asteroid_asteroid_collision, deflect_velocity};
pub use pool::FixedPool;
pub use spawn::destroy_all_asteroids;
pub use state::{Asteroid, AsteroidSize, Bullet, GameEvent, GameState, Particle, Player};
pub use tick::{TickInput, tick};
