//! Spawning rules for asteroids, bullets and particles
//!
//! Every spawn goes through a `FixedPool`, so each function reports whether
//! anything was created and callers only raise side effects on success.

use glam::Vec2;

use super::geometry::{self, rotate};
use super::state::{Asteroid, AsteroidSize, Bullet, GameEvent, GameState, Particle};
use crate::consts::*;
use crate::{UP, percent_turn};

/// Random closed polygon around the origin for a size class
pub fn asteroid_shape(state: &mut GameState, size: AsteroidSize) -> Vec<Vec2> {
    let sides = state.random_value(ASTEROID_MIN_SIDES, ASTEROID_MAX_SIDES);
    let r = size.radius();

    let mut points = Vec::with_capacity(sides as usize + 1);
    for i in 0..sides {
        let theta = std::f32::consts::TAU * i as f32 / sides as f32;
        let jitter = Vec2::new(
            state.random_value(-100, 100) as f32 / 100.0,
            state.random_value(-100, 100) as f32 / 100.0,
        ) * ASTEROID_JITTER;
        points.push(Vec2::new(theta.cos(), theta.sin()) * r + jitter);
    }
    points.push(points[0]);
    points
}

/// Spawn an asteroid at `pos`; returns its pool index
///
/// Asteroids placed outside the screen start with `has_entered_screen` unset.
pub fn spawn_asteroid(
    state: &mut GameState,
    pos: Vec2,
    size: AsteroidSize,
    vel: Vec2,
) -> Option<usize> {
    if state.asteroids.is_full() {
        return None;
    }
    let points = asteroid_shape(state, size);
    let has_entered_screen = geometry::in_screen(pos, state.screen);
    state.asteroids.spawn(Asteroid {
        pos,
        vel,
        points,
        size,
        has_entered_screen,
    })
}

/// Spawn a wave asteroid just off-screen, heading in a random direction
pub fn spawn_incoming_asteroid(state: &mut GameState) -> Option<usize> {
    let size = if state.random_bool() {
        AsteroidSize::Big
    } else {
        AsteroidSize::Small
    };

    let roll = state.random_value(0, 100);
    let dir = rotate(UP, percent_turn(roll));
    let signs = Vec2::new(
        if dir.x >= 0.0 { 1.0 } else { -1.0 },
        if dir.y >= 0.0 { 1.0 } else { -1.0 },
    );
    // Start on the side opposite the heading so it drifts across the screen
    let middle = state.screen / 2.0;
    let relative = (middle + Vec2::splat(ASTEROID_SPAWN_MARGIN)) * -signs;
    let pos = middle + relative;

    let index = spawn_asteroid(state, pos, size, dir * ASTEROID_SPAWN_SPEED)?;
    log::debug!("Asteroid {:?} spawned at {:?} heading {:?}", size, pos, dir);
    Some(index)
}

/// Spawn the small fragments of a destroyed big asteroid
///
/// Each fragment keeps the parent's speed in a fresh random direction.
/// Returns how many fragments fit in the pool.
pub fn spawn_fragments(state: &mut GameState, parent_pos: Vec2, parent_vel: Vec2) -> usize {
    let speed = parent_vel.length();
    let mut spawned = 0;
    for _ in 0..ASTEROID_FRAGMENTS {
        if state.asteroids.is_full() {
            break;
        }
        let roll = state.random_value(0, 100);
        let vel = rotate(UP, percent_turn(roll)) * speed;
        if spawn_asteroid(state, parent_pos, AsteroidSize::Small, vel).is_none() {
            break;
        }
        spawned += 1;
    }
    spawned
}

/// Fire a bullet from the ship's nose along `heading`
///
/// Raises `BulletFired` only when a slot was available.
pub fn fire_bullet(state: &mut GameState, heading: Vec2) -> Option<usize> {
    let bullet = Bullet {
        pos: state.player.pos + heading * PLAYER_HEIGHT,
        dir: heading,
    };
    let index = state.bullets.spawn(bullet)?;
    state.events.push(GameEvent::BulletFired);
    Some(index)
}

/// Emit one exhaust particle behind the ship
pub fn emit_thruster_particle(state: &mut GameState, heading: Vec2) -> Option<usize> {
    if state.particles.is_full() {
        return None;
    }
    let roll = state.random_value(-100, 100);
    let spread = THRUSTER_SPREAD * roll as f32 / 100.0;
    let dir = rotate(UP, state.player.rotation + spread);
    state.particles.spawn(Particle {
        pos: state.player.pos - heading * PLAYER_HEIGHT,
        vel: dir * -THRUSTER_PARTICLE_SPEED,
        life: THRUSTER_PARTICLE_LIFE,
    })
}

/// Emit an explosion burst centred on `pos`; returns the particle count
pub fn emit_explosion(state: &mut GameState, pos: Vec2) -> usize {
    let mut emitted = 0;
    for _ in 0..EXPLOSION_PARTICLE_COUNT {
        if state.particles.is_full() {
            break;
        }
        let offset_roll = state.random_value(0, 100);
        let dir_roll = state.random_value(0, 100);
        let speed = state.random_value(EXPLOSION_MIN_SPEED, EXPLOSION_MAX_SPEED) as f32;

        let offset = rotate(UP, percent_turn(offset_roll)) * EXPLOSION_OFFSET;
        let dir = rotate(UP, percent_turn(dir_roll));
        if state
            .particles
            .spawn(Particle {
                pos: pos + offset,
                vel: dir * speed,
                life: EXPLOSION_PARTICLE_LIFE,
            })
            .is_some()
        {
            emitted += 1;
        }
    }
    emitted
}

/// Remove an asteroid and leave an explosion where it was
pub fn destroy_asteroid(state: &mut GameState, index: usize) -> Option<Asteroid> {
    let asteroid = state.asteroids.reclaim(index)?;
    emit_explosion(state, asteroid.pos);
    Some(asteroid)
}

/// Blow up every live asteroid (used once the game is over)
pub fn destroy_all_asteroids(state: &mut GameState) -> usize {
    let mut destroyed = 0;
    while !state.asteroids.is_empty() {
        let last = state.asteroids.len() - 1;
        if destroy_asteroid(state, last).is_some() {
            destroyed += 1;
        }
    }
    destroyed
}
