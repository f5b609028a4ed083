//! Per-frame simulation step
//!
//! Advances the ship, bullets, asteroids and particles by one frame. Drawing
//! is a separate pass that reads the state afterwards.

use glam::Vec2;

use super::collision::{
    asteroid_asteroid_collision, deflect_velocity, fully_on_screen, point_hits_asteroid,
};
use super::geometry::{angle_between, wrap_position};
use super::spawn;
use super::state::{GameEvent, GameState};
use crate::UP;
use crate::consts::*;

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in world units
    pub pointer: Vec2,
    /// Thrust held (level-triggered)
    pub thrust: bool,
    /// Fire pressed this frame (edge-triggered)
    pub fire: bool,
}

/// Advance the game state by `dt` seconds; returns the game-over flag
///
/// `dt` is expected to already include any slow-motion scaling.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> bool {
    state.clock += dt;

    // A pointer sitting exactly on the ship keeps the current heading
    let to_pointer = input.pointer - state.player.pos;
    let heading = to_pointer
        .try_normalize()
        .unwrap_or_else(|| state.player.heading());

    let mut thrusting = false;
    if !state.game_over {
        if input.thrust {
            state.player.vel += heading * state.player.acceleration * dt;
            thrusting = true;
        }
        if input.fire && spawn::fire_bullet(state, heading).is_none() {
            log::trace!("Bullet pool full, shot dropped");
        }
    }

    update_spawn_timer(state, dt);
    update_player(state, to_pointer, heading, thrusting, dt);
    update_bullets(state, dt);
    update_asteroids(state, dt);
    update_particles(state, dt);

    state.game_over
}

/// Count down to the next asteroid, carrying any overshoot into the next wait
fn update_spawn_timer(state: &mut GameState, dt: f32) {
    state.asteroid_spawn_sec -= dt;
    if !state.game_over && state.asteroid_spawn_sec < 0.0 {
        state.asteroid_spawn_sec += ASTEROID_SPAWN_SEC;
        if spawn::spawn_incoming_asteroid(state).is_none() {
            log::trace!("Asteroid pool full, spawn skipped");
        }
    }
}

fn update_player(state: &mut GameState, to_pointer: Vec2, heading: Vec2, thrusting: bool, dt: f32) {
    let player = &mut state.player;
    if to_pointer != Vec2::ZERO {
        player.rotation = angle_between(UP, to_pointer);
    }
    player.vel = player.vel.clamp_length_max(MAX_PLAYER_VELOCITY);
    player.pos += player.vel * dt;

    if thrusting {
        state.thruster_sec -= dt;
    }
    if state.thruster_sec < 0.0 {
        state.thruster_sec = THRUSTER_INTERVAL_SEC;
        spawn::emit_thruster_particle(state, heading);
    }

    state.player.pos = wrap_position(state.player.pos, state.screen);
}

fn update_bullets(state: &mut GameState, dt: f32) {
    let min = Vec2::splat(-BULLET_BOUND_MARGIN);
    let max = state.screen + Vec2::splat(BULLET_BOUND_MARGIN);

    let mut i = 0;
    while i < state.bullets.len() {
        let Some(bullet) = state.bullets.get_mut(i) else {
            break;
        };
        bullet.pos += bullet.dir * BULLET_SPEED * dt;
        let pos = bullet.pos;

        // Off the extended bound: gone, and no collision test this frame.
        // The bullet swapped into slot `i` still needs its update.
        if pos.x < min.x || pos.x > max.x || pos.y < min.y || pos.y > max.y {
            state.bullets.reclaim(i);
            continue;
        }

        let target = state
            .asteroids
            .iter()
            .position(|asteroid| point_hits_asteroid(pos, asteroid));
        match target {
            Some(j) => {
                shoot_asteroid(state, j);
                state.bullets.reclaim(i);
            }
            None => i += 1,
        }
    }
}

/// Score, fragment and blow up the asteroid at `index`
fn shoot_asteroid(state: &mut GameState, index: usize) {
    let Some(asteroid) = state.asteroids.get(index) else {
        return;
    };
    let (pos, vel, size) = (asteroid.pos, asteroid.vel, asteroid.size);

    state.score += 1;
    if size.fragments() {
        let children = spawn::spawn_fragments(state, pos, vel);
        log::debug!("Big asteroid split into {} fragments", children);
    }
    state.events.push(GameEvent::AsteroidDestroyed { size });
    spawn::destroy_asteroid(state, index);
}

fn update_asteroids(state: &mut GameState, dt: f32) {
    let screen = state.screen;
    let player_pos = state.player.pos;

    for i in 0..state.asteroids.len() {
        let asteroids = state.asteroids.as_slice();
        let contact = asteroids
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter_map(|(_, other)| asteroid_asteroid_collision(&asteroids[i], other))
            .last();

        let Some(asteroid) = state.asteroids.get_mut(i) else {
            break;
        };
        if let Some(point) = contact {
            asteroid.vel = deflect_velocity(asteroid.pos, asteroid.vel, point);
        }

        asteroid.pos += asteroid.vel * dt;

        if !asteroid.has_entered_screen && fully_on_screen(asteroid, screen) {
            asteroid.has_entered_screen = true;
        }
        if asteroid.has_entered_screen {
            asteroid.pos = wrap_position(asteroid.pos, screen);
        }

        let hit_player = point_hits_asteroid(player_pos, asteroid);
        if hit_player && !state.game_over {
            state.game_over = true;
            state.events.push(GameEvent::PlayerDestroyed);
            log::info!("Ship destroyed, final score {}", state.score);
        }
    }
}

fn update_particles(state: &mut GameState, dt: f32) {
    state.particles.sweep(|particle| {
        particle.life -= dt;
        if particle.life < 0.0 {
            return false;
        }
        particle.pos += particle.vel * dt;
        true
    });
}
