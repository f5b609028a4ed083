//! Draws the game state
//!
//! Wrapped entities are drawn once per neighbouring screen tile so anything
//! crossing an edge shows up on the opposite side at the same time.

use glam::Vec2;

use super::Canvas;
use super::vertex::colors;
use crate::consts::PLAYER_HEIGHT;
use crate::sim::geometry::{rotate, wrap_copy_offsets};
use crate::sim::{Asteroid, Bullet, GameState, Particle, Player};

const LINE_THICKNESS: f32 = 3.0;
const BULLET_TAIL: f32 = 10.0;
const PARTICLE_SIZE: f32 = 4.0;
const SCORE_TEXT_SIZE: f32 = 64.0;
const PAUSED_TEXT_SIZE: f32 = 64.0;
const GAME_OVER_TEXT_SIZE: f32 = 32.0;
const GAME_OVER_TEXT: &str = "Game Over (R to Restart)";

/// Frame-driver state shown in the HUD
#[derive(Debug, Clone, Copy, Default)]
pub struct HudState {
    pub paused: bool,
}

/// Draw one complete frame
pub fn draw_frame(canvas: &mut impl Canvas, state: &GameState, hud: HudState) {
    canvas.clear_background(colors::BACKGROUND);
    let offsets = wrap_copy_offsets(state.screen);

    if !state.game_over {
        draw_player(canvas, &state.player, &offsets);
    }
    for bullet in &state.bullets {
        draw_bullet(canvas, bullet, &offsets);
    }
    for asteroid in &state.asteroids {
        draw_asteroid(canvas, asteroid, &offsets);
    }
    for particle in &state.particles {
        draw_particle(canvas, particle);
    }
    draw_hud(canvas, state, hud);
}

/// Ship outline as three world-space corners (nose, left, right)
pub fn ship_corners(player: &Player) -> [Vec2; 3] {
    let h = PLAYER_HEIGHT;
    [Vec2::new(0.0, -h), Vec2::new(-h, h), Vec2::new(h, h)]
        .map(|corner| rotate(corner, player.rotation) + player.pos)
}

fn draw_player(canvas: &mut impl Canvas, player: &Player, offsets: &[Vec2]) {
    let [t, l, r] = ship_corners(player);
    for offset in offsets {
        canvas.draw_line(t + *offset, l + *offset, LINE_THICKNESS, colors::SHIP);
        canvas.draw_line(t + *offset, r + *offset, LINE_THICKNESS, colors::SHIP);
        canvas.draw_line(l + *offset, r + *offset, LINE_THICKNESS, colors::SHIP);
    }
}

fn draw_bullet(canvas: &mut impl Canvas, bullet: &Bullet, offsets: &[Vec2]) {
    let tail = bullet.pos - bullet.dir * BULLET_TAIL;
    for offset in offsets {
        canvas.draw_line(
            bullet.pos + *offset,
            tail + *offset,
            LINE_THICKNESS,
            colors::BULLET,
        );
    }
}

fn draw_asteroid(canvas: &mut impl Canvas, asteroid: &Asteroid, offsets: &[Vec2]) {
    // Still drifting in from off-screen: no wrapped copies yet
    let offsets = if asteroid.has_entered_screen {
        offsets
    } else {
        &offsets[..1]
    };

    for edge in asteroid.points.windows(2) {
        let p1 = edge[0] + asteroid.pos;
        let p2 = edge[1] + asteroid.pos;
        for offset in offsets {
            canvas.draw_line(p1 + *offset, p2 + *offset, LINE_THICKNESS, colors::ASTEROID);
        }
    }
}

fn draw_particle(canvas: &mut impl Canvas, particle: &Particle) {
    let half = PARTICLE_SIZE / 2.0;
    canvas.draw_filled_rect(
        particle.pos.x - half,
        particle.pos.y - half,
        PARTICLE_SIZE,
        PARTICLE_SIZE,
        colors::PARTICLE,
    );
}

fn draw_hud(canvas: &mut impl Canvas, state: &GameState, hud: HudState) {
    let score = format!("Score: {}", state.score);
    canvas.draw_text(&score, 0.0, 0.0, SCORE_TEXT_SIZE, colors::TEXT);

    if hud.paused {
        draw_centered_text(canvas, state.screen, "Paused", PAUSED_TEXT_SIZE);
    }
    if state.game_over {
        draw_centered_text(canvas, state.screen, GAME_OVER_TEXT, GAME_OVER_TEXT_SIZE);
    }
}

fn draw_centered_text(canvas: &mut impl Canvas, screen: Vec2, text: &str, size: f32) {
    let width = canvas.measure_text(text, size);
    let x = screen.x / 2.0 - width / 2.0;
    let y = screen.y / 2.0 - size / 2.0;
    canvas.draw_text(text, x, y, size, colors::TEXT);
}
