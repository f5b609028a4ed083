//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Color, Vertex};

/// Append two triangles covering the quad `a, b, c, d` (in winding order)
fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
    out.push(Vertex::new(a.x, a.y, color));
}

/// Generate vertices for a line of the given thickness
///
/// Zero-length lines produce nothing.
pub fn thick_line(out: &mut Vec<Vertex>, p1: Vec2, p2: Vec2, thickness: f32, color: Color) {
    let Some(dir) = (p2 - p1).try_normalize() else {
        return;
    };
    // Perpendicular for width
    let perp = dir.perp() * (thickness / 2.0);
    push_quad(out, p1 + perp, p2 + perp, p2 - perp, p1 - perp, color);
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn filled_rect(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: Color) {
    let min = Vec2::new(x, y);
    let max = min + Vec2::new(w, h);
    push_quad(
        out,
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    );
}
