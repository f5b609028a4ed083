//! Presentation layer
//!
//! The simulation never draws. After each tick `scene::draw_frame` reads the
//! game state and issues line/rect/text commands to a `Canvas` supplied by
//! the host (a GPU backend, or `VertexCanvas` for buffered output).

pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{TextCommand, VertexCanvas};
pub use scene::{HudState, draw_frame};
pub use vertex::{Color, Vertex};

use glam::Vec2;

/// Drawing primitives provided by the host
pub trait Canvas {
    /// Fill the whole target; issued once at the start of each frame
    fn clear_background(&mut self, color: Color);

    /// Stroke a line segment
    fn draw_line(&mut self, p1: Vec2, p2: Vec2, thickness: f32, color: Color);

    /// Fill an axis-aligned rectangle with its top-left corner at (x, y)
    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);

    /// Rendered width of `text` at `size`
    ///
    /// The default assumes a monospace face half as wide as it is tall.
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}
