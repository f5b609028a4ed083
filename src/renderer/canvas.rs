//! Buffered canvas producing GPU-ready triangle lists

use glam::Vec2;
use serde::Serialize;

use super::Canvas;
use super::shapes;
use super::vertex::{Color, Vertex};

/// A text draw request, left for the host's text renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

/// Canvas that tessellates lines and rects into a triangle list
#[derive(Debug, Default)]
pub struct VertexCanvas {
    background: Color,
    vertices: Vec<Vertex>,
    texts: Vec<TextCommand>,
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's output, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.texts.clear();
    }

    /// Clear color requested for the current frame
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn texts(&self) -> &[TextCommand] {
        &self.texts
    }
}

impl Canvas for VertexCanvas {
    fn clear_background(&mut self, color: Color) {
        self.background = color;
    }

    fn draw_line(&mut self, p1: Vec2, p2: Vec2, thickness: f32, color: Color) {
        shapes::thick_line(&mut self.vertices, p1, p2, thickness, color);
    }

    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        shapes::filled_rect(&mut self.vertices, x, y, w, h, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.texts.push(TextCommand {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_canvas_collects_output() {
        let mut canvas = VertexCanvas::new();
        canvas.clear_background([0.0, 0.0, 0.0, 1.0]);
        canvas.draw_line(Vec2::ZERO, Vec2::new(5.0, 5.0), 3.0, [1.0; 4]);
        canvas.draw_filled_rect(0.0, 0.0, 4.0, 4.0, [1.0; 4]);
        canvas.draw_text("Score: 0", 0.0, 0.0, 64.0, [1.0; 4]);

        assert_eq!(canvas.vertices().len(), 12);
        assert_eq!(canvas.vertex_bytes().len(), 12 * Vertex::STRIDE);
        assert_eq!(canvas.texts()[0].text, "Score: 0");
        assert_eq!(canvas.background(), [0.0, 0.0, 0.0, 1.0]);

        canvas.clear();
        assert!(canvas.vertices().is_empty());
        assert!(canvas.texts().is_empty());
    }
}
