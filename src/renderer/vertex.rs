//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SHIP: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BULLET: Color = [1.0, 0.0, 0.0, 1.0];
    pub const ASTEROID: Color = [1.0, 0.0, 0.0, 1.0];
    pub const PARTICLE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 6 * std::mem::size_of::<f32>());
        let v = [Vertex::new(1.0, 2.0, colors::SHIP)];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), Vertex::STRIDE);
    }
}
