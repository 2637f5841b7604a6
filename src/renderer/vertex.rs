//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes of a vertex slice, ready for a GPU buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Fixed colors used outside the level theme
pub mod colors {
    use crate::color::Color;

    /// Discovery overlay paper (alpha set per frame)
    pub const FLASH_PAPER: Color = Color::rgb(245, 238, 210);
    /// Discovery message ink (alpha set per frame)
    pub const FLASH_INK: Color = Color::rgb(70, 55, 35);
    /// HUD text
    pub const HUD_TEXT: Color = Color::rgba(255, 255, 255, 140);
    /// Background stars
    pub const STAR: Color = Color::rgba(255, 255, 255, 90);
    /// Vignette edge
    pub const VIGNETTE_EDGE: Color = Color::rgba(0, 0, 0, 128);
    pub const VIGNETTE_CENTER: Color = Color::rgba(0, 0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_byte_layout() {
        let verts = [Vertex::new(1.0, 2.0, [0.0; 4]), Vertex::new(3.0, 4.0, [1.0; 4])];
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::as_bytes(&verts).len(), 48);
    }
}
