//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1
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

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.1, 0.1, 0.1, 1.0];
    pub const PLAYER: Color = [0.0, 0.2, 0.7, 1.0];
    pub const OBSTACLE: Color = [0.7, 0.2, 0.0, 1.0];
    pub const BACKGROUND_OBSTACLE: Color = [0.13, 0.13, 0.13, 1.0];
    pub const GROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}
