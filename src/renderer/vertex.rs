//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
///
/// Positions are playfield pixels (origin top-left, y down); hosts map them
/// to clip space themselves.
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

    /// Floats per vertex when flattened into a plain buffer
    pub const FLOATS: usize = 6;
}

/// Colors for game elements
pub mod colors {
    /// #e17055
    pub const BRICK: [f32; 4] = [0.882, 0.439, 0.333, 1.0];
    /// #00b894
    pub const PADDLE: [f32; 4] = [0.0, 0.722, 0.580, 1.0];
    /// #6c5ce7
    pub const BALL: [f32; 4] = [0.424, 0.361, 0.906, 1.0];
}
