//! Frame geometry for host renderers
//!
//! The simulation never draws. A host asks for the current frame as a
//! triangle list and uploads it however it likes; [`Vertex`] is `Pod`, so
//! `bytemuck::cast_slice` turns the list into bytes or flat floats.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{BrickGrid, GameState};

/// Segments used to approximate the ball
pub const BALL_SEGMENTS: u32 = 16;

/// Triangles for every visible entity: active bricks, paddle, then ball
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let active = state.bricks.active_count();
    let mut vertices = Vec::with_capacity((active + 1) * 6 + BALL_SEGMENTS as usize * 3);

    for brick in state.bricks.iter().filter(|b| b.active) {
        let rect = BrickGrid::rect(&state.tuning, brick.row, brick.column);
        vertices.extend(shapes::rect(&rect, colors::BRICK));
    }

    vertices.extend(shapes::rect(&state.paddle.rect(), colors::PADDLE));
    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices
}
