//! Configuration errors
//!
//! Gameplay itself never fails; only loading a [`Tuning`](crate::Tuning) can.

use thiserror::Error;

/// Reasons a tuning file is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tuning JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("ball launch offset {offset} must lie strictly between {min} and {max}")]
    LaunchOutOfPlay { offset: f32, min: f32, max: f32 },

    #[error("paddle floor width {min} exceeds base width {base}")]
    PaddleFloorAboveBase { min: f32, base: f32 },

    #[error("paddle base width {paddle} does not fit in playfield width {playfield}")]
    PaddleWiderThanPlayfield { paddle: f32, playfield: f32 },

    #[error("brick grid needs at least one row and one column ({rows}x{columns})")]
    EmptyBrickGrid { rows: u32, columns: u32 },

    #[error("brick grid width {grid} does not fit in playfield width {playfield}")]
    BrickGridTooWide { grid: f32, playfield: f32 },
}
