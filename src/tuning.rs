//! Game tuning and layout
//!
//! Every constant the simulation reads lives here so a host can rebalance
//! the game from a JSON file without recompiling. Missing fields fall back
//! to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Layout and physics parameters for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Paddle ===
    pub paddle_base_width: f32,
    /// Width the paddle never shrinks below
    pub paddle_min_width: f32,
    /// Width lost on every level-up
    pub paddle_shrink_step: f32,
    pub paddle_height: f32,
    pub paddle_bottom_margin: f32,
    /// Keyboard movement per tick
    pub paddle_speed: f32,
    pub paddle_english: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_per_level: f32,
    pub ball_launch_offset: f32,

    // === Bricks ===
    pub brick_base_rows: u32,
    pub brick_columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_base_width: PADDLE_BASE_WIDTH,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_shrink_step: PADDLE_SHRINK_STEP,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_speed: PADDLE_SPEED,
            paddle_english: PADDLE_ENGLISH,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_speed_per_level: BALL_SPEED_PER_LEVEL,
            ball_launch_offset: BALL_LAUNCH_OFFSET,

            brick_base_rows: BRICK_BASE_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject parameter sets the simulation cannot keep its invariants with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_base_width", self.paddle_base_width),
            ("paddle_min_width", self.paddle_min_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("paddle_shrink_step", self.paddle_shrink_step),
            ("paddle_bottom_margin", self.paddle_bottom_margin),
            ("paddle_english", self.paddle_english),
            ("ball_speed_per_level", self.ball_speed_per_level),
            ("ball_launch_offset", self.ball_launch_offset),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        // A fresh ball starts clear of both the paddle and the ceiling
        let (min, max) = self.launch_offset_range();
        if self.ball_launch_offset <= min || self.ball_launch_offset >= max {
            return Err(TuningError::LaunchOutOfPlay {
                offset: self.ball_launch_offset,
                min,
                max,
            });
        }

        if self.paddle_min_width > self.paddle_base_width {
            return Err(TuningError::PaddleFloorAboveBase {
                min: self.paddle_min_width,
                base: self.paddle_base_width,
            });
        }
        if self.paddle_base_width > self.playfield_width {
            return Err(TuningError::PaddleWiderThanPlayfield {
                paddle: self.paddle_base_width,
                playfield: self.playfield_width,
            });
        }
        if self.brick_base_rows == 0 || self.brick_columns == 0 {
            return Err(TuningError::EmptyBrickGrid {
                rows: self.brick_base_rows,
                columns: self.brick_columns,
            });
        }
        let grid = self.brick_grid_width();
        if grid > self.playfield_width {
            return Err(TuningError::BrickGridTooWide {
                grid,
                playfield: self.playfield_width,
            });
        }

        Ok(())
    }

    /// Total width of one brick row including inner padding
    pub fn brick_grid_width(&self) -> f32 {
        let columns = self.brick_columns as f32;
        columns * (self.brick_width + self.brick_padding) - self.brick_padding
    }

    /// Left offset that centres the brick grid horizontally
    pub fn brick_offset_left(&self) -> f32 {
        (self.playfield_width - self.brick_grid_width()) / 2.0
    }

    /// Open interval of launch offsets that start the ball between paddle and ceiling
    pub fn launch_offset_range(&self) -> (f32, f32) {
        let min = self.playfield_height - self.paddle_y() + self.ball_radius;
        let max = self.playfield_height - self.ball_radius;
        (min, max)
    }

    /// Fixed y of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.playfield_height - self.paddle_height - self.paddle_bottom_margin
    }
}
