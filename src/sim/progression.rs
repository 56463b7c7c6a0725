//! Difficulty progression
//!
//! Pure functions mapping the level number to brick rows, paddle width and
//! ball speed. Progression is unbounded: rows and speed keep growing, only
//! the paddle width bottoms out at its floor.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use crate::tuning::Tuning;

/// Shallowest launch angle from horizontal (45°)
pub const LAUNCH_ANGLE_MIN: f32 = FRAC_PI_4;
/// Steepest launch angle from horizontal, leaning left (135°)
pub const LAUNCH_ANGLE_MAX: f32 = 3.0 * FRAC_PI_4;

/// Ball speed (pixels per tick) for a level
pub fn ball_speed(tuning: &Tuning, level: u32) -> f32 {
    tuning.ball_base_speed + level as f32 * tuning.ball_speed_per_level
}

/// Brick rows for a level: base rows plus one per level-up
pub fn rows_for_level(tuning: &Tuning, level: u32) -> u32 {
    tuning.brick_base_rows + level.saturating_sub(1)
}

/// Paddle width after one more level-up
pub fn shrink_paddle(tuning: &Tuning, width: f32) -> f32 {
    if width > tuning.paddle_min_width {
        (width - tuning.paddle_shrink_step).max(tuning.paddle_min_width)
    } else {
        width
    }
}

/// Paddle width for a level reached from a new game
pub fn paddle_width_for_level(tuning: &Tuning, level: u32) -> f32 {
    let shrink = level.saturating_sub(1) as f32 * tuning.paddle_shrink_step;
    (tuning.paddle_base_width - shrink).max(tuning.paddle_min_width)
}

/// Velocity for a launch at `angle` radians from horizontal (y grows down)
pub fn launch_velocity(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), -speed * angle.sin())
}
