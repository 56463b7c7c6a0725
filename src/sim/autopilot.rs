//! Demo autopilot
//!
//! Plays the game for attract screens and headless runs by steering the
//! paddle under the ball through the regular intent channel.

use super::state::{GamePhase, GameState, PaddleIntent};

/// Pointer intent that keeps the paddle under the ball
///
/// Adds a slowly oscillating offset so the ball is struck off-center and
/// returns at varied angles instead of bouncing straight up forever.
pub fn autopilot_intent(state: &GameState) -> Option<PaddleIntent> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let time_factor = state.time_ticks as f32 * 0.01;
    let wobble = time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15;
    let offset = wobble * state.paddle.width / 2.0;

    Some(PaddleIntent::Pointer {
        x: state.ball.pos.x + offset,
    })
}
