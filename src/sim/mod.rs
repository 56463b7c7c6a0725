//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick`
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod flow;
pub mod progression;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_intent;
pub use collision::{Rect, circle_hits_bounds, circle_hits_rect, circle_reaches_top};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle, PaddleIntent};
pub use tick::tick;
