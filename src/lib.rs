//! Breaker Nano - A single-screen breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, entity state, game flow)
//! - `session`: Inbound actions and phase-transition listeners for UI layers
//! - `tuning`: Data-driven layout and physics constants
//! - `renderer`: CPU-side frame geometry for host renderers
//! - `platform`: Browser binding (wasm32 only)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use session::Session;
pub use sim::{GameEvent, GamePhase, GameState, PaddleIntent, tick};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Distances are in playfield pixels, speeds in pixels per tick.
pub mod consts {
    /// Fixed timestep hosts drive the simulation at (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Contact events kept between drains; phase changes are never dropped
    pub const MAX_QUEUED_EVENTS: usize = 256;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Paddle defaults
    pub const PADDLE_BASE_WIDTH: f32 = 80.0;
    pub const PADDLE_MIN_WIDTH: f32 = 40.0;
    pub const PADDLE_SHRINK_STEP: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Gap between the paddle's bottom edge and the playfield bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Horizontal velocity added per unit of normalized strike offset
    pub const PADDLE_ENGLISH: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 3.0;
    pub const BALL_SPEED_PER_LEVEL: f32 = 0.5;
    /// Ball spawns this far above the playfield bottom
    pub const BALL_LAUNCH_OFFSET: f32 = 50.0;

    /// Brick layout
    pub const BRICK_BASE_ROWS: u32 = 3;
    pub const BRICK_COLUMNS: u32 = 6;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 8.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
}
