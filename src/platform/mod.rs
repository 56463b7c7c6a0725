//! Platform abstraction layer
//!
//! The simulation is platform-free; this module holds the glue a host
//! needs to drive it:
//! - Fixed-step frame accumulator (all targets)
//! - Browser binding for keyboard, pointer, overlays (wasm32 only)

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame::FrameClock;
