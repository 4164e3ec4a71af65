//! Shooting domain — ShotResolver baton
//!
//! Содержит:
//! - AimRay / AimRaycaster (ray cast по Collider shapes)
//! - FireInput / ShotFired (события)
//! - ShotTrace (transient линия выстрела с jitter)
//! - resolve_fire_inputs / tick_shot_traces (systems)

pub mod events;
pub mod raycast;
pub mod systems;
pub mod trace;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod trace_tests;

pub use events::*;
pub use raycast::*;
pub use systems::*;
pub use trace::*;
