//! ChargeState — заряд baton
//!
//! BatonCharge хранит заряд, AddCharge клампит его в [0, max] и возвращает
//! ChargeLevel; feedback side effects применяет feedback::apply_charge_feedback.

pub mod components;
pub mod systems;

#[cfg(test)]
mod components_tests;

pub use components::*;
pub use systems::*;
