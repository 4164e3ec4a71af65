//! VisualFeedback — emission glow и aim line baton
//!
//! - BatonEmission: цвет emission (линейный remap заряда или пульсация)
//! - ChargedAnimation: фаза пульсации при полном заряде
//! - AimIndicator: линия прицела, пока baton готов

pub mod components;
pub mod systems;


pub use components::*;
pub use systems::*;
