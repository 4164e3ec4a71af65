//! Ошибки setup'а baton (fatal configuration errors)
//!
//! Runtime ошибок нет: charge клампится, промах = endpoint на max дистанции.

use bevy::prelude::Entity;

#[derive(Debug, thiserror::Error)]
pub enum BatonSetupError {
    #[error("max_charge must be positive, got {0}")]
    InvalidMaxCharge(f32),

    #[error("pointer_line_length must be positive, got {0}")]
    InvalidLineLength(f32),

    #[error("trace_segments must be at least 1")]
    NoTraceSegments,

    #[error("trace_jitter must be non-negative, got {0}")]
    NegativeJitter(f32),

    #[error("vignette_max_intensity must be in (0, 1], got {0}")]
    InvalidVignetteCap(f32),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("pointer origin {0:?} has no Transform")]
    MissingPointerOrigin(Entity),

    #[error("shot target {0:?} has no BossHealth controller")]
    MissingDamageReceiver(Entity),

    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
