//! BatonConfig — tuning параметры baton (resource)
//!
//! Defaults = значения из boss-fight сцены. TOML override:
//! отсутствующие ключи берутся из Default.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::BatonSetupError;

/// Когда выстрел сбрасывает charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
#[serde(rename_all = "snake_case")]
pub enum ShotResetPolicy {
    /// Каждый выстрел разряжает baton
    Always,

    /// До GameStarted стрельба бесплатная (practice shots)
    #[default]
    AfterGameStart,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct BatonConfig {
    /// Максимальный charge (baton стартует заряженным)
    pub max_charge: f32,

    /// Скорость фазы пульсации glow при полном заряде (rad/sec)
    pub charged_animation_speed: f32,

    /// Длина aim line и дальность выстрела (m)
    pub pointer_line_length: f32,

    /// Фиксированный урон одного выстрела
    pub shot_damage: f32,

    /// Сколько trace висит на экране (sec)
    pub trace_duration: f32,

    /// Количество сегментов trace (points = segments + 1)
    pub trace_segments: usize,

    /// Максимальное смещение точки trace по каждой оси (m)
    pub trace_jitter: f32,

    /// Скорость фазы vignette pulse (rad/sec)
    pub vignette_speed: f32,

    /// Потолок интенсивности vignette
    pub vignette_max_intensity: f32,

    pub reset_policy: ShotResetPolicy,

    /// Seed для DeterministicRng (jitter)
    pub rng_seed: u64,
}

impl Default for BatonConfig {
    fn default() -> Self {
        Self {
            max_charge: 100.0,
            charged_animation_speed: 5.0,
            pointer_line_length: 50.0,
            shot_damage: 50.0,
            trace_duration: 0.25,
            trace_segments: 8,
            trace_jitter: 0.15,
            vignette_speed: 4.0,
            vignette_max_intensity: 0.5,
            reset_policy: ShotResetPolicy::AfterGameStart,
            rng_seed: 42,
        }
    }
}

impl BatonConfig {
    /// Парсит TOML и валидирует результат
    pub fn from_toml_str(source: &str) -> Result<Self, BatonSetupError> {
        let config: BatonConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Читает TOML файл (headless runner, внешние сцены)
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, BatonSetupError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Проверка на fatal ошибки конфигурации (вызывается при spawn)
    pub fn validate(&self) -> Result<(), BatonSetupError> {
        // `!(x > 0.0)` ловит и NaN
        if !(self.max_charge > 0.0) || !self.max_charge.is_finite() {
            return Err(BatonSetupError::InvalidMaxCharge(self.max_charge));
        }
        if !(self.pointer_line_length > 0.0) || !self.pointer_line_length.is_finite() {
            return Err(BatonSetupError::InvalidLineLength(self.pointer_line_length));
        }
        if self.trace_segments == 0 {
            return Err(BatonSetupError::NoTraceSegments);
        }
        if !(self.trace_jitter >= 0.0) || !self.trace_jitter.is_finite() {
            return Err(BatonSetupError::NegativeJitter(self.trace_jitter));
        }
        if !(self.vignette_max_intensity > 0.0 && self.vignette_max_intensity <= 1.0) {
            return Err(BatonSetupError::InvalidVignetteCap(self.vignette_max_intensity));
        }

        for (field, value) in [
            ("charged_animation_speed", self.charged_animation_speed),
            ("shot_damage", self.shot_damage),
            ("trace_duration", self.trace_duration),
            ("vignette_speed", self.vignette_speed),
        ] {
            if !(value > 0.0) {
                return Err(BatonSetupError::NonPositive { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BatonConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_partial_override() {
        let config = BatonConfig::from_toml_str(
            r#"
            shot_damage = 25.0
            reset_policy = "always"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.shot_damage, 25.0);
        assert_eq!(config.reset_policy, ShotResetPolicy::Always);
        // Остальное из Default
        assert_eq!(config.max_charge, 100.0);
        assert_eq!(config.trace_segments, 8);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let result = BatonConfig::from_toml_str("max_charge = 0.0");
        assert!(matches!(result, Err(BatonSetupError::InvalidMaxCharge(_))));

        let result = BatonConfig::from_toml_str("trace_segments = 0");
        assert!(matches!(result, Err(BatonSetupError::NoTraceSegments)));

        let result = BatonConfig::from_toml_str("vignette_max_intensity = 1.5");
        assert!(matches!(result, Err(BatonSetupError::InvalidVignetteCap(_))));
    }

    #[test]
    fn test_toml_parse_error() {
        let result = BatonConfig::from_toml_str("max_charge = \"lots\"");
        assert!(matches!(result, Err(BatonSetupError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = BatonConfig::from_toml_file("/nonexistent/baton/config.toml");
        assert!(matches!(result, Err(BatonSetupError::Io(_))));
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("baton_config_{}.toml", std::process::id()));
        std::fs::write(&path, "shot_damage = 75.0\ntrace_segments = 4\n").expect("write temp config");

        let config = BatonConfig::from_toml_file(&path);
        let _ = std::fs::remove_file(&path);

        let config = config.expect("valid config file");
        assert_eq!(config.shot_damage, 75.0);
        assert_eq!(config.trace_segments, 4);
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let config = BatonConfig {
            vignette_speed: 0.0,
            ..default()
        };

        assert!(matches!(
            config.validate(),
            Err(BatonSetupError::NonPositive { field: "vignette_speed", .. })
        ));
    }
}
