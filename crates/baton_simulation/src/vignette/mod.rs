//! DamageReactionAnimator — vignette pulse при уроне по игроку
//!
//! PlayerHit (от внешнего damage dealer'а) перезапускает VignettePulse;
//! tick ведёт интенсивность по половине синусоиды и публикует её в
//! VignetteSettings (post-processing volume).

use bevy::prelude::*;

use crate::components::Player;
use crate::config::BatonConfig;

/// Event: игрока ударили
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerHit {
    pub player: Entity,
}

/// Post-processing vignette, который читает presentation layer
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct VignetteSettings {
    pub intensity: f32,
}

/// Half-sine pulse
///
/// Инвариант: 0.0 ≤ intensity ≤ cap; после завершения intensity == 0.0.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct VignettePulse {
    pub phase: f32,
    pub intensity: f32,
    pub active: bool,
}

impl VignettePulse {
    /// Отменяет текущий pulse и начинает заново
    pub fn restart(&mut self) {
        *self = Self {
            active: true,
            ..default()
        };
    }

    /// Продвигает фазу, возвращает текущую интенсивность
    pub fn tick(&mut self, delta: f32, speed: f32, cap: f32) -> f32 {
        if !self.active {
            return 0.0;
        }

        self.phase += delta * speed;
        let sine = self.phase.sin();

        if sine < 0.0 {
            *self = Self::default();
        } else {
            self.intensity = sine.max(0.0).min(cap);
        }

        self.intensity
    }
}

/// System: PlayerHit → restart pulse
pub fn trigger_vignette_pulse(
    mut hit_events: EventReader<PlayerHit>,
    mut players: Query<&mut VignettePulse, With<Player>>,
) {
    for hit in hit_events.read() {
        let Ok(mut pulse) = players.get_mut(hit.player) else {
            continue;
        };

        if pulse.active {
            crate::logger::log("Vignette pulse restarted mid-animation");
        }
        pulse.restart();
    }
}

/// System: tick всех pulse + публикация в VignetteSettings
///
/// Один post-processing volume на сцену: берём максимум по игрокам.
pub fn tick_vignette_pulses(
    mut players: Query<&mut VignettePulse, With<Player>>,
    mut settings: ResMut<VignetteSettings>,
    config: Res<BatonConfig>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    let intensity = players
        .iter_mut()
        .map(|mut pulse| pulse.tick(delta, config.vignette_speed, config.vignette_max_intensity))
        .fold(0.0, f32::max);

    if settings.intensity != intensity {
        settings.intensity = intensity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: f32 = 0.5;

    #[test]
    fn test_inactive_pulse_is_zero() {
        let mut pulse = VignettePulse::default();
        assert_eq!(pulse.tick(0.1, 4.0, CAP), 0.0);
        assert!(!pulse.active);
    }

    #[test]
    fn test_pulse_bounded_and_returns_to_zero() {
        let mut pulse = VignettePulse::default();
        pulse.restart();

        let mut frames = 0;
        while pulse.active {
            let intensity = pulse.tick(1.0 / 60.0, 4.0, CAP);
            assert!((0.0..=CAP).contains(&intensity), "intensity {}", intensity);
            frames += 1;
            assert!(frames < 1000, "pulse never finished");
        }

        assert_eq!(pulse.intensity, 0.0);
        assert_eq!(pulse.phase, 0.0);
        // sin < 0 после phase > π: π / 4 rad/sec ≈ 0.785 sec ≈ 48 кадров
        assert!(frames >= 45 && frames <= 50, "frames = {}", frames);
    }

    #[test]
    fn test_pulse_reaches_cap() {
        let mut pulse = VignettePulse::default();
        pulse.restart();

        let peak = (0..40)
            .map(|_| pulse.tick(1.0 / 60.0, 4.0, CAP))
            .fold(0.0, f32::max);

        assert_eq!(peak, CAP);
    }

    #[test]
    fn test_restart_cancels_previous_run() {
        let mut pulse = VignettePulse::default();
        pulse.restart();
        for _ in 0..20 {
            pulse.tick(1.0 / 60.0, 4.0, CAP);
        }
        assert!(pulse.intensity > 0.0);

        pulse.restart();

        assert_eq!(pulse.phase, 0.0);
        assert_eq!(pulse.intensity, 0.0);
        assert!(pulse.active);
    }
}
