//! Baton Simulation Core
//!
//! ECS-симуляция baton игрока на Bevy 0.16 (boss-fight minigame)
//!
//! Presentation layer (движок, VR runtime) владеет рендером и опросом
//! input'а; ECS владеет заряд/выстрел/feedback состоянием:
//! - ChargeState: BatonCharge + AddCharge (charge)
//! - VisualFeedback: emission glow + aim line (feedback)
//! - ShotResolver: ray cast, урон, shot trace (shooting, damage)
//! - DamageReactionAnimator: vignette pulse (vignette)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod charge;
pub mod components;
pub mod config;
pub mod damage;
pub mod error;
pub mod feedback;
pub mod logger;
pub mod math;
pub mod session;
pub mod shooting;
pub mod spawn;
pub mod vignette;

// Re-export базовых типов для удобства
pub use charge::{BatonCharge, ChargeGained, ChargeLevel, ChargeState};
pub use components::*;
pub use config::{BatonConfig, ShotResetPolicy};
pub use damage::{ApplyDamage, BossDefeated};
pub use error::BatonSetupError;
pub use feedback::{AimIndicator, BatonEmission, ChargedAnimation};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use session::{GameSession, GameStarted};
pub use shooting::{AimRay, FireInput, FireSource, ShotFired, ShotResult, ShotTrace};
pub use spawn::*;
pub use vignette::{PlayerHit, VignettePulse, VignetteSettings};

/// Порядок систем внутри кадра
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BatonSet {
    /// Внешние события: старт игры, заряд
    Input,
    /// Trace tick + FireInput → выстрел
    Shooting,
    /// Glow, aim line, vignette
    Feedback,
    /// ApplyDamage → BossHealth
    Damage,
}

/// Главный plugin baton (WeaponChargeController)
///
/// Регистрирует системы в Update (один прогон на кадр, delta из Time).
///
/// Порядок выполнения:
/// 1. start_game_session, apply_charge_gained
/// 2. tick_shot_traces, resolve_fire_inputs
/// 3. animate_charged_glow, update_aim_indicator, vignette
/// 4. apply_boss_damage
pub struct BatonPlugin;

impl Plugin for BatonPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BatonConfig>()
            .init_resource::<GameSession>()
            .init_resource::<VignetteSettings>();

        // RNG из config seed, если snapshot-тест не подложил свой
        if !app.world().contains_resource::<DeterministicRng>() {
            let seed = app.world().resource::<BatonConfig>().rng_seed;
            app.insert_resource(DeterministicRng::new(seed));
        }

        app.register_type::<BatonCharge>()
            .register_type::<ChargedAnimation>()
            .register_type::<AimIndicator>()
            .register_type::<VignettePulse>()
            .register_type::<BossHealth>()
            .register_type::<BatonConfig>();

        // Регистрация событий
        app.add_event::<ChargeGained>()
            .add_event::<FireInput>()
            .add_event::<ShotFired>()
            .add_event::<ApplyDamage>()
            .add_event::<BossDefeated>()
            .add_event::<PlayerHit>()
            .add_event::<GameStarted>();

        app.configure_sets(
            Update,
            (
                BatonSet::Input,
                BatonSet::Shooting,
                BatonSet::Feedback,
                BatonSet::Damage,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (session::start_game_session, charge::apply_charge_gained)
                    .chain()
                    .in_set(BatonSet::Input),
                (shooting::tick_shot_traces, shooting::resolve_fire_inputs)
                    .chain()
                    .in_set(BatonSet::Shooting),
                (
                    feedback::animate_charged_glow,
                    feedback::update_aim_indicator,
                    vignette::trigger_vignette_pulse,
                    vignette::tick_vignette_pulses,
                )
                    .chain()
                    .in_set(BatonSet::Feedback),
                damage::apply_boss_damage.in_set(BatonSet::Damage),
            ),
        );
    }
}

/// Детерминистичный RNG resource (seeded), источник jitter для trace
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// BatonPlugin не добавляется: caller решает (тесты подменяют config до
/// плагина).
pub fn create_headless_app(config: BatonConfig) -> App {
    let mut app = App::new();
    init_logger();

    let seed = config.rng_seed;
    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .insert_resource(DeterministicRng::new(seed));

    app
}
