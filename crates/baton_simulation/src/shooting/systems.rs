//! Shooting systems: resolve fire input → ray cast → damage → reset → trace

use bevy::prelude::*;

use crate::charge::BatonCharge;
use crate::components::{Baton, PointerOrigin};
use crate::config::{BatonConfig, ShotResetPolicy};
use crate::damage::ApplyDamage;
use crate::feedback::{apply_charge_feedback, AimIndicator, BatonEmission, ChargedAnimation};
use crate::session::GameSession;
use crate::shooting::{build_trace_points, AimRay, AimRaycaster, FireInput, ShotFired, ShotResult, ShotTrace};
use crate::DeterministicRng;

/// Сбрасывает ли выстрел заряд при текущем состоянии сессии
pub fn shot_discharges(policy: ShotResetPolicy, session: &GameSession) -> bool {
    match policy {
        ShotResetPolicy::Always => true,
        ShotResetPolicy::AfterGameStart => session.active,
    }
}

/// System: обработка FireInput
///
/// Ready → Firing → Charging в пределах одного кадра:
/// 1. Ниже полного заряда → input игнорируется
/// 2. Ray cast от pointer origin вдоль forward (pointer_line_length)
/// 3. Ближайший hit с ShotTarget → ApplyDamage(shot_damage) в controller
/// 4. Заряд в 0 (если policy разрешает), aim indicator выключен
/// 5. Trace от origin до endpoint
#[allow(clippy::too_many_arguments)]
pub fn resolve_fire_inputs(
    mut fire_events: EventReader<FireInput>,
    mut batons: Query<
        (
            &PointerOrigin,
            &mut BatonCharge,
            &mut BatonEmission,
            &mut ChargedAnimation,
            &mut AimIndicator,
            &mut ShotTrace,
        ),
        With<Baton>,
    >,
    pointers: Query<&Transform>,
    raycaster: AimRaycaster,
    config: Res<BatonConfig>,
    session: Res<GameSession>,
    mut rng: ResMut<DeterministicRng>,
    mut damage_events: EventWriter<ApplyDamage>,
    mut shot_events: EventWriter<ShotFired>,
) {
    for input in fire_events.read() {
        let Ok((pointer, mut charge, mut emission, mut animation, mut indicator, mut trace)) =
            batons.get_mut(input.baton)
        else {
            crate::logger::log_warning(&format!(
                "FireInput for unknown baton {:?}",
                input.baton
            ));
            continue;
        };

        if !charge.is_full() {
            crate::logger::log(&format!(
                "Fire ignored: baton {:?} at {:.1}/{:.1}",
                input.baton,
                charge.current(),
                charge.max()
            ));
            continue;
        }

        let Ok(pointer_transform) = pointers.get(pointer.0) else {
            crate::logger::log_warning(&format!(
                "Pointer origin {:?} of baton {:?} has no Transform",
                pointer.0, input.baton
            ));
            continue;
        };

        let ray = AimRay::from_transform(pointer_transform);
        let range = config.pointer_line_length;

        let result = match raycaster.cast(&ray, range) {
            Some(hit) if hit.target.is_some() => ShotResult {
                hit_point: Some(hit.point),
                target: hit.target,
                endpoint: hit.point,
            },
            _ => ShotResult {
                hit_point: None,
                target: None,
                endpoint: ray.point_at(range),
            },
        };

        if let Some(target) = result.target {
            damage_events.write(ApplyDamage {
                target,
                amount: config.shot_damage,
            });
            crate::logger::log_info(&format!(
                "🎯 Baton {:?} hit {:?} at {:?} for {}",
                input.baton, target, result.endpoint, config.shot_damage
            ));
        } else {
            crate::logger::log(&format!(
                "Baton {:?} missed, trace ends at {:?}",
                input.baton, result.endpoint
            ));
        }

        animation.hold_for_shot();

        let discharged = shot_discharges(config.reset_policy, &session);
        if discharged {
            indicator.enabled = false;
            animation.reset();
            let level = charge.discharge();
            apply_charge_feedback(level, &mut emission, &mut animation, &mut indicator);
        } else {
            crate::logger::log("Practice shot: game not active, charge kept");
        }

        let points = build_trace_points(
            ray.origin,
            result.endpoint,
            config.trace_segments,
            config.trace_jitter,
            &mut rng.rng,
        );
        trace.start(points, config.trace_duration);

        shot_events.write(ShotFired {
            baton: input.baton,
            source: input.source,
            origin: ray.origin,
            result,
            discharged,
        });
    }
}

/// System: отсчёт видимости shot trace
pub fn tick_shot_traces(mut traces: Query<&mut ShotTrace>, time: Res<Time>) {
    let delta = time.delta_secs();

    for mut trace in traces.iter_mut() {
        trace.tick(delta);
    }
}
