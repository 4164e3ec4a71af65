//! Visual feedback systems

use bevy::prelude::*;

use crate::charge::BatonCharge;
use crate::components::{Baton, PointerOrigin};
use crate::config::BatonConfig;
use crate::feedback::{AimIndicator, BatonEmission, ChargedAnimation};
use crate::shooting::AimRay;

/// System: пульсация glow при полном заряде
///
/// Ниже полного заряда emission статична (её выставляет AddCharge).
pub fn animate_charged_glow(
    mut batons: Query<(&BatonCharge, &mut ChargedAnimation, &mut BatonEmission), With<Baton>>,
    config: Res<BatonConfig>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (charge, mut animation, mut emission) in batons.iter_mut() {
        // Кадр выстрела: как и при разряде, glow не двигается
        if animation.take_skip() || !charge.is_full() {
            continue;
        }

        let intensity = animation.tick(delta, config.charged_animation_speed);
        emission.set_intensity(intensity);
    }
}

/// System: aim line от pointer origin на pointer_line_length вперёд
pub fn update_aim_indicator(
    mut batons: Query<(&BatonCharge, &PointerOrigin, &mut AimIndicator), With<Baton>>,
    pointers: Query<&Transform>,
    config: Res<BatonConfig>,
) {
    for (charge, pointer, mut indicator) in batons.iter_mut() {
        if !charge.is_full() || !indicator.enabled {
            continue;
        }

        let Ok(transform) = pointers.get(pointer.0) else {
            continue;
        };

        let ray = AimRay::from_transform(transform);
        indicator.start = ray.origin;
        indicator.end = ray.point_at(config.pointer_line_length);
    }
}
