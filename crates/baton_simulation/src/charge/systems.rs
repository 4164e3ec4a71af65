//! Charge systems

use bevy::prelude::*;

use crate::charge::{BatonCharge, ChargeGained, ChargeLevel};
use crate::feedback::{apply_charge_feedback, AimIndicator, BatonEmission, ChargedAnimation};

/// System: ChargeGained → AddCharge + feedback side effects
pub fn apply_charge_gained(
    mut events: EventReader<ChargeGained>,
    mut batons: Query<(
        &mut BatonCharge,
        &mut BatonEmission,
        &mut ChargedAnimation,
        &mut AimIndicator,
    )>,
) {
    for event in events.read() {
        let Ok((mut charge, mut emission, mut animation, mut indicator)) = batons.get_mut(event.baton)
        else {
            continue;
        };

        let was_full = charge.is_full();
        let level = charge.add_charge(event.amount);
        apply_charge_feedback(level, &mut emission, &mut animation, &mut indicator);

        if level == ChargeLevel::Full && !was_full {
            crate::logger::log_info(&format!("⚡ Baton {:?} fully charged", event.baton));
        }
    }
}
