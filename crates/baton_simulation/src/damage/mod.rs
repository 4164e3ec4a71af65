//! Damage exchange с boss controller'ом
//!
//! Baton пишет ApplyDamage, система снимает BossHealth и сообщает о победе.

use bevy::prelude::*;

use crate::components::BossHealth;

/// Event: нанести урон controller'у босса (ApplyDamage(amount))
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ApplyDamage {
    pub target: Entity,
    pub amount: f32,
}

/// Event: здоровье босса дошло до 0
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossDefeated {
    pub boss: Entity,
}

/// System: ApplyDamage → BossHealth
///
/// Урон по уже побеждённому боссу игнорируется (BossDefeated ровно один раз).
pub fn apply_boss_damage(
    mut damage_events: EventReader<ApplyDamage>,
    mut bosses: Query<&mut BossHealth>,
    mut defeated_events: EventWriter<BossDefeated>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = bosses.get_mut(event.target) else {
            crate::logger::log_warning(&format!(
                "ApplyDamage: {:?} has no BossHealth",
                event.target
            ));
            continue;
        };

        if health.is_defeated() {
            continue;
        }

        let applied = health.take_damage(event.amount);
        crate::logger::log_info(&format!(
            "💥 Boss {:?} took {} damage (HP: {} / {})",
            event.target, applied, health.current, health.max
        ));

        if health.is_defeated() {
            defeated_events.write(BossDefeated { boss: event.target });
            crate::logger::log_info(&format!("Boss {:?} defeated", event.target));
        }
    }
}
