//! Boss компоненты: shot target tag + health pool game manager'а

use bevy::prelude::*;

/// Tag: collider, попадание в который засчитывается как выстрел по боссу
///
/// Урон уходит не в сам collider, а в `controller` (entity с BossHealth).
/// Несколько hitbox'ов могут указывать на один controller.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ShotTarget {
    pub controller: Entity,
}

/// Здоровье босса (game manager)
///
/// Инвариант: 0.0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BossHealth {
    pub current: f32,
    pub max: f32,
}

impl Default for BossHealth {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

impl BossHealth {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_defeated(&self) -> bool {
        self.current <= 0.0
    }

    /// Возвращает фактически снятое здоровье
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current - amount.max(0.0)).max(0.0);
        before - self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_saturates() {
        let mut health = BossHealth::new(80.0);

        assert_eq!(health.take_damage(50.0), 50.0);
        assert_eq!(health.take_damage(50.0), 30.0);
        assert_eq!(health.current, 0.0);
        assert!(health.is_defeated());
    }

    #[test]
    fn test_negative_damage_ignored() {
        let mut health = BossHealth::new(80.0);

        assert_eq!(health.take_damage(-10.0), 0.0);
        assert_eq!(health.current, 80.0);
    }
}
