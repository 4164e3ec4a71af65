//! Charge компоненты и события

use bevy::prelude::*;

use crate::math::remap;

/// Заряд baton
///
/// Инвариант: 0.0 ≤ current ≤ max
/// Мутация только через add_charge / discharge (side effects считает caller
/// по возвращённому ChargeLevel).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BatonCharge {
    current: f32,
    max: f32,
}

/// Состояние baton с точки зрения ShotResolver
///
/// Firing не хранится: это transient состояние внутри одного кадра
/// (resolve_fire_inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeState {
    Charging,
    Ready,
}

/// Результат изменения заряда (для feedback side effects)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChargeLevel {
    /// Заряд ниже max, внутри — линейный remap [0, max] → [0, 1]
    Partial(f32),

    /// Заряд ровно max
    Full,
}

impl BatonCharge {
    /// Полностью заряженный baton (стартовое состояние)
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn empty(max: f32) -> Self {
        Self { current: 0.0, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn state(&self) -> ChargeState {
        if self.is_full() {
            ChargeState::Ready
        } else {
            ChargeState::Charging
        }
    }

    /// AddCharge: current = clamp(current + amount, 0, max)
    ///
    /// Любой amount допустим (отрицательный, огромный, бесконечный).
    /// NaN трактуется как 0 (заряд не меняется).
    pub fn add_charge(&mut self, amount: f32) -> ChargeLevel {
        let amount = if amount.is_nan() { 0.0 } else { amount };
        self.current = (self.current + amount).max(0.0).min(self.max);
        self.level()
    }

    /// Сброс в 0 после выстрела (те же side effects что add_charge)
    pub fn discharge(&mut self) -> ChargeLevel {
        self.current = 0.0;
        self.add_charge(0.0)
    }

    /// Текущий уровень без мутации
    pub fn level(&self) -> ChargeLevel {
        if self.is_full() {
            ChargeLevel::Full
        } else {
            ChargeLevel::Partial(remap(0.0, self.max, 0.0, 1.0, self.current))
        }
    }
}

/// Event: внешний collaborator даёт заряд (сбор орбов, таймер, урон по боссу)
///
/// amount может быть отрицательным (drain) — клампится в BatonCharge.
#[derive(Event, Debug, Clone)]
pub struct ChargeGained {
    pub baton: Entity,
    pub amount: f32,
}
