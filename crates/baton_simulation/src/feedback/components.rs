//! Visual feedback компоненты baton
//!
//! ECS только считает значения, presentation layer копирует их в материал
//! (emission) и line renderer (aim indicator).

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::charge::ChargeLevel;
use crate::math::unit_sine;

/// Emission цвет материала baton
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BatonEmission {
    /// Базовая интенсивность [0, 1] до boost'а
    pub intensity: f32,
    /// Итоговый цвет: (v, v, v, 1) * (v + 1)
    pub color: LinearRgba,
}

impl Default for BatonEmission {
    fn default() -> Self {
        Self::from_intensity(0.0)
    }
}

impl BatonEmission {
    pub fn from_intensity(intensity: f32) -> Self {
        Self {
            intensity,
            color: emission_color(intensity),
        }
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        *self = Self::from_intensity(intensity);
    }
}

/// Emission цвет с boost'ом (v + 1)
///
/// Boost подобран на глаз (glow заметнее в шлеме). Масштабируются все
/// четыре канала, включая alpha.
pub fn emission_color(intensity: f32) -> LinearRgba {
    LinearRgba::new(intensity, intensity, intensity, 1.0) * (intensity + 1.0)
}

/// Фаза пульсации glow, пока baton полностью заряжен
///
/// Фаза держится в [0, 2π): значение идёт только в sin.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ChargedAnimation {
    pub phase: f32,
    /// Baton выстрелил в этом кадре: пульсация пропускает один tick
    pub skip_next_tick: bool,
}

impl ChargedAnimation {
    /// Продвигает фазу и возвращает интенсивность glow в [0, 1]
    pub fn tick(&mut self, delta: f32, speed: f32) -> f32 {
        self.phase = (self.phase + delta * speed).rem_euclid(TAU);
        unit_sine(self.phase)
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Пометить кадр выстрела (glow в этом кадре не двигается)
    pub fn hold_for_shot(&mut self) {
        self.skip_next_tick = true;
    }

    /// true, если tick этого кадра надо пропустить (флаг сбрасывается)
    pub fn take_skip(&mut self) -> bool {
        std::mem::take(&mut self.skip_next_tick)
    }
}

/// Aim line от pointer origin вдоль forward
///
/// Включается при полном заряде, выключается выстрелом.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimIndicator {
    pub enabled: bool,
    pub start: Vec3,
    pub end: Vec3,
}

impl Default for AimIndicator {
    fn default() -> Self {
        Self {
            enabled: true,
            start: Vec3::ZERO,
            end: Vec3::ZERO,
        }
    }
}

/// Side effects изменения заряда (AddCharge)
///
/// - Partial → emission из линейного remap заряда
/// - Full → фаза анимации в 0, aim indicator включён (emission не трогаем,
///   её ведёт пульсация)
pub fn apply_charge_feedback(
    level: ChargeLevel,
    emission: &mut BatonEmission,
    animation: &mut ChargedAnimation,
    indicator: &mut AimIndicator,
) {
    match level {
        ChargeLevel::Partial(remapped) => emission.set_intensity(remapped),
        ChargeLevel::Full => {
            animation.reset();
            indicator.enabled = true;
        }
    }
}
