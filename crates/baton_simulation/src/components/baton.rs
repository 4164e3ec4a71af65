//! Baton entity компоненты

use bevy::prelude::*;

use crate::feedback::{AimIndicator, BatonEmission, ChargedAnimation};
use crate::shooting::ShotTrace;

/// Baton игрока
///
/// Required Components добавляют весь feedback state; BatonCharge и
/// PointerOrigin кладёт spawn_baton (зависят от config и сцены).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(BatonEmission, ChargedAnimation, AimIndicator, ShotTrace)]
pub struct Baton;

/// Transform, задающий aim ray (кончик baton)
///
/// Отдельная entity: presentation layer двигает её вслед за VR контроллером.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PointerOrigin(pub Entity);

