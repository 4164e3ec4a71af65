//! Shooting события
//!
//! - FireInput: presentation layer → ECS (keyboard / VR trigger, уже опрошен)
//! - ShotFired: ECS → presentation layer (trace, particles, звук)

use bevy::prelude::*;

/// Откуда пришёл fire input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum FireSource {
    Keyboard,
    VrTrigger,
}

/// Event: игрок нажал fire
///
/// Ниже полного заряда игнорируется.
#[derive(Event, Debug, Clone)]
pub struct FireInput {
    pub baton: Entity,
    pub source: FireSource,
}

/// Итог одного выстрела (создаётся и потребляется в одном кадре)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotResult {
    /// Точка попадания в ShotTarget (None = промах или стена)
    pub hit_point: Option<Vec3>,
    /// Controller босса, получивший урон
    pub target: Option<Entity>,
    /// Куда рисуется trace: hit_point или конец луча
    pub endpoint: Vec3,
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        self.target.is_some()
    }
}

/// Event: baton выстрелил
#[derive(Event, Debug, Clone)]
pub struct ShotFired {
    pub baton: Entity,
    pub source: FireSource,
    pub origin: Vec3,
    pub result: ShotResult,
    /// Сбросился ли заряд (false = practice shot до старта игры)
    pub discharged: bool,
}
