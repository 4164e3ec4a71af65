//! Spawn helpers boss-fight сцены
//!
//! Все зависимости baton передаются явно (pointer origin entity, controller
//! босса), без обхода иерархии. Ошибки здесь fatal: вызывающий код прерывает
//! инициализацию сцены.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Collider;

use crate::charge::BatonCharge;
use crate::components::{Baton, BossHealth, Player, PointerOrigin, ShotTarget};
use crate::config::BatonConfig;
use crate::error::BatonSetupError;

/// Pointer origin (кончик baton), двигается presentation layer'ом
pub fn spawn_pointer(world: &mut World, transform: Transform) -> Entity {
    world.spawn(transform).id()
}

/// Spawn baton: полный заряд, aim indicator включён
///
/// Config берётся из BatonConfig resource (или Default) и валидируется.
pub fn spawn_baton(world: &mut World, pointer: Entity) -> Result<Entity, BatonSetupError> {
    let config = world.get_resource::<BatonConfig>().cloned().unwrap_or_default();

    if let Err(error) = config.validate() {
        crate::logger::log_error(&format!("Baton config rejected: {}", error));
        return Err(error);
    }

    if world.get::<Transform>(pointer).is_none() {
        crate::logger::log_error(&format!("Pointer origin {:?} has no Transform", pointer));
        return Err(BatonSetupError::MissingPointerOrigin(pointer));
    }

    let baton = world
        .spawn((Baton, BatonCharge::full(config.max_charge), PointerOrigin(pointer)))
        .id();

    crate::logger::log_info(&format!(
        "Baton {:?} spawned (charge {}/{}, pointer {:?})",
        baton, config.max_charge, config.max_charge, pointer
    ));

    Ok(baton)
}

/// Boss controller с одним сферическим hitbox'ом на нём же
pub fn spawn_boss(world: &mut World, position: Vec3, radius: f32, max_health: f32) -> Entity {
    let boss = world
        .spawn((
            Transform::from_translation(position),
            BossHealth::new(max_health),
            Collider::ball(radius),
        ))
        .id();

    world.entity_mut(boss).insert(ShotTarget { controller: boss });

    crate::logger::log_info(&format!(
        "Boss {:?} spawned at {:?} (HP {})",
        boss, position, max_health
    ));

    boss
}

/// Дополнительный hitbox, урон с которого идёт в controller
pub fn spawn_shot_target(
    world: &mut World,
    controller: Entity,
    transform: Transform,
    collider: Collider,
) -> Result<Entity, BatonSetupError> {
    if world.get::<BossHealth>(controller).is_none() {
        return Err(BatonSetupError::MissingDamageReceiver(controller));
    }

    Ok(world
        .spawn((transform, collider, ShotTarget { controller }))
        .id())
}

/// Препятствие без ShotTarget (блокирует луч, урона нет)
pub fn spawn_obstacle(world: &mut World, transform: Transform, collider: Collider) -> Entity {
    world.spawn((transform, collider)).id()
}

pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn(Player).id()
}
