//! Aim ray + ray cast по collider'ам сцены
//!
//! RapierPhysicsPlugin не нужен: перебираем Collider shapes напрямую
//! (в boss-fight сцене единицы collider'ов).

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::Collider;

use crate::components::ShotTarget;

/// Точность аппроксимации round shapes при неоднородном scale
const SCALE_SUBDIVISIONS: u32 = 20;

/// Луч прицеливания (origin + forward pointer origin'а), живёт один кадр
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimRay {
    pub origin: Vec3,
    pub direction: Dir3,
}

impl AimRay {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            origin: transform.translation,
            direction: transform.forward(),
        }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction.as_vec3() * distance
    }
}

/// Ближайшее пересечение луча
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Collider, в который попали
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec3,
    /// Controller босса, если collider помечен ShotTarget
    pub target: Option<Entity>,
}

/// System param: ray cast против всех Collider + Transform в мире
#[derive(SystemParam)]
pub struct AimRaycaster<'w, 's> {
    colliders: Query<
        'w,
        's,
        (
            Entity,
            &'static Collider,
            &'static Transform,
            Option<&'static ShotTarget>,
        ),
    >,
}

impl AimRaycaster<'_, '_> {
    /// Ближайший hit в пределах max_distance (стены тоже блокируют луч)
    pub fn cast(&self, ray: &AimRay, max_distance: f32) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter_map(|(entity, collider, transform, target)| {
                // Shape хранится unscaled, scale берём из Transform
                let scaled;
                let collider = if transform.scale == Vec3::ONE {
                    collider
                } else {
                    let mut shape = collider.clone();
                    shape.set_scale(transform.scale, SCALE_SUBDIVISIONS);
                    scaled = shape;
                    &scaled
                };

                let distance = collider.cast_ray(
                    transform.translation,
                    transform.rotation,
                    ray.origin,
                    ray.direction.as_vec3(),
                    max_distance,
                    true,
                )?;

                Some(RayHit {
                    entity,
                    distance,
                    point: ray.point_at(distance),
                    target: target.map(|tag| tag.controller),
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
