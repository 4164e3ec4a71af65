//! Shot trace — короткая ломаная линия выстрела
//!
//! State machine вместо coroutine: start() → visible, tick() отсчитывает
//! duration, затем hide(). Новый выстрел заменяет текущий trace целиком.

use bevy::prelude::*;
use rand::Rng;

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ShotTrace {
    /// Точки ломаной: origin → endpoint (segments + 1 точек)
    pub points: Vec<Vec3>,
    /// Сколько ещё секунд trace виден
    pub remaining: f32,
    pub visible: bool,
}

impl ShotTrace {
    pub fn start(&mut self, points: Vec<Vec3>, duration: f32) {
        self.points = points;
        self.remaining = duration;
        self.visible = true;
    }

    pub fn tick(&mut self, delta: f32) {
        if !self.visible {
            return;
        }

        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.hide();
        }
    }

    pub fn hide(&mut self) {
        self.points.clear();
        self.remaining = 0.0;
        self.visible = false;
    }

    pub fn endpoint(&self) -> Option<Vec3> {
        self.points.last().copied()
    }
}

/// Точки trace от origin до endpoint с jitter
///
/// Первая точка (origin) и последняя (endpoint) без смещения, промежуточные
/// сдвигаются на случайный offset в кубе [-jitter, jitter]³.
pub fn build_trace_points<R: Rng + ?Sized>(
    origin: Vec3,
    endpoint: Vec3,
    segments: usize,
    jitter: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let mut point = origin.lerp(endpoint, t);

        if i > 0 && i < segments && jitter > 0.0 && jitter.is_finite() {
            point += Vec3::new(
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
            );
        }

        points.push(point);
    }

    points
}
