//! Tests for shot trace.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::shooting::{build_trace_points, ShotTrace};

    #[test]
    fn test_trace_points_pin_origin_and_endpoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let origin = Vec3::new(0.0, 1.5, 0.0);
        let endpoint = Vec3::new(0.0, 1.5, -50.0);

        let points = build_trace_points(origin, endpoint, 8, 0.15, &mut rng);

        assert_eq!(points.len(), 9);
        assert_eq!(points[0], origin);
        assert_eq!(points[8], endpoint);
    }

    #[test]
    fn test_trace_jitter_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let origin = Vec3::ZERO;
        let endpoint = Vec3::new(0.0, 0.0, -10.0);
        let jitter = 0.2;

        let points = build_trace_points(origin, endpoint, 10, jitter, &mut rng);

        for (i, point) in points.iter().enumerate() {
            let straight = origin.lerp(endpoint, i as f32 / 10.0);
            let offset = (*point - straight).abs();
            assert!(
                offset.max_element() <= jitter + 1e-5,
                "point {} drifted {:?}",
                i,
                offset
            );
        }
    }

    #[test]
    fn test_trace_without_jitter_is_straight() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = build_trace_points(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), 4, 0.0, &mut rng);

        assert_eq!(
            points,
            vec![
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_trace_same_seed_same_points() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);

        let a = build_trace_points(Vec3::ZERO, Vec3::NEG_Z * 50.0, 8, 0.15, &mut rng_a);
        let b = build_trace_points(Vec3::ZERO, Vec3::NEG_Z * 50.0, 8, 0.15, &mut rng_b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_trace_hides_after_duration() {
        let mut trace = ShotTrace::default();
        trace.start(vec![Vec3::ZERO, Vec3::X], 0.25);

        trace.tick(0.1);
        assert!(trace.visible);
        assert_eq!(trace.endpoint(), Some(Vec3::X));

        trace.tick(0.1);
        assert!(trace.visible);

        trace.tick(0.1);
        assert!(!trace.visible);
        assert!(trace.points.is_empty());
        assert_eq!(trace.remaining, 0.0);
    }

    #[test]
    fn test_trace_restart_replaces_previous() {
        let mut trace = ShotTrace::default();
        trace.start(vec![Vec3::ZERO, Vec3::X], 0.25);
        trace.tick(0.2);

        trace.start(vec![Vec3::ZERO, Vec3::Y], 0.25);

        assert_eq!(trace.remaining, 0.25);
        assert_eq!(trace.endpoint(), Some(Vec3::Y));
    }
}
