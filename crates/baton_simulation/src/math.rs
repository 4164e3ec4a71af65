//! Числовые helpers для feedback анимаций

/// Линейный remap `value` из `[from_min, from_max]` в `[to_min, to_max]`
///
/// Без клампа: value за пределами диапазона экстраполируется.
/// Вырожденный исходный диапазон (from_min == from_max) → to_min.
pub fn remap(from_min: f32, from_max: f32, to_min: f32, to_max: f32, value: f32) -> f32 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }

    to_min + (value - from_min) / span * (to_max - to_min)
}

/// sin(phase) из [-1, 1] в [0, 1]
pub fn unit_sine(phase: f32) -> f32 {
    remap(-1.0, 1.0, 0.0, 1.0, phase.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_remap_charge_range() {
        assert_eq!(remap(0.0, 100.0, 0.0, 1.0, 0.0), 0.0);
        assert_eq!(remap(0.0, 100.0, 0.0, 1.0, 50.0), 0.5);
        assert_eq!(remap(0.0, 100.0, 0.0, 1.0, 100.0), 1.0);
    }

    #[test]
    fn test_remap_sine_range() {
        assert_eq!(remap(-1.0, 1.0, 0.0, 1.0, -1.0), 0.0);
        assert_eq!(remap(-1.0, 1.0, 0.0, 1.0, 0.0), 0.5);
        assert_eq!(remap(-1.0, 1.0, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_remap_degenerate_range() {
        assert_eq!(remap(3.0, 3.0, 0.25, 1.0, 7.0), 0.25);
    }

    #[test]
    fn test_unit_sine() {
        assert_eq!(unit_sine(0.0), 0.5);
        assert!((unit_sine(FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!(unit_sine(-FRAC_PI_2).abs() < 1e-6);
    }
}
