//! Tests for charge components.

#[cfg(test)]
mod tests {
    use crate::charge::{BatonCharge, ChargeLevel, ChargeState};

    #[test]
    fn test_starts_full() {
        let charge = BatonCharge::full(100.0);

        assert!(charge.is_full());
        assert_eq!(charge.state(), ChargeState::Ready);
        assert_eq!(charge.level(), ChargeLevel::Full);
    }

    #[test]
    fn test_clamping_law() {
        let amounts = [
            -1.0e9,
            -150.0,
            -100.0,
            -0.5,
            0.0,
            0.5,
            42.0,
            100.0,
            1.0e9,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::MAX,
            f32::MIN,
        ];

        for start in [0.0, 37.5, 100.0] {
            for amount in amounts {
                let mut charge = BatonCharge::empty(100.0);
                charge.add_charge(start);
                charge.add_charge(amount);

                assert!(
                    (0.0..=100.0).contains(&charge.current()),
                    "start={} amount={} → current={}",
                    start,
                    amount,
                    charge.current()
                );
            }
        }
    }

    #[test]
    fn test_nan_keeps_charge() {
        let mut charge = BatonCharge::empty(100.0);
        charge.add_charge(30.0);
        charge.add_charge(f32::NAN);

        assert_eq!(charge.current(), 30.0);
    }

    #[test]
    fn test_partial_level_is_linear_remap() {
        let mut charge = BatonCharge::empty(200.0);

        assert_eq!(charge.add_charge(50.0), ChargeLevel::Partial(0.25));
        assert_eq!(charge.add_charge(50.0), ChargeLevel::Partial(0.5));
        assert_eq!(charge.state(), ChargeState::Charging);
    }

    #[test]
    fn test_reaching_max_reports_full() {
        let mut charge = BatonCharge::empty(100.0);
        charge.add_charge(99.0);

        assert_eq!(charge.add_charge(5.0), ChargeLevel::Full);
        assert_eq!(charge.current(), 100.0);
        assert_eq!(charge.state(), ChargeState::Ready);
    }

    #[test]
    fn test_discharge_resets_to_zero() {
        let mut charge = BatonCharge::full(100.0);

        assert_eq!(charge.discharge(), ChargeLevel::Partial(0.0));
        assert_eq!(charge.current(), 0.0);
        assert_eq!(charge.state(), ChargeState::Charging);
    }
}
