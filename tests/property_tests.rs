//! Property tests for the comfort pipeline
//!
//! The pipeline's contract is universal ("for all inputs..."), which makes
//! it a natural fit for property testing: any six values, including NaN,
//! infinities, and extreme magnitudes, must produce finite, bounded,
//! reproducible outputs.

use proptest::prelude::*;

use comfort_core::{assess_values, predicted_percentage_dissatisfied, Inputs};

/// Any f32 a caller could plausibly hand us, including pathological ones.
fn any_input() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -1.0e6f32..1.0e6f32,
        1 => -60.0f32..60.0f32,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
        1 => Just(f32::MAX),
        1 => Just(f32::MIN),
        1 => Just(0.0f32),
    ]
}

proptest! {
    #[test]
    fn outputs_finite_and_bounded(
        ta in any_input(),
        tr in any_input(),
        vel in any_input(),
        rh in any_input(),
        met in any_input(),
        clo in any_input(),
    ) {
        let result = assess_values(ta, tr, vel, rh, met, clo);

        prop_assert!(result.pmv.is_finite());
        prop_assert!((-3.0..=3.0).contains(&result.pmv));
        prop_assert!(result.ppd.is_finite());
        prop_assert!((0.0..=100.0).contains(&result.ppd));
    }

    #[test]
    fn outputs_deterministic(
        ta in any_input(),
        tr in any_input(),
        vel in any_input(),
        rh in any_input(),
        met in any_input(),
        clo in any_input(),
    ) {
        let first = assess_values(ta, tr, vel, rh, met, clo);
        let second = assess_values(ta, tr, vel, rh, met, clo);

        prop_assert_eq!(first.pmv.to_bits(), second.pmv.to_bits());
        prop_assert_eq!(first.ppd.to_bits(), second.ppd.to_bits());
    }

    #[test]
    fn normalization_lands_in_domain(
        ta in any_input(),
        tr in any_input(),
        vel in any_input(),
        rh in any_input(),
        met in any_input(),
        clo in any_input(),
    ) {
        let inputs = Inputs::new(ta, tr, vel, rh, met, clo);

        prop_assert!(inputs.air_temp.is_finite());
        prop_assert!(inputs.radiant_temp.is_finite());
        prop_assert!(inputs.air_velocity >= 0.05);
        prop_assert!((0.0..=100.0).contains(&inputs.humidity));
        prop_assert!(inputs.metabolic_rate >= 0.8);
        prop_assert!(inputs.clothing >= 0.0);
    }

    #[test]
    fn sub_floor_velocities_are_equivalent(vel in 0.0f32..0.05f32) {
        let below = assess_values(24.0, 24.0, vel, 50.0, 1.2, 0.5);
        let floor = assess_values(24.0, 24.0, 0.05, 50.0, 1.2, 0.5);
        prop_assert_eq!(below, floor);
    }

    #[test]
    fn ppd_symmetric_and_bounded(pmv in -3.0f32..=3.0f32) {
        let ppd = predicted_percentage_dissatisfied(pmv);

        prop_assert!((0.0..=100.0).contains(&ppd));
        prop_assert!(ppd >= 5.0);
        prop_assert_eq!(ppd, predicted_percentage_dissatisfied(-pmv));
    }
}
