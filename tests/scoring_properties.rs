//! Property-based tests for the scoring model
//!
//! These tests verify invariants that should hold for all valid inputs:
//! - Normalized weights always sum to one
//! - Sub-scores and the final score stay in the unit interval
//! - The final score lies between the smallest and largest sub-score
//! - The logistic timeline curve is monotonic and centered at r = 1
//! - Band assignment agrees with the threshold ladder

use proptest::prelude::*;
use qars::config::QarsConfig;
use qars::scoring::{fexpos, ftime, logistic, score, timeline_raw, RiskBand};

const EPSILON: f64 = 1e-12;

fn sensitivity_label() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Low"),
        Just("Moderate"),
        Just("High"),
        Just("Critical"),
        Just("Unknown"),
    ]
}

fn weights() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0f64..10.0, 0.0f64..10.0, 0.0f64..10.0)
        .prop_filter("sum must be positive", |(a, b, c)| a + b + c > 1e-6)
}

proptest! {
    #[test]
    fn prop_weights_sum_to_one((w_t, w_s, w_e) in weights()) {
        let config = QarsConfig::new(w_t, w_s, w_e, 8.0, false, None).unwrap();
        let (a, b, c) = config.weights();
        prop_assert!((a + b + c - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_timeline_raw_divides(x in 0.0f64..100.0, y in 0.0f64..20.0, z in 0.001f64..50.0) {
        prop_assert_eq!(timeline_raw(x, y, z), (x + y) / z);
    }

    #[test]
    fn prop_zero_horizon_is_infinite_with_any_need(x in 0.0f64..100.0, y in 0.0f64..20.0) {
        prop_assume!(x + y > 0.0);
        prop_assert_eq!(timeline_raw(x, y, 0.0), f64::INFINITY);
    }

    #[test]
    fn prop_logistic_center_is_half(alpha in 0.01f64..50.0) {
        prop_assert_eq!(logistic(1.0, alpha), 0.5);
    }

    #[test]
    fn prop_logistic_is_monotonic(alpha in 0.1f64..20.0, r in 0.0f64..5.0, delta in 0.0f64..2.0) {
        prop_assert!(logistic(r, alpha) <= logistic(r + delta, alpha));
    }

    #[test]
    fn prop_logistic_strictly_inside_unit_interval(alpha in 0.5f64..8.0, r in 0.0f64..4.0) {
        let t = logistic(r, alpha);
        prop_assert!(t > 0.0 && t < 1.0);
    }

    #[test]
    fn prop_linear_ftime_clips(r in -5.0f64..5.0) {
        let config = QarsConfig::default().with_timeline_linear(true);
        prop_assert_eq!(ftime(&config, r), r.max(0.0).min(1.0));
    }

    #[test]
    fn prop_exposure_respects_visibility(q in 0.0f64..1.0) {
        prop_assert_eq!(fexpos(false, q), 0.0);
        prop_assert_eq!(fexpos(true, q), q);
    }

    #[test]
    fn prop_score_is_bounded(
        (w_t, w_s, w_e) in weights(),
        alpha in 0.1f64..20.0,
        linear in any::<bool>(),
        x in 0.0f64..100.0,
        y in 0.0f64..20.0,
        z in 0.0f64..50.0,
        label in sensitivity_label(),
        v in any::<bool>(),
        q in 0.0f64..5.0,
    ) {
        let config = QarsConfig::new(w_t, w_s, w_e, alpha, linear, None).unwrap();
        let result = score(&config, x, y, z, label, v, q).unwrap();

        for sub in [result.t, result.s, result.e] {
            prop_assert!((0.0..=1.0).contains(&sub));
        }
        prop_assert!(result.score >= -EPSILON && result.score <= 1.0 + EPSILON);

        let lo = result.t.min(result.s).min(result.e);
        let hi = result.t.max(result.s).max(result.e);
        prop_assert!(result.score >= lo - EPSILON && result.score <= hi + EPSILON);
    }

    #[test]
    fn prop_band_matches_ladder(
        x in 0.0f64..40.0,
        z in 0.0f64..40.0,
        label in sensitivity_label(),
        v in any::<bool>(),
        q in 0.0f64..1.0,
    ) {
        let result = score(&QarsConfig::default(), x, 1.0, z, label, v, q).unwrap();
        let expected = if result.score > 0.85 {
            RiskBand::Critical
        } else if result.score > 0.60 {
            RiskBand::High
        } else if result.score >= 0.30 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        };
        prop_assert_eq!(result.band, expected);
    }

    #[test]
    fn prop_negative_inputs_are_rejected(value in -100.0f64..-0.001, slot in 0usize..4) {
        let mut inputs = [1.0, 1.0, 1.0, 0.5];
        inputs[slot] = value;
        let [x, y, z, q] = inputs;
        prop_assert!(score(&QarsConfig::default(), x, y, z, "Low", true, q).is_err());
    }
}
