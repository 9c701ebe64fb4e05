//! The QARS scoring engine.
//!
//! A score combines three sub-scores in [0, 1]:
//!
//! - **T** (timeline urgency): `ftime((X + Y) / Z)`, a logistic curve centered
//!   where confidentiality need plus migration time equals the CRQC horizon,
//!   or a clipped linear ramp
//! - **S** (sensitivity): direct lookup of the asset's sensitivity label
//! - **E** (exposure): harvestability `q`, or 0 when the asset does not use a
//!   classical public-key algorithm
//!
//! The weighted sum `wT·T + wS·S + wE·E` is mapped to a [`RiskBand`].
//!
//! Every function here is pure. Nothing is logged; failures are returned.
//!
//! # Example
//!
//! ```rust
//! use qars::config::QarsConfig;
//! use qars::scoring::{score, RiskBand};
//!
//! let config = QarsConfig::default();
//! let result = score(&config, 15.0, 2.0, 12.0, "High", true, 0.3).unwrap();
//! assert_eq!(result.band, RiskBand::High);
//! ```

pub mod band;

use serde::{Serialize, Serializer};

use crate::config::QarsConfig;
use crate::errors::{Result, ScoringError};

pub use band::RiskBand;

/// Raw inputs describing one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreInput {
    /// Years the data must remain confidential
    #[serde(rename = "X")]
    pub x: f64,
    /// Years needed to migrate the asset
    #[serde(rename = "Y")]
    pub y: f64,
    /// Projected years until a cryptographically-relevant quantum computer
    #[serde(rename = "Z")]
    pub z: f64,
    /// Sensitivity label; unknown labels score 0
    pub sensitivity: String,
    /// Asset relies on a classical, quantum-breakable public-key algorithm
    #[serde(serialize_with = "serialize_flag")]
    pub v: bool,
    /// Harvest-now-decrypt-later probability
    pub q: f64,
}

impl ScoreInput {
    pub fn new(x: f64, y: f64, z: f64, sensitivity: impl Into<String>, v: bool, q: f64) -> Self {
        Self {
            x,
            y,
            z,
            sensitivity: sensitivity.into(),
            v,
            q,
        }
    }

    /// Reject negative (or NaN) X, Y, Z and q.
    pub fn validate(&self) -> Result<()> {
        validate_inputs(self.x, self.y, self.z, self.q)
    }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

/// Sub-scores and normalized weights, kept for display and audit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    #[serde(rename = "T")]
    pub t: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "wT")]
    pub w_t: f64,
    #[serde(rename = "wS")]
    pub w_s: f64,
    #[serde(rename = "wE")]
    pub w_e: f64,
}

/// Outcome of scoring one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub band: RiskBand,
    #[serde(rename = "T")]
    pub t: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "E")]
    pub e: f64,
    pub breakdown: Breakdown,
}

/// Timeline ratio `r = (X + Y) / Z`.
///
/// A non-positive horizon is infinitely urgent when anything must still be
/// protected or migrated, and not urgent at all otherwise.
pub fn timeline_raw(x: f64, y: f64, z: f64) -> f64 {
    let need = x + y;
    if z <= 0.0 {
        if need > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    } else {
        need / z
    }
}

/// Sigmoid centered at `r = 1` with steepness `alpha`. `+inf` maps to 1.
pub fn logistic(r: f64, alpha: f64) -> f64 {
    if r == f64::INFINITY {
        return 1.0;
    }
    1.0 / (1.0 + (-alpha * (r - 1.0)).exp())
}

/// Identity on [0, 1], saturating outside it.
pub fn linear_clip(r: f64) -> f64 {
    r.clamp(0.0, 1.0)
}

/// Timeline score T for a timeline ratio, using the configured mapping.
pub fn ftime(config: &QarsConfig, r: f64) -> f64 {
    if config.timeline_linear() {
        linear_clip(r)
    } else {
        logistic(r, config.alpha())
    }
}

/// Sensitivity score S; labels missing from the map score 0.
pub fn fsens(config: &QarsConfig, label: &str) -> f64 {
    config.sensitivity_value(label)
}

/// Exposure score E. Assets without classical public-key exposure score 0.
pub fn fexpos(v: bool, q: f64) -> f64 {
    if !v {
        return 0.0;
    }
    linear_clip(q)
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    // NaN fails the comparison; infinities would make T undefined (inf / inf)
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ScoringError::InvalidInput { field, value })
    }
}

fn validate_inputs(x: f64, y: f64, z: f64, q: f64) -> Result<()> {
    check_non_negative("X", x)?;
    check_non_negative("Y", y)?;
    check_non_negative("Z", z)?;
    check_non_negative("q", q)
}

/// Score one asset.
///
/// Fails with [`ScoringError::InvalidInput`] before computing anything when
/// X, Y, Z or q is negative, NaN or infinite.
pub fn score(
    config: &QarsConfig,
    x: f64,
    y: f64,
    z: f64,
    sensitivity: &str,
    v: bool,
    q: f64,
) -> Result<ScoreResult> {
    validate_inputs(x, y, z, q)?;

    let t = ftime(config, timeline_raw(x, y, z));
    let s = fsens(config, sensitivity);
    let e = fexpos(v, q);

    let (w_t, w_s, w_e) = config.weights();
    let score = w_t * t + w_s * s + w_e * e;

    Ok(ScoreResult {
        score,
        band: RiskBand::from_score(score),
        t,
        s,
        e,
        breakdown: Breakdown {
            t,
            s,
            e,
            w_t,
            w_s,
            w_e,
        },
    })
}

/// Score a [`ScoreInput`].
pub fn score_input(config: &QarsConfig, input: &ScoreInput) -> Result<ScoreResult> {
    score(
        config,
        input.x,
        input.y,
        input.z,
        &input.sensitivity,
        input.v,
        input.q,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectorPreset;

    fn linear_config() -> QarsConfig {
        QarsConfig::default().with_timeline_linear(true)
    }

    #[test]
    fn test_timeline_raw_divides() {
        assert_eq!(timeline_raw(15.0, 2.0, 12.0), 17.0 / 12.0);
        assert_eq!(timeline_raw(0.0, 0.0, 5.0), 0.0);
        assert_eq!(timeline_raw(3.0, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_timeline_raw_zero_horizon() {
        assert_eq!(timeline_raw(1.0, 0.0, 0.0), f64::INFINITY);
        assert_eq!(timeline_raw(0.0, 0.5, 0.0), f64::INFINITY);
        assert_eq!(timeline_raw(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_logistic_center_is_half() {
        for alpha in [0.5, 1.0, 6.0, 8.0, 10.0, 20.0] {
            assert_eq!(logistic(1.0, alpha), 0.5);
        }
    }

    #[test]
    fn test_logistic_infinity_is_one() {
        let config = QarsConfig::default();
        assert_eq!(ftime(&config, f64::INFINITY), 1.0);
        assert_eq!(logistic(f64::INFINITY, 0.0), 1.0);
    }

    #[test]
    fn test_logistic_strictly_inside_unit_interval() {
        let config = QarsConfig::default();
        for r in [0.0, 0.25, 0.5, 0.99, 1.01, 1.5, 2.0, 3.0] {
            let t = ftime(&config, r);
            assert!(t > 0.0 && t < 1.0, "ftime({r}) = {t}");
        }
    }

    #[test]
    fn test_logistic_is_monotonic() {
        let config = QarsConfig::default();
        let values: Vec<f64> = (0..=40).map(|i| ftime(&config, i as f64 * 0.1)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_linear_ftime_clips() {
        let config = linear_config();
        assert_eq!(ftime(&config, 0.0), 0.0);
        assert_eq!(ftime(&config, 0.4), 0.4);
        assert_eq!(ftime(&config, 1.0), 1.0);
        assert_eq!(ftime(&config, 3.5), 1.0);
        assert_eq!(ftime(&config, f64::INFINITY), 1.0);
    }

    #[test]
    fn test_fsens_default_map() {
        let config = QarsConfig::default();
        assert_eq!(fsens(&config, "Low"), 0.25);
        assert_eq!(fsens(&config, "Moderate"), 0.5);
        assert_eq!(fsens(&config, "High"), 0.75);
        assert_eq!(fsens(&config, "Critical"), 1.0);
        assert_eq!(fsens(&config, "TopSecret"), 0.0);
    }

    #[test]
    fn test_fexpos_without_visibility_is_zero() {
        for q in [0.0, 0.3, 0.7, 1.0] {
            assert_eq!(fexpos(false, q), 0.0);
        }
    }

    #[test]
    fn test_fexpos_clips_q() {
        assert_eq!(fexpos(true, 0.3), 0.3);
        assert_eq!(fexpos(true, 1.0), 1.0);
        assert_eq!(fexpos(true, 4.2), 1.0);
        assert_eq!(fexpos(true, 0.0), 0.0);
    }

    #[test]
    fn test_reference_scenario() {
        let config = QarsConfig::default();
        let result = score(&config, 15.0, 2.0, 12.0, "High", true, 0.3).unwrap();

        assert!((result.t - 0.965).abs() < 1e-3, "T = {}", result.t);
        assert_eq!(result.s, 0.75);
        assert_eq!(result.e, 0.3);
        assert!((result.score - 0.672).abs() < 1e-3, "score = {}", result.score);
        assert_eq!(result.band, RiskBand::High);
    }

    #[test]
    fn test_breakdown_mirrors_result() {
        let config = SectorPreset::Finance.to_config();
        let result = score(&config, 5.0, 3.0, 10.0, "Critical", true, 0.6).unwrap();
        let breakdown = result.breakdown;

        assert_eq!(breakdown.t, result.t);
        assert_eq!(breakdown.s, result.s);
        assert_eq!(breakdown.e, result.e);
        assert_eq!((breakdown.w_t, breakdown.w_s, breakdown.w_e), config.weights());
        let recombined = breakdown.w_t * breakdown.t + breakdown.w_s * breakdown.s + breakdown.w_e * breakdown.e;
        assert_eq!(recombined, result.score);
    }

    #[test]
    fn test_negative_x_is_invalid_input() {
        let config = QarsConfig::default();
        let err = score(&config, -1.0, 0.0, 10.0, "Low", false, 0.0).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidInput {
                field: "X",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_each_negative_field_is_reported() {
        let config = QarsConfig::default();
        let cases = [
            ((0.0, -0.5, 1.0, 0.1), "Y"),
            ((0.0, 0.0, -3.0, 0.1), "Z"),
            ((0.0, 0.0, 1.0, -0.1), "q"),
        ];
        for ((x, y, z, q), field) in cases {
            match score(&config, x, y, z, "Low", true, q) {
                Err(ScoringError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected InvalidInput for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_input_is_invalid() {
        let config = QarsConfig::default();
        assert!(score(&config, f64::NAN, 0.0, 1.0, "Low", true, 0.1).is_err());
        assert!(score(&config, 0.0, 0.0, 1.0, "Low", true, f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_input_is_invalid() {
        let config = QarsConfig::default();
        match score(&config, f64::INFINITY, 0.0, f64::INFINITY, "Low", true, 0.5) {
            Err(ScoringError::InvalidInput { field, value }) => {
                assert_eq!(field, "X");
                assert_eq!(value, f64::INFINITY);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert!(score(&config, 1.0, f64::INFINITY, 10.0, "Low", true, 0.5).is_err());
        assert!(score(&config, 1.0, 0.0, f64::INFINITY, "Low", true, 0.5).is_err());
        assert!(score(&config, 1.0, 0.0, 10.0, "Low", true, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_horizon_and_zero_need_is_not_urgent() {
        let config = linear_config();
        let result = score(&config, 0.0, 0.0, 0.0, "Low", false, 0.0).unwrap();
        assert_eq!(result.t, 0.0);
        assert_eq!(result.band, RiskBand::Low);
    }

    #[test]
    fn test_everything_maximal_is_critical() {
        let config = QarsConfig::default();
        let result = score(&config, 30.0, 5.0, 0.0, "Critical", true, 1.0).unwrap();
        assert!((result.score - 1.0).abs() < 1e-12);
        assert_eq!(result.band, RiskBand::Critical);
    }

    #[test]
    fn test_score_input_matches_score() {
        let config = SectorPreset::Cloud.to_config();
        let input = ScoreInput::new(10.0, 2.0, 15.0, "Moderate", true, 0.5);
        assert!(input.validate().is_ok());
        assert_eq!(
            score_input(&config, &input).unwrap(),
            score(&config, 10.0, 2.0, 15.0, "Moderate", true, 0.5).unwrap()
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let config = QarsConfig::default();
        let input = ScoreInput::new(15.0, 2.0, 12.0, "High", true, 0.3);
        let result = score_input(&config, &input).unwrap();

        let input_json = serde_json::to_value(&input).unwrap();
        assert_eq!(input_json["X"], 15.0);
        assert_eq!(input_json["v"], 1);

        let json = serde_json::to_value(&result).unwrap();
        for key in ["score", "band", "T", "S", "E", "breakdown"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        for key in ["T", "S", "E", "wT", "wS", "wE"] {
            assert!(json["breakdown"].get(key).is_some(), "missing breakdown.{key}");
        }
        assert_eq!(json["band"], "High");
    }
}
