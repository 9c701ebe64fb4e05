//! Scoring configuration.
//!
//! A [`QarsConfig`] holds the three sub-score weights (normalized to sum to 1),
//! the logistic steepness used for timeline scaling, the timeline mode, and the
//! sensitivity map. It is an immutable value: overriding a field produces a new
//! configuration and never touches the original.
//!
//! # Example
//!
//! ```rust
//! use qars::config::{QarsConfig, SectorPreset};
//!
//! let finance = SectorPreset::Finance.to_config();
//! let tuned = finance.with_alpha(12.0);
//!
//! assert_eq!(finance.alpha(), 10.0);
//! assert_eq!(tuned.alpha(), 12.0);
//! assert!((tuned.w_t() + tuned.w_s() + tuned.w_e() - 1.0).abs() < 1e-9);
//! ```

pub mod loader;
pub mod overrides;
pub mod presets;

use crate::errors::{Result, ScoringError};
use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use loader::{
    directory_ancestors, discover_config_file, load_config_file, parse_config, resolve_config,
    ConfigFile, WeightsSection, CONFIG_FILE_NAME,
};
pub use overrides::ConfigOverrides;
pub use presets::SectorPreset;

/// Default logistic steepness
pub const DEFAULT_ALPHA: f64 = 8.0;

/// Qualitative data sensitivity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensitivityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SensitivityLevel {
    pub const ALL: [SensitivityLevel; 4] = [
        SensitivityLevel::Low,
        SensitivityLevel::Moderate,
        SensitivityLevel::High,
        SensitivityLevel::Critical,
    ];

    /// Parse a canonical label. Matching is exact: "High" parses, "high" does not.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(SensitivityLevel::Low),
            "Moderate" => Some(SensitivityLevel::Moderate),
            "High" => Some(SensitivityLevel::High),
            "Critical" => Some(SensitivityLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SensitivityLevel::Low => "Low",
            SensitivityLevel::Moderate => "Moderate",
            SensitivityLevel::High => "High",
            SensitivityLevel::Critical => "Critical",
        }
    }

    /// Value installed by the default sensitivity map
    pub fn default_value(self) -> f64 {
        match self {
            SensitivityLevel::Low => 0.25,
            SensitivityLevel::Moderate => 0.5,
            SensitivityLevel::High => 0.75,
            SensitivityLevel::Critical => 1.0,
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persistent map from sensitivity label to a value in [0, 1].
///
/// Updates return a new map, so two configurations never share mutable state.
pub type SensitivityMap = OrdMap<SensitivityLevel, f64>;

/// Build a fresh copy of the default sensitivity map.
pub fn default_sensitivity_map() -> SensitivityMap {
    SensitivityLevel::ALL
        .iter()
        .map(|&level| (level, level.default_value()))
        .collect()
}

/// Immutable scoring configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct QarsConfig {
    w_t: f64,
    w_s: f64,
    w_e: f64,
    alpha: f64,
    timeline_linear: bool,
    sensitivity_map: SensitivityMap,
}

impl QarsConfig {
    /// Build a configuration, dividing each weight by the sum of all three.
    ///
    /// Fails with [`ScoringError::InvalidWeights`] when any weight is negative
    /// or the raw sum is not positive. A missing sensitivity map installs
    /// [`default_sensitivity_map`].
    pub fn new(
        w_t: f64,
        w_s: f64,
        w_e: f64,
        alpha: f64,
        timeline_linear: bool,
        sensitivity_map: Option<SensitivityMap>,
    ) -> Result<Self> {
        let (w_t, w_s, w_e) = normalize_weights(w_t, w_s, w_e)?;
        Ok(Self {
            w_t,
            w_s,
            w_e,
            alpha,
            timeline_linear,
            sensitivity_map: sensitivity_map.unwrap_or_else(default_sensitivity_map),
        })
    }

    pub fn w_t(&self) -> f64 {
        self.w_t
    }

    pub fn w_s(&self) -> f64 {
        self.w_s
    }

    pub fn w_e(&self) -> f64 {
        self.w_e
    }

    /// Normalized weights as (wT, wS, wE)
    pub fn weights(&self) -> (f64, f64, f64) {
        (self.w_t, self.w_s, self.w_e)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn timeline_linear(&self) -> bool {
        self.timeline_linear
    }

    pub fn sensitivity_map(&self) -> &SensitivityMap {
        &self.sensitivity_map
    }

    /// Look up a sensitivity label. Labels missing from the map score 0.
    pub fn sensitivity_value(&self, label: &str) -> f64 {
        SensitivityLevel::from_label(label)
            .and_then(|level| self.sensitivity_map.get(&level).copied())
            .unwrap_or(0.0)
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            alpha,
            ..self.clone()
        }
    }

    pub fn with_timeline_linear(&self, timeline_linear: bool) -> Self {
        Self {
            timeline_linear,
            ..self.clone()
        }
    }

    /// Replace the weights, renormalizing them.
    pub fn with_weights(&self, w_t: f64, w_s: f64, w_e: f64) -> Result<Self> {
        Self::new(
            w_t,
            w_s,
            w_e,
            self.alpha,
            self.timeline_linear,
            Some(self.sensitivity_map.clone()),
        )
    }

    pub fn with_sensitivity_map(&self, sensitivity_map: SensitivityMap) -> Self {
        Self {
            sensitivity_map,
            ..self.clone()
        }
    }

    /// Override a single sensitivity label, keeping the rest of the map.
    pub fn with_sensitivity(&self, level: SensitivityLevel, value: f64) -> Self {
        self.with_sensitivity_map(self.sensitivity_map.update(level, value))
    }
}

impl Default for QarsConfig {
    fn default() -> Self {
        SectorPreset::Default.to_config()
    }
}

fn normalize_weights(w_t: f64, w_s: f64, w_e: f64) -> Result<(f64, f64, f64)> {
    let sum = w_t + w_s + w_e;
    let all_non_negative = [w_t, w_s, w_e].iter().all(|w| *w >= 0.0);
    if !all_non_negative || sum <= 0.0 || !sum.is_finite() {
        return Err(ScoringError::InvalidWeights { w_t, w_s, w_e });
    }
    Ok((w_t / sum, w_s / sum, w_e / sum))
}
