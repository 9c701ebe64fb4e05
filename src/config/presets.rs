//! Sector presets for common industry verticals.
//!
//! Each preset fixes the weights and the logistic steepness:
//! - **Default**: equal weights, alpha 8
//! - **Finance**: timeline and sensitivity dominate, steep timeline curve
//! - **Iot**: timeline dominates, gentle timeline curve (long device lifetimes)
//! - **Cloud**: exposure dominates (large harvestable surface)
//!
//! The sensitivity map and timeline mode stay at their defaults.
//!
//! # Example
//!
//! ```rust
//! use qars::config::SectorPreset;
//!
//! let config = "finance".parse::<SectorPreset>().unwrap().to_config();
//! assert_eq!(config.alpha(), 10.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{default_sensitivity_map, QarsConfig, DEFAULT_ALPHA};

/// Named bundle of weight and steepness defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorPreset {
    /// Equal weights
    #[default]
    Default,
    /// Long-lived confidential records
    Finance,
    /// Devices that are slow to update
    Iot,
    /// Large exposed surface
    Cloud,
}

impl SectorPreset {
    pub const ALL: [SectorPreset; 4] = [
        SectorPreset::Default,
        SectorPreset::Finance,
        SectorPreset::Iot,
        SectorPreset::Cloud,
    ];

    /// Raw (wT, wS, wE) for this preset, before normalization.
    pub fn weights(self) -> (f64, f64, f64) {
        match self {
            SectorPreset::Default => (1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
            SectorPreset::Finance => (0.4, 0.4, 0.2),
            SectorPreset::Iot => (0.5, 0.2, 0.3),
            SectorPreset::Cloud => (0.3, 0.2, 0.5),
        }
    }

    pub fn alpha(self) -> f64 {
        match self {
            SectorPreset::Default => DEFAULT_ALPHA,
            SectorPreset::Finance => 10.0,
            SectorPreset::Iot => 6.0,
            SectorPreset::Cloud => 8.0,
        }
    }

    /// Convert the preset into a full configuration.
    pub fn to_config(self) -> QarsConfig {
        let (w_t, w_s, w_e) = self.weights();
        let sum = w_t + w_s + w_e;
        // Preset weights are positive constants, so normalization cannot fail
        QarsConfig {
            w_t: w_t / sum,
            w_s: w_s / sum,
            w_e: w_e / sum,
            alpha: self.alpha(),
            timeline_linear: false,
            sensitivity_map: default_sensitivity_map(),
        }
    }

    /// Parse preset from string name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "default" => Some(SectorPreset::Default),
            "finance" => Some(SectorPreset::Finance),
            "iot" => Some(SectorPreset::Iot),
            "cloud" => Some(SectorPreset::Cloud),
            _ => None,
        }
    }

    /// Get the string name of this preset.
    pub fn as_str(self) -> &'static str {
        match self {
            SectorPreset::Default => "default",
            SectorPreset::Finance => "finance",
            SectorPreset::Iot => "iot",
            SectorPreset::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for SectorPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectorPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectorPreset::parse(s).ok_or_else(|| {
            format!(
                "Invalid preset: '{}'. Valid options: default, finance, iot, cloud",
                s
            )
        })
    }
}
