use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk category derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    /// Scores strictly above this are Critical
    pub const CRITICAL_THRESHOLD: f64 = 0.85;
    /// Scores strictly above this are at least High
    pub const HIGH_THRESHOLD: f64 = 0.60;
    /// Scores at or above this are at least Medium
    pub const MEDIUM_THRESHOLD: f64 = 0.30;

    /// Map a score to its band.
    ///
    /// The Critical and High floors are exclusive while the Medium floor is
    /// inclusive: 0.85 is High, 0.60 is Medium, 0.30 is Medium.
    pub fn from_score(score: f64) -> Self {
        if score > Self::CRITICAL_THRESHOLD {
            RiskBand::Critical
        } else if score > Self::HIGH_THRESHOLD {
            RiskBand::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
            RiskBand::Critical => "Critical",
        }
    }

    /// Short recommended action for this band
    pub fn recommended_action(self) -> &'static str {
        match self {
            RiskBand::Critical => "Begin migration immediately",
            RiskBand::High => "Prioritize early migration",
            RiskBand::Medium => "Schedule in roadmap",
            RiskBand::Low => "Routine, monitor",
        }
    }

    /// Longer guidance shown next to the recommended action
    pub fn guidance(self) -> &'static str {
        match self {
            RiskBand::Critical => {
                "Begin PQC migration immediately and/or apply compensating controls."
            }
            RiskBand::High => "Prioritize for early migration and implement mitigations.",
            RiskBand::Medium => "Schedule in roadmap; review during major upgrades.",
            RiskBand::Low => "Routine migration ok; monitor for changes.",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
