// Export modules for library usage
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod observability;
pub mod output;
pub mod scoring;

// Re-export commonly used types
pub use crate::config::{QarsConfig, SectorPreset, SensitivityLevel};
pub use crate::errors::{ConfigError, ScoringError};
pub use crate::scoring::{
    fexpos, fsens, ftime, score, score_input, timeline_raw, Breakdown, RiskBand, ScoreInput,
    ScoreResult,
};
