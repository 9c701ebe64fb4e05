//! Error types for qars.
//!
//! The scoring core has exactly two failure modes, both local validation
//! failures surfaced immediately to the caller:
//!
//! - [`ScoringError::InvalidWeights`]: configuration weights cannot be normalized
//! - [`ScoringError::InvalidInput`]: a scoring input is negative
//!
//! Configuration files add a second layer, [`ConfigError`], which wraps the
//! core error when a file specifies weights the core rejects.
//!
//! # Example
//!
//! ```rust
//! use qars::config::QarsConfig;
//! use qars::errors::ScoringError;
//!
//! let err = QarsConfig::new(0.0, 0.0, 0.0, 8.0, false, None).unwrap_err();
//! assert!(matches!(err, ScoringError::InvalidWeights { .. }));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the scoring core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Weights must be non-negative and have a positive, finite sum
    #[error("Invalid weights: expected non-negative weights with a positive sum, got wT={w_t}, wS={w_s}, wE={w_e}")]
    InvalidWeights { w_t: f64, w_s: f64, w_e: f64 },

    /// X, Y, Z and q must be finite, non-negative numbers
    #[error("Invalid input: {field} must be non-negative and finite, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Result type alias for the scoring core
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors raised while loading or applying a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Logistic steepness must be a positive finite number
    #[error("Configuration error: alpha must be positive and finite, got {0}")]
    InvalidAlpha(f64),

    /// Sensitivity label is not one of Low, Moderate, High, Critical
    #[error("Configuration error: unknown sensitivity label '{0}'. Valid options: Low, Moderate, High, Critical")]
    UnknownSensitivity(String),

    /// Sensitivity value outside the unit interval
    #[error("Configuration error: sensitivity value for {label} must be between 0.0 and 1.0, got {value}")]
    InvalidSensitivity { label: String, value: f64 },

    /// Weight override did not have exactly three components
    #[error("Configuration error: expected 3 weights (wT,wS,wE), got {0}")]
    WeightCount(usize),

    /// Weights rejected by the scoring core
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
