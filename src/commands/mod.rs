//! CLI command implementations for qars operations.
//!
//! Available commands:
//! - **score**: Score a single asset and render the assessment
//! - **batch**: Score a CSV asset inventory into a superset CSV
//! - **init**: Initialize a new `.qars.toml` configuration file
//!
//! `main` converts parsed arguments into each command's config struct; the
//! commands own all I/O.

pub mod batch;
pub mod init;
pub mod score;

use anyhow::Result;

use crate::cli::ConfigArgs;
use crate::config::{load_config_file, resolve_config, ConfigOverrides, QarsConfig, SectorPreset};

pub use batch::{handle_batch, BatchConfig};
pub use init::init_config;
pub use score::{handle_score, ScoreConfig};

/// Configuration sources shared by `score` and `batch`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSource {
    pub preset: Option<SectorPreset>,
    pub config_path: Option<std::path::PathBuf>,
    pub overrides: ConfigOverrides,
}

impl ConfigSource {
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        let mut overrides = ConfigOverrides {
            alpha: args.alpha,
            timeline_linear: args.linear.then_some(true),
            ..Default::default()
        };
        if let Some(weights) = args.weights {
            overrides = overrides.with_weight_list(&weights)?;
        }
        Ok(Self {
            preset: args.preset.map(SectorPreset::from),
            config_path: args.config,
            overrides,
        })
    }

    /// Load the config file (explicit or discovered) and apply all layers.
    pub fn resolve(&self) -> Result<(SectorPreset, QarsConfig)> {
        let file = load_config_file(self.config_path.as_deref())?;
        let resolved = resolve_config(&file, self.preset, &self.overrides)?;
        tracing::debug!(
            preset = %resolved.0,
            alpha = resolved.1.alpha(),
            linear = resolved.1.timeline_linear(),
            "Resolved scoring configuration"
        );
        Ok(resolved)
    }
}
