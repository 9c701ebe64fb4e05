use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

const DEFAULT_CONFIG: &str = r#"# QARS Configuration

# Base sector preset: default, finance, iot, cloud
preset = "default"

# Timeline steepness for logistic scaling
alpha = 8.0

# Use linear timeline scaling (T = min(1, r)) instead of logistic
timeline_linear = false

# Weights are renormalized to sum to 1
[weights]
timeline = 1.0
sensitivity = 1.0
exposure = 1.0

# Sensitivity label values in [0, 1]
[sensitivity]
Low = 0.25
Moderate = 0.5
High = 0.75
Critical = 1.0
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
