use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::overrides::ConfigOverrides;
use super::presets::SectorPreset;
use super::{QarsConfig, SensitivityLevel};
use crate::errors::ConfigError;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".qars.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Contents of a `.qars.toml` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Base sector preset
    pub preset: Option<SectorPreset>,

    /// Logistic steepness override
    pub alpha: Option<f64>,

    /// Use linear timeline scaling
    pub timeline_linear: Option<bool>,

    /// Weight override; all three components are renormalized together
    pub weights: Option<WeightsSection>,

    /// Per-label sensitivity overrides
    #[serde(default)]
    pub sensitivity: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightsSection {
    pub timeline: f64,
    pub sensitivity: f64,
    pub exposure: f64,
}

impl ConfigFile {
    /// Express the file's fields as overrides on top of its preset.
    pub fn overrides(&self) -> Result<ConfigOverrides, ConfigError> {
        let sensitivity = self
            .sensitivity
            .iter()
            .map(|(label, &value)| {
                SensitivityLevel::from_label(label)
                    .map(|level| (level, value))
                    .ok_or_else(|| ConfigError::UnknownSensitivity(label.clone()))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(ConfigOverrides {
            alpha: self.alpha,
            timeline_linear: self.timeline_linear,
            weights: self
                .weights
                .map(|w| (w.timeline, w.sensitivity, w.exposure)),
            sensitivity,
        })
    }
}

/// Parse config file contents from a TOML string
pub fn parse_config(contents: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str::<ConfigFile>(contents)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate directory ancestors up to a depth limit, starting with `start`
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.qars.toml` in `start` or one of its ancestors.
pub fn discover_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load the config file.
///
/// An explicit path must exist. Without one, the current directory and its
/// ancestors are searched; finding nothing yields the default (empty) file.
/// A discovered file that fails to parse is an error, not a silent fallback.
pub fn load_config_file(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit {
        let config = read_config_file(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return Ok(ConfigFile::default());
        }
    };

    match discover_config_file(&current) {
        Some(path) => {
            let config = read_config_file(&path)?;
            debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => {
            debug!(
                "No {} found after checking {} directories. Using default config.",
                CONFIG_FILE_NAME, MAX_TRAVERSAL_DEPTH
            );
            Ok(ConfigFile::default())
        }
    }
}

/// Resolve the effective preset and configuration.
///
/// Precedence, lowest to highest: `preset` argument (or the file's preset, or
/// default), then the file's overrides, then `cli` overrides.
pub fn resolve_config(
    file: &ConfigFile,
    preset: Option<SectorPreset>,
    cli: &ConfigOverrides,
) -> Result<(SectorPreset, QarsConfig), ConfigError> {
    let preset = preset.or(file.preset).unwrap_or_default();
    let overrides = file.overrides()?.merge(cli);
    let config = overrides.apply(&preset.to_config())?;
    Ok((preset, config))
}
