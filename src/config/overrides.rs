//! Field overrides layered on top of a base configuration.
//!
//! Both the config file and the command line express their customizations as a
//! [`ConfigOverrides`], which is applied to a preset by building a new
//! [`QarsConfig`].

use std::collections::BTreeMap;

use super::{QarsConfig, SensitivityLevel};
use crate::errors::ConfigError;

/// Optional replacements for individual configuration fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub alpha: Option<f64>,
    pub timeline_linear: Option<bool>,
    /// Raw (wT, wS, wE); renormalized when applied
    pub weights: Option<(f64, f64, f64)>,
    pub sensitivity: BTreeMap<SensitivityLevel, f64>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.alpha.is_none()
            && self.timeline_linear.is_none()
            && self.weights.is_none()
            && self.sensitivity.is_empty()
    }

    /// Build overrides from a weight list as given on the command line.
    pub fn with_weight_list(mut self, weights: &[f64]) -> Result<Self, ConfigError> {
        match weights {
            [w_t, w_s, w_e] => {
                self.weights = Some((*w_t, *w_s, *w_e));
                Ok(self)
            }
            other => Err(ConfigError::WeightCount(other.len())),
        }
    }

    /// Produce a new configuration with every present override applied.
    pub fn apply(&self, base: &QarsConfig) -> Result<QarsConfig, ConfigError> {
        let mut config = base.clone();

        if let Some(alpha) = self.alpha {
            validate_alpha(alpha)?;
            config = config.with_alpha(alpha);
        }

        if let Some(linear) = self.timeline_linear {
            config = config.with_timeline_linear(linear);
        }

        if let Some((w_t, w_s, w_e)) = self.weights {
            config = config.with_weights(w_t, w_s, w_e)?;
        }

        for (&level, &value) in &self.sensitivity {
            validate_sensitivity(level, value)?;
            config = config.with_sensitivity(level, value);
        }

        Ok(config)
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(&self, other: &ConfigOverrides) -> ConfigOverrides {
        let mut sensitivity = self.sensitivity.clone();
        sensitivity.extend(other.sensitivity.iter().map(|(k, v)| (*k, *v)));
        ConfigOverrides {
            alpha: other.alpha.or(self.alpha),
            timeline_linear: other.timeline_linear.or(self.timeline_linear),
            weights: other.weights.or(self.weights),
            sensitivity,
        }
    }
}

fn validate_alpha(alpha: f64) -> Result<(), ConfigError> {
    if alpha > 0.0 && alpha.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidAlpha(alpha))
    }
}

fn validate_sensitivity(level: SensitivityLevel, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSensitivity {
            label: level.to_string(),
            value,
        })
    }
}
