//! Classifier configuration
//!
//! Loads configuration from a TOML file or is built in code. Only the
//! platform is required; the two tunables default to the values the
//! transition tables were designed around.

use crate::error::{Error, Result};
use crate::types::Platform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default value functions for serde deserialization.
mod defaults {
    pub fn rotation_trigger_angle() -> f32 {
        10.0
    }

    pub fn flat_dead_zone_angle() -> f32 {
        60.0
    }
}

/// Orientation classifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Platform whose gravity convention the sample stream follows
    pub platform: Platform,

    /// Hysteresis offset from the nominal 45/135 degree boundaries (degrees).
    ///
    /// Entering a state requires crossing nominal + offset, so a device
    /// resting exactly on a boundary does not oscillate on sensor noise.
    /// Must be in `[0, 45)`. Default: 10.
    #[serde(default = "defaults::rotation_trigger_angle")]
    pub rotation_trigger_angle: f32,

    /// Forward/backward tilt beyond which the device counts as flat (degrees).
    ///
    /// While flat, no transition is evaluated and the previous orientation is
    /// retained. Must be in `(0, 90)`. Default: 60.
    #[serde(default = "defaults::flat_dead_zone_angle")]
    pub flat_dead_zone_angle: f32,
}

impl ClassifierConfig {
    /// Create a configuration with default tunables for a platform
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            rotation_trigger_angle: defaults::rotation_trigger_angle(),
            flat_dead_zone_angle: defaults::flat_dead_zone_angle(),
        }
    }

    /// Load configuration from TOML file
    ///
    /// # Arguments
    /// - `path`: Path to TOML configuration file
    ///
    /// # Returns
    /// Parsed and validated configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ClassifierConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate tunable ranges.
    ///
    /// Rejecting bad tunables here keeps the per-sample path infallible.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..45.0).contains(&self.rotation_trigger_angle) {
            return Err(Error::InvalidParameter(format!(
                "rotation_trigger_angle must be in [0, 45), got {}",
                self.rotation_trigger_angle
            )));
        }
        if !(0.0 < self.flat_dead_zone_angle && self.flat_dead_zone_angle < 90.0) {
            return Err(Error::InvalidParameter(format!(
                "flat_dead_zone_angle must be in (0, 90), got {}",
                self.flat_dead_zone_angle
            )));
        }
        Ok(())
    }
}
