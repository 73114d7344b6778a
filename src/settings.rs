//! Game settings and tuning
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{OscillatorConfig, TagNames, ThrustConfig};

/// Rocket and obstacle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Main engine and RCS thrust
    pub thrust: ThrustConfig,
    /// Collider tag names
    pub tags: TagNames,
    /// Honour the advance-level / invulnerability hotkeys
    pub debug_keys: bool,
    /// Default obstacle oscillation
    pub oscillator: OscillatorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thrust: ThrustConfig::default(),
            tags: TagNames::default(),
            debug_keys: cfg!(debug_assertions),
            oscillator: OscillatorConfig::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let result = self.thrust.validate().and_then(|_| self.oscillator.validate());
        if let Err(e) = &result {
            log::warn!("Rejected settings: {}", e);
        }
        result
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
