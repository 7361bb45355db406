//! # Session Settings
//!
//! Values a front end holds for the whole session and passes into each
//! sizing call. Settings are plain JSON so they can be kept next to a
//! drawing or handed over by another tool.
//!
//! ## Example
//!
//! ```rust
//! use beamcalc_core::settings::SessionSettings;
//!
//! let settings = SessionSettings::from_json(r#"{
//!     "material": { "modulus_of_elasticity": 11000.0, "allowable_bending_stress": 8.0 }
//! }"#).unwrap();
//!
//! assert_eq!(settings.material.modulus_of_elasticity, 11000.0);
//! assert!(!settings.export_enabled);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Material used for every calculation in the session
    pub material: MaterialProperties,

    /// Send sized beams to the export sink
    pub export_enabled: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            material: MaterialProperties::STRUCTURAL_STEEL,
            export_enabled: false,
        }
    }
}

impl SessionSettings {
    pub fn validate(&self) -> CalcResult<()> {
        self.material.validate()
    }

    /// Parse and validate settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: SessionSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

        let settings: SessionSettings = serde_json::from_str(&contents).map_err(|e| {
            CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
        })?;
        settings.validate()?;

        tracing::debug!(path = %path.display(), ?settings, "loaded session settings");
        Ok(settings)
    }
}
