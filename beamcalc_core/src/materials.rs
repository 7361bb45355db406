//! # Material Properties
//!
//! The two material values the sizing solve needs. They are supplied by the
//! caller and passed explicitly on every call; there is no shared material
//! table.
//!
//! ## Example
//!
//! ```rust
//! use beamcalc_core::materials::MaterialProperties;
//!
//! let steel = MaterialProperties::STRUCTURAL_STEEL;
//! assert_eq!(steel.modulus_of_elasticity, 200_000.0);
//!
//! let custom = MaterialProperties::new(11_000.0, 8.0);
//! assert!(custom.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Stiffness and strength of the beam material, in consistent units.
///
/// ## JSON Example
///
/// ```json
/// { "modulus_of_elasticity": 200000.0, "allowable_bending_stress": 160.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Modulus of elasticity E
    pub modulus_of_elasticity: f64,

    /// Allowable bending stress σ_allow
    pub allowable_bending_stress: f64,
}

impl MaterialProperties {
    /// Mild structural steel in MPa: E = 200000, σ_allow = 160.
    pub const STRUCTURAL_STEEL: MaterialProperties = MaterialProperties {
        modulus_of_elasticity: 200_000.0,
        allowable_bending_stress: 160.0,
    };

    pub fn new(modulus_of_elasticity: f64, allowable_bending_stress: f64) -> Self {
        MaterialProperties {
            modulus_of_elasticity,
            allowable_bending_stress,
        }
    }

    /// Both values must be finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        let e = self.modulus_of_elasticity;
        if !e.is_finite() || e <= 0.0 {
            return Err(CalcError::invalid_material(
                "modulus_of_elasticity",
                e.to_string(),
                "Modulus of elasticity must be a positive number",
            ));
        }
        let fb = self.allowable_bending_stress;
        if !fb.is_finite() || fb <= 0.0 {
            return Err(CalcError::invalid_material(
                "allowable_bending_stress",
                fb.to_string(),
                "Allowable bending stress must be a positive number",
            ));
        }
        Ok(())
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties::STRUCTURAL_STEEL
    }
}
