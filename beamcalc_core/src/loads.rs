//! Uniform load definition
//!
//! A single uniformly distributed load over the full span. The sign of the
//! value encodes direction (negative = upward); sizing uses the magnitude.
//!
//! # Example
//!
//! ```
//! use beamcalc_core::loads::{LoadCase, LoadDirection};
//!
//! let uplift = LoadCase::uniform(-10.0);
//! assert_eq!(uplift.magnitude(), 10.0);
//! assert_eq!(uplift.direction(), LoadDirection::Upward);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Which way the load acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadDirection {
    /// Gravity direction (positive values)
    Downward,
    /// Uplift (negative values)
    Upward,
}

/// A uniform distributed load in force per unit length.
///
/// ## JSON Example
///
/// ```json
/// { "uniform_distributed_load": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    pub uniform_distributed_load: f64,
}

impl LoadCase {
    pub fn uniform(uniform_distributed_load: f64) -> Self {
        LoadCase {
            uniform_distributed_load,
        }
    }

    /// Absolute value of the load; this is what drives the section size.
    pub fn magnitude(&self) -> f64 {
        self.uniform_distributed_load.abs()
    }

    pub fn direction(&self) -> LoadDirection {
        if self.uniform_distributed_load < 0.0 {
            LoadDirection::Upward
        } else {
            LoadDirection::Downward
        }
    }

    /// Reject zero (it collapses the section to nothing) and non-finite loads.
    pub fn validate(&self) -> CalcResult<()> {
        let w = self.uniform_distributed_load;
        if !w.is_finite() {
            return Err(CalcError::invalid_load(
                "uniform_distributed_load",
                w.to_string(),
                "Load must be a finite number",
            ));
        }
        if w == 0.0 {
            return Err(CalcError::invalid_load(
                "uniform_distributed_load",
                w.to_string(),
                "Load must be non-zero",
            ));
        }
        Ok(())
    }
}
