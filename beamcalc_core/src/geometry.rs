//! # Geometry
//!
//! The axis-aligned bounding box a beam is sized for. The horizontal extent is
//! the span between simple supports; `y_max` doubles as the depth seed used by
//! the sizing solve.
//!
//! ## Example
//!
//! ```rust
//! use beamcalc_core::geometry::BoundingBox;
//!
//! let bbox = BoundingBox::new(0.0, 0.0, 6.0, 0.5);
//! assert!(bbox.validate().is_ok());
//! assert_eq!(bbox.span(), 6.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Axis-aligned bounding box in consistent length units.
///
/// ## JSON Example
///
/// ```json
/// { "x_min": 0.0, "y_min": 0.0, "x_max": 6.0, "y_max": 0.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Horizontal distance between the supports.
    pub fn span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent of the box.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Validate the box for sizing.
    ///
    /// Checks finiteness, then `span > 0`, then `y_max > 0` (it is a divisor
    /// in the depth solve), then `y_max > y_min`.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("x_min", self.x_min),
            ("y_min", self.y_min),
            ("x_max", self.x_max),
            ("y_max", self.y_max),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_geometry(
                    field,
                    value.to_string(),
                    "Coordinate must be a finite number",
                ));
            }
        }

        let span = self.span();
        if span <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "x_max",
                self.x_max.to_string(),
                format!("Span must be positive (x_max - x_min = {})", span),
            ));
        }
        if self.y_max <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "y_max",
                self.y_max.to_string(),
                "y_max must be positive",
            ));
        }
        if self.y_max <= self.y_min {
            return Err(CalcError::invalid_geometry(
                "y_max",
                self.y_max.to_string(),
                format!("y_max must exceed y_min ({})", self.y_min),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_and_height() {
        let bbox = BoundingBox::new(2.0, -1.0, 8.5, 0.5);
        assert!((bbox.span() - 6.5).abs() < 1e-12);
        assert!((bbox.height() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_span_rejected() {
        let err = BoundingBox::new(3.0, 0.0, 3.0, 1.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_reversed_span_rejected() {
        let err = BoundingBox::new(6.0, 0.0, 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidGeometry { ref field, .. } if field == "x_max"));
    }

    #[test]
    fn test_non_positive_y_max_rejected() {
        let err = BoundingBox::new(0.0, -2.0, 6.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidGeometry { ref field, .. } if field == "y_max"));
    }

    #[test]
    fn test_inverted_height_rejected() {
        let err = BoundingBox::new(0.0, 2.0, 6.0, 1.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_nan_rejected() {
        let err = BoundingBox::new(f64::NAN, 0.0, 6.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidGeometry { ref field, .. } if field == "x_min"));
    }

    #[test]
    fn test_serialization() {
        let bbox = BoundingBox::new(0.0, 0.0, 6.0, 0.5);
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(json, r#"{"x_min":0.0,"y_min":0.0,"x_max":6.0,"y_max":0.5}"#);
    }
}
