//! # Error Types
//!
//! Structured error types for beamcalc_core. Every sizing failure is a local,
//! recoverable validation failure: the core returns one of these instead of
//! producing NaN, and never touches caller state.
//!
//! ## Example
//!
//! ```rust
//! use beamcalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span: f64) -> CalcResult<()> {
//!     if span <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_span(-1.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_GEOMETRY");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beamcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
///
/// Each variant names the offending field and value so a presentation layer
/// can point the user at the input to fix before re-prompting.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Non-positive span, non-positive depth bound, or a malformed bounding box
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Non-positive modulus of elasticity or allowable bending stress
    #[error("Invalid material for '{field}': {value} - {reason}")]
    InvalidMaterial {
        field: String,
        value: String,
        reason: String,
    },

    /// Zero or non-finite load
    #[error("Invalid load for '{field}': {value} - {reason}")]
    InvalidLoad {
        field: String,
        value: String,
        reason: String,
    },

    /// A value left the real domain mid-calculation (negative radicand, etc.)
    #[error("Numeric domain error in {operation}: {reason}")]
    NumericDomain { operation: String, reason: String },

    /// Settings file could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidMaterial {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoad error
    pub fn invalid_load(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidLoad {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NumericDomain error
    pub fn numeric_domain(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NumericDomain {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's inputs.
    ///
    /// These are fixed by correcting the input and calling again; the core
    /// never retries on its own.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidGeometry { .. } | CalcError::InvalidMaterial { .. } | CalcError::InvalidLoad { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidMaterial { .. } => "INVALID_MATERIAL",
            CalcError::InvalidLoad { .. } => "INVALID_LOAD",
            CalcError::NumericDomain { .. } => "NUMERIC_DOMAIN",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("x_max", "-5", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidGeometry"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_material("e", "0", "x").error_code(), "INVALID_MATERIAL");
        assert_eq!(CalcError::invalid_load("w", "0", "x").error_code(), "INVALID_LOAD");
        assert_eq!(CalcError::numeric_domain("depth", "x").error_code(), "NUMERIC_DOMAIN");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_input_errors() {
        assert!(CalcError::invalid_load("w", "0", "zero").is_input_error());
        assert!(!CalcError::numeric_domain("depth", "negative radicand").is_input_error());
        assert!(!CalcError::file_error("read", "a.json", "missing").is_input_error());
    }

    #[test]
    fn test_display_names_field() {
        let error = CalcError::invalid_material("modulus_of_elasticity", "0", "Must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid material for 'modulus_of_elasticity': 0 - Must be positive"
        );
    }
}
