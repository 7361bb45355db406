//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam_sizing`] - Required rectangular section for a uniformly loaded, simply-supported beam

pub mod beam_sizing;

// Re-export commonly used types
pub use beam_sizing::{calculate, size_beam, size_section, SizingInput, SizingResult};
