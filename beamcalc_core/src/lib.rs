//! # beamcalc_core - Rectangular Beam Sizing Engine
//!
//! `beamcalc_core` is the computational heart of BeamCalc. Given the bounding
//! box a beam must span, its material and a uniform load, it returns the
//! required rectangular section and checks shear stress and deflection for
//! it. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not NaN
//! - **Caller-owned state**: history and export live with the front end
//!
//! ## Quick Start
//!
//! ```rust
//! use beamcalc_core::{size_beam, BoundingBox, LoadCase, MaterialProperties};
//!
//! let result = size_beam(
//!     &BoundingBox::new(0.0, 0.0, 6.0, 0.5),
//!     &MaterialProperties::STRUCTURAL_STEEL,
//!     &LoadCase::uniform(10.0),
//! ).unwrap();
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("depth"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The sizing calculation
//! - [`geometry`] - Bounding box
//! - [`materials`] - Material properties
//! - [`loads`] - Uniform load
//! - [`history`] - Append-only log of past results
//! - [`export`] - Pluggable sinks for downstream CAD tools
//! - [`diagram`] - Section diagram geometry and SVG
//! - [`settings`] - Session settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod diagram;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod history;
pub mod loads;
pub mod materials;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, size_beam, size_section, SizingInput, SizingResult};
pub use errors::{CalcError, CalcResult};
pub use geometry::BoundingBox;
pub use history::{SizingLog, SizingRecord};
pub use loads::LoadCase;
pub use materials::MaterialProperties;
pub use settings::SessionSettings;
