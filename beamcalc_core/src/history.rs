//! # Sizing History
//!
//! An in-memory, append-only table of past sizing results. The log is owned by
//! whoever drives the calculations (a CLI session, a form, a test); the core
//! never keeps one of its own.
//!
//! ## Structure
//!
//! ```text
//! SizingLog
//! ├── created: DateTime<Utc>
//! └── records: Vec<SizingRecord> (insertion order)
//!     ├── id: Uuid (request id)
//!     ├── recorded_at: DateTime<Utc>
//!     ├── input: SizingInput
//!     └── result: SizingResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beamcalc_core::calculations::{calculate, SizingInput};
//! use beamcalc_core::geometry::BoundingBox;
//! use beamcalc_core::history::SizingLog;
//! use beamcalc_core::loads::LoadCase;
//! use beamcalc_core::materials::MaterialProperties;
//!
//! let input = SizingInput::new(
//!     "B-1",
//!     BoundingBox::new(0.0, 0.0, 6.0, 0.5),
//!     MaterialProperties::STRUCTURAL_STEEL,
//!     LoadCase::uniform(10.0),
//! );
//! let result = calculate(&input).unwrap();
//!
//! let mut log = SizingLog::new();
//! let id = log.append(input, result);
//! assert_eq!(log.get(&id).unwrap().result.depth, result.depth);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::calculations::{SizingInput, SizingResult};
use crate::errors::CalcResult;

/// One completed sizing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingRecord {
    /// Request id assigned on append
    pub id: Uuid,

    /// When the record was appended
    pub recorded_at: DateTime<Utc>,

    pub input: SizingInput,

    pub result: SizingResult,
}

/// Append-only log of sizing results keyed by request id.
#[derive(Debug, Clone, Serialize)]
pub struct SizingLog {
    /// When the log was started
    pub created: DateTime<Utc>,

    records: Vec<SizingRecord>,

    /// Position of each id in `records`
    #[serde(skip)]
    index: HashMap<Uuid, usize>,
}

impl SizingLog {
    pub fn new() -> Self {
        SizingLog {
            created: Utc::now(),
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a result and return the request id assigned to it.
    pub fn append(&mut self, input: SizingInput, result: SizingResult) -> Uuid {
        let id = Uuid::new_v4();
        self.index.insert(id, self.records.len());
        self.records.push(SizingRecord {
            id,
            recorded_at: Utc::now(),
            input,
            result,
        });
        tracing::debug!(%id, count = self.records.len(), "appended sizing record");
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&SizingRecord> {
        self.index.get(id).and_then(|&i| self.records.get(i))
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SizingRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&SizingRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty JSON snapshot of the whole log.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SizingLog {
    fn default() -> Self {
        SizingLog::new()
    }
}
