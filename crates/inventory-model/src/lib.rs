//! Data model for network inventory normalization.
//!
//! Everything here is row-scoped: a [`RawRow`] goes in, the normalizers emit
//! [`Issue`]s and [`NormalizationStep`]s, and the row is assembled into a
//! [`CleanRecord`] plus an optional [`AnomalyRecord`].

pub mod error;
pub mod issue;
pub mod record;
pub mod row;
pub mod steps;
pub mod validity;

pub use error::{ModelError, Result};
pub use issue::{Issue, IssueField, IssueKind};
pub use record::{AnomalyRecord, CLEAN_COLUMNS, CleanRecord};
pub use row::{INPUT_COLUMNS, InputColumn, RawRow};
pub use steps::{NormalizationStep, StepFamily, StepLog};
pub use validity::{Confidence, Validity};
