//! FILENAME: core/report-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A configured column (grouping key, amount, or label) is absent from
    /// the table. Raised before any row is processed, and carries the
    /// available columns so a corrected configuration can be retried.
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// The input table has no columns at all, so nothing can be resolved.
    #[error("input table has no columns")]
    EmptyTable,
}

impl ReportError {
    /// Convenience constructor used by every column lookup site.
    pub fn missing_column(column: &str, available: &[String]) -> Self {
        ReportError::MissingColumn {
            column: column.to_string(),
            available: available.to_vec(),
        }
    }
}
