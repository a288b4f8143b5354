//! FILENAME: core/report-engine/src/definition.rs
//! Report Definition - The serializable configuration.
//!
//! This module contains all the types needed to DESCRIBE a report run.
//! These structures are designed to be:
//! - Serializable (for saving/loading alongside a job)
//! - Immutable snapshots of caller intent
//!
//! Credentials, file paths, and environment lookups live with the calling
//! application, never here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// SUMMARY CONFIGURATION
// ============================================================================

/// Column-name configuration for the summary (total) row of each group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryColumns {
    /// The column whose values are summed, e.g. "Amount (PKR)".
    pub amount_column: String,

    /// The column that receives the literal "Total" label.
    pub label_column: String,

    /// Columns carried forward from the LAST record of the group, e.g. an
    /// inbound/reference-number column.
    #[serde(default)]
    pub carry_columns: Vec<String>,

    /// Columns forced blank on the total row even when a carry rule would
    /// otherwise populate them (delivery/PO/plant/date columns).
    #[serde(default)]
    pub always_blank_columns: Vec<String>,
}

impl SummaryColumns {
    pub fn new(amount_column: impl Into<String>, label_column: impl Into<String>) -> Self {
        SummaryColumns {
            amount_column: amount_column.into(),
            label_column: label_column.into(),
            carry_columns: Vec::new(),
            always_blank_columns: Vec::new(),
        }
    }
}

/// How the total figure is computed for each group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TotalStrategy {
    /// A single total row holding the plain sum.
    Plain,
    /// The plain total row followed by a second row holding the
    /// tax-inclusive figure (the "annexure" report variant).
    TaxInclusive { rate_percent: f64 },
}

impl Default for TotalStrategy {
    fn default() -> Self {
        TotalStrategy::Plain
    }
}

// ============================================================================
// PAGE SIZING
// ============================================================================

/// How the drawing collaborator should size each page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageSizing {
    /// Content-driven: width grows to fit the widest row, height expands
    /// once the data-row count passes a threshold, otherwise a fixed
    /// minimum canvas is used.
    Auto,
    /// A fixed page extent in points (e.g. A4).
    Fixed { width: f64, height: f64 },
}

impl Default for PageSizing {
    fn default() -> Self {
        PageSizing::Auto
    }
}

// ============================================================================
// MAIN DEFINITION STRUCT
// ============================================================================

/// The complete, serializable definition of a report run.
/// This is the "source of truth" a caller hands to the render driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// The column rows are grouped by, e.g. "Del.Challan".
    pub key_column: String,

    /// Pagination budget: maximum rendered rows per page. Soft cap for a
    /// single group that alone exceeds it.
    #[serde(default = "default_max_rows_per_page")]
    pub max_rows_per_page: usize,

    /// Blank rows inserted between groups sharing a page.
    #[serde(default = "default_inter_group_spacing")]
    pub inter_group_spacing: usize,

    /// Sort groups by the minimum numeric value of the key before
    /// pagination (non-numeric keys sort last). Off by default; insertion
    /// order is preserved otherwise.
    #[serde(default)]
    pub sort_groups_by_min_key: bool,

    /// Display-name overrides for the header row, keyed by the trimmed
    /// source column name.
    #[serde(default)]
    pub header_map: HashMap<String, String>,

    /// Summary (total) row configuration.
    pub summary: SummaryColumns,

    /// Total computation strategy.
    #[serde(default)]
    pub total_strategy: TotalStrategy,

    /// Character budget for free-text cells before ellipsis truncation.
    #[serde(default = "default_truncate_chars")]
    pub truncate_chars: usize,

    /// Page extent mode handed to the drawing collaborator.
    #[serde(default)]
    pub sizing: PageSizing,
}

fn default_max_rows_per_page() -> usize {
    22
}

fn default_inter_group_spacing() -> usize {
    4
}

fn default_truncate_chars() -> usize {
    80
}

impl ReportDefinition {
    /// Creates a definition with minimal configuration and the stock
    /// pagination defaults.
    pub fn new(key_column: impl Into<String>, summary: SummaryColumns) -> Self {
        ReportDefinition {
            key_column: key_column.into(),
            max_rows_per_page: default_max_rows_per_page(),
            inter_group_spacing: default_inter_group_spacing(),
            sort_groups_by_min_key: false,
            header_map: HashMap::new(),
            summary,
            total_strategy: TotalStrategy::Plain,
            truncate_chars: default_truncate_chars(),
            sizing: PageSizing::Auto,
        }
    }

    /// Serializes the definition to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Loads a definition from JSON, or None if it does not parse.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}
