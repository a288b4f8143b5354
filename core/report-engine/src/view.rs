//! FILENAME: core/report-engine/src/view.rs
//! Report View - renderable output for the drawing collaborator.
//!
//! This module defines the page structure the render driver emits: rows of
//! display strings tagged with a role, plus the content-driven page extent.
//! Everything here is rebuilt from the source table on every render; no
//! state survives between calls.

use serde::{Deserialize, Serialize};

use crate::definition::PageSizing;

// ============================================================================
// ROW ROLES
// ============================================================================

/// The role of a rendered row on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowRole {
    /// Column header row (one per group).
    Header,
    /// Source data row.
    Data,
    /// Synthetic total row appended after a group's data rows.
    Total,
    /// Blank separator row between groups on the same page.
    Spacing,
}

/// A single rendered row: its role plus one display string per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRow {
    pub role: RowRole,
    pub cells: Vec<String>,
}

impl PageRow {
    pub fn new(role: RowRole, cells: Vec<String>) -> Self {
        PageRow { role, cells }
    }

    /// A blank spacing row of the given width.
    pub fn spacing(width: usize) -> Self {
        PageRow {
            role: RowRole::Spacing,
            cells: vec![String::new(); width],
        }
    }
}

// ============================================================================
// PAGE EXTENT
// ============================================================================

/// The page size handed to the drawing collaborator, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageExtent {
    pub width: f64,
    pub height: f64,
}

/// A4 portrait in points, the fixed extent used by combined-page output.
pub const A4_PORTRAIT: PageExtent = PageExtent {
    width: 595.28,
    height: 841.89,
};

// Content-driven sizing constants. Width grows to fit the widest row;
// height stays at the base canvas until the data-row count passes
// HEIGHT_EXPAND_THRESHOLD.
const MIN_PAGE_WIDTH: f64 = 500.0;
const BASE_PAGE_HEIGHT: f64 = 300.0;
const PAGE_MARGIN: f64 = 56.7; // 20 mm
const CHAR_WIDTH: f64 = 5.0;
const CELL_PADDING: f64 = 12.0;
const ROW_HEIGHT: f64 = 14.0;
const HEIGHT_EXPAND_THRESHOLD: usize = 12;
const HEIGHT_EXPAND_BUFFER: f64 = 200.0;

/// Computes the content-driven extent for a set of rendered rows.
pub fn compute_extent(rows: &[PageRow], sizing: PageSizing) -> PageExtent {
    if let PageSizing::Fixed { width, height } = sizing {
        return PageExtent { width, height };
    }

    let column_count = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);

    // Widest content per column, in characters.
    let mut col_chars = vec![0usize; column_count];
    for row in rows {
        for (col, cell) in row.cells.iter().enumerate() {
            let chars = cell.chars().count();
            if chars > col_chars[col] {
                col_chars[col] = chars;
            }
        }
    }

    let table_width: f64 = col_chars
        .iter()
        .map(|&chars| chars as f64 * CHAR_WIDTH + CELL_PADDING)
        .sum();
    let width = (table_width + PAGE_MARGIN * 2.0).max(MIN_PAGE_WIDTH);

    let data_rows = rows.iter().filter(|r| r.role == RowRole::Data).count();
    let height = if data_rows > HEIGHT_EXPAND_THRESHOLD {
        rows.len() as f64 * ROW_HEIGHT + PAGE_MARGIN * 2.0 + HEIGHT_EXPAND_BUFFER
    } else {
        BASE_PAGE_HEIGHT + PAGE_MARGIN * 2.0
    };

    PageExtent { width, height }
}

// ============================================================================
// PAGE AND ARTIFACT
// ============================================================================

/// One printable unit: whole groups rendered as role-tagged rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    /// Zero-based page index.
    pub index: usize,

    /// Display column names (after header mapping).
    pub columns: Vec<String>,

    /// Keys of the groups on this page, in order.
    pub group_keys: Vec<String>,

    /// Rendered rows, top to bottom.
    pub rows: Vec<PageRow>,

    /// Page size for the drawing collaborator.
    pub extent: PageExtent,
}

impl ReportPage {
    /// Total rendered rows (header + data + total + spacing).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data rows only.
    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|r| r.role == RowRole::Data).count()
    }
}

/// A page plus its freshly-derived style plan: everything the drawing
/// collaborator needs to produce one finished page.
#[derive(Debug, Clone)]
pub struct PageArtifact {
    pub page: ReportPage,
    pub style: crate::style_resolver::StylePlan,
}

// ============================================================================
// DISPLAY TRUNCATION
// ============================================================================

/// Truncates display text to `budget` characters, marking the cut with an
/// ellipsis. A lossy display transform only; source values are untouched.
pub fn truncate_display(text: &str, budget: usize) -> String {
    if budget == 0 || text.chars().count() <= budget {
        return text.to_string();
    }
    let mut out: String = text.chars().take(budget.saturating_sub(1)).collect();
    out.push('…');
    out
}
