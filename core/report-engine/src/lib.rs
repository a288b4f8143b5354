//! FILENAME: core/report-engine/src/lib.rs
//! Grouped report subsystem.
//!
//! This crate turns a flat in-memory table into paginated, styled report
//! pages: rows are bucketed by a key column, each bucket gets a synthetic
//! total row, buckets are packed into pages under a row budget, and every
//! page gets a cell-by-cell style plan ready to hand to a page-drawing
//! collaborator. It depends on `engine` for shared types (Table, Value,
//! styles, number formatting).
//!
//! Layers:
//! - `definition`: Serializable configuration (what the report IS)
//! - `semantics`, `headers`, `grouping`, `summary`, `paginate`: the
//!   calculation stages (HOW we build rows and pages)
//! - `view`: Renderable output for the drawing collaborator (WHAT we display)
//! - `style_resolver`: Per-cell style plan derivation
//! - `engine`: The render driver that orchestrates the stages
//! - `delivery`: Feeding pages to an external sink with per-page errors

pub mod definition;
pub mod delivery;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod headers;
pub mod paginate;
pub mod semantics;
pub mod style_resolver;
pub mod summary;
pub mod view;

pub use definition::*;
pub use delivery::{deliver_pages, DeliveryReport, PageSink};
pub use engine::calculate_report;
pub use error::ReportError;
pub use grouping::{group_rows, sort_groups_by_min_key, Group};
pub use headers::map_headers;
pub use semantics::{classify_column, classify_columns, ColumnKind};
pub use style_resolver::{resolve_style, StylePlan};
pub use view::*;
