//! FILENAME: core/report-engine/src/grouping.rs
//! Row Grouper - buckets table rows by a key column.
//!
//! Keys are string-coerced and whitespace-stripped. Rows with a blank key
//! are dropped silently (logged at debug level, never an error). Groups
//! keep the first-seen order of their key; an optional pre-pagination sort
//! by minimum numeric key is a separate, explicit pass.

use engine::{number_format::parse_number, Table};
use log::debug;
use rustc_hash::FxHashMap;

use crate::error::ReportError;

/// All rows sharing one grouping-key value, in original order.
/// Rows are stored as indices into the source table, which stays immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The stripped key value.
    pub key: String,

    /// Source row indices in input order.
    pub row_indices: Vec<usize>,
}

impl Group {
    /// Number of data rows in this group.
    pub fn len(&self) -> usize {
        self.row_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_indices.is_empty()
    }
}

/// Buckets rows by `key_column`, preserving first-seen group order.
///
/// Fails fast with `MissingColumn` before any row is touched when the key
/// column is absent.
pub fn group_rows(table: &Table, key_column: &str) -> Result<Vec<Group>, ReportError> {
    let key_col = table
        .column_index(key_column)
        .ok_or_else(|| ReportError::missing_column(key_column, &table.columns))?;

    let mut groups: Vec<Group> = Vec::new();
    let mut index_by_key: FxHashMap<String, usize> = FxHashMap::default();
    let mut skipped = 0usize;

    for (row_idx, row) in table.rows.iter().enumerate() {
        let key = row[key_col].display_value();
        let key = key.trim();
        if key.is_empty() {
            skipped += 1;
            continue;
        }

        match index_by_key.get(key) {
            Some(&group_idx) => groups[group_idx].row_indices.push(row_idx),
            None => {
                index_by_key.insert(key.to_string(), groups.len());
                groups.push(Group {
                    key: key.to_string(),
                    row_indices: vec![row_idx],
                });
            }
        }
    }

    if skipped > 0 {
        debug!(
            "dropped {} row(s) with blank '{}' key",
            skipped, key_column
        );
    }

    Ok(groups)
}

/// Sorts groups ascending by the numeric value of their key; keys that do
/// not parse as numbers rank as +infinity and therefore sort last. The sort
/// is stable, so ties (and all non-numeric keys) keep first-seen order.
pub fn sort_groups_by_min_key(groups: &mut [Group]) {
    groups.sort_by(|a, b| {
        let ka = parse_number(&a.key).unwrap_or(f64::INFINITY);
        let kb = parse_number(&b.key).unwrap_or(f64::INFINITY);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });
}
