//! FILENAME: core/report-engine/src/summary.rs
//! Summary Row Builder - computes the synthetic total row(s) for a group.
//!
//! The amount column is summed in integer cents so currency totals come out
//! exact; values that fail to parse contribute 0 (a silent-recovery policy:
//! it keeps dirty sheets processable but can mask data-quality issues, so
//! each coercion is logged at debug level). Carry columns take the value of
//! the LAST record in the group - "the final reference number seen for this
//! batch" - and always-blank columns override carries.

use engine::{
    number_format::{format_cents, parse_number, to_cents},
    Table,
};
use log::debug;

use crate::definition::{SummaryColumns, TotalStrategy};
use crate::grouping::Group;

/// Label text placed in the label column of the plain total row.
pub const TOTAL_LABEL: &str = "Total";

/// Label text for the tax-inclusive row of the annexure variant.
pub const TAX_INCLUSIVE_LABEL: &str = "Total (incl. tax)";

/// Column indices resolved once per run for summary construction.
#[derive(Debug, Clone)]
pub struct ResolvedSummary {
    pub amount_col: usize,
    pub label_col: usize,
    /// (column index) pairs for carry columns present in the table;
    /// configured names absent from the table are skipped silently.
    pub carry_cols: Vec<usize>,
    pub always_blank_cols: Vec<usize>,
}

impl ResolvedSummary {
    /// Resolves configured column names against the table's column set.
    /// Amount and label are required; carry and always-blank names that are
    /// missing are ignored, matching the tolerant behavior expected of
    /// loosely-conforming source sheets.
    pub fn resolve(table: &Table, columns: &SummaryColumns) -> Option<Self> {
        let amount_col = table.column_index(&columns.amount_column)?;
        let label_col = table.column_index(&columns.label_column)?;

        let carry_cols = columns
            .carry_columns
            .iter()
            .filter_map(|name| table.column_index(name))
            .collect();
        let always_blank_cols = columns
            .always_blank_columns
            .iter()
            .filter_map(|name| table.column_index(name))
            .collect();

        Some(ResolvedSummary {
            amount_col,
            label_col,
            carry_cols,
            always_blank_cols,
        })
    }
}

/// Sums the amount column across a group, in cents. Unparseable and blank
/// values contribute 0.
pub fn sum_amount_cents(table: &Table, group: &Group, amount_col: usize) -> i64 {
    let mut total = 0i64;
    for &row in &group.row_indices {
        let value = table.value_at(row, amount_col);
        match value {
            engine::Value::Number(n) => total += to_cents(*n),
            other => {
                let text = other.display_value();
                match parse_number(&text) {
                    Some(n) => total += to_cents(n),
                    None => {
                        if !text.trim().is_empty() {
                            debug!(
                                "amount value '{}' in group '{}' is not numeric; counted as 0",
                                text, group.key
                            );
                        }
                    }
                }
            }
        }
    }
    total
}

/// Builds the total row(s) for one group as display strings, one entry per
/// table column. The plain strategy yields a single row; the tax-inclusive
/// strategy appends a second row carrying the grossed-up figure.
pub fn build_total_rows(
    table: &Table,
    group: &Group,
    resolved: &ResolvedSummary,
    strategy: TotalStrategy,
) -> Vec<Vec<String>> {
    let total_cents = sum_amount_cents(table, group, resolved.amount_col);

    let mut rows = vec![total_row(table, group, resolved, TOTAL_LABEL, total_cents)];

    if let TotalStrategy::TaxInclusive { rate_percent } = strategy {
        let tax_cents = ((total_cents as f64) * rate_percent / 100.0).round() as i64;
        let gross = total_cents + tax_cents;
        // The tax-inclusive row shows only label and figure; no carries.
        let mut row = vec![String::new(); table.column_count()];
        row[resolved.label_col] = TAX_INCLUSIVE_LABEL.to_string();
        row[resolved.amount_col] = format_cents(gross);
        rows.push(row);
    }

    rows
}

fn total_row(
    table: &Table,
    group: &Group,
    resolved: &ResolvedSummary,
    label: &str,
    total_cents: i64,
) -> Vec<String> {
    let mut row = vec![String::new(); table.column_count()];

    // Carry-forward columns take the LAST record's value.
    if let Some(&last) = group.row_indices.last() {
        for &col in &resolved.carry_cols {
            row[col] = table.value_at(last, col).display_value();
        }
    }

    row[resolved.label_col] = label.to_string();
    row[resolved.amount_col] = format_cents(total_cents);

    // Always-blank columns win over any carry rule.
    for &col in &resolved.always_blank_cols {
        if col != resolved.label_col && col != resolved.amount_col {
            row[col] = String::new();
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SummaryColumns;
    use crate::grouping::group_rows;
    use engine::{Table, Value};

    fn sample_table() -> Table {
        let mut table = Table::new(vec![
            "Serial".to_string(),
            "In-Bound #".to_string(),
            "Plant".to_string(),
            "GR No.".to_string(),
            "Amount (PKR)".to_string(),
        ]);
        table.push_row(vec![
            Value::from("001"),
            Value::from("R1"),
            Value::from("P-7"),
            Value::from("G1"),
            Value::from("10.00"),
        ]);
        table.push_row(vec![
            Value::from("001"),
            Value::from("R2"),
            Value::from("P-7"),
            Value::from("G2"),
            Value::from("bad"),
        ]);
        table.push_row(vec![
            Value::from("001"),
            Value::from("R3"),
            Value::from("P-8"),
            Value::from("G3"),
            Value::Number(5.5),
        ]);
        table
    }

    fn resolved(table: &Table, columns: &SummaryColumns) -> ResolvedSummary {
        ResolvedSummary::resolve(table, columns).unwrap()
    }

    #[test]
    fn test_sum_treats_unparseable_as_zero() {
        let table = sample_table();
        let groups = group_rows(&table, "Serial").unwrap();
        let cols = SummaryColumns::new("Amount (PKR)", "GR No.");
        let r = resolved(&table, &cols);

        assert_eq!(sum_amount_cents(&table, &groups[0], r.amount_col), 1550);
    }

    #[test]
    fn test_total_row_shape() {
        let table = sample_table();
        let groups = group_rows(&table, "Serial").unwrap();
        let mut cols = SummaryColumns::new("Amount (PKR)", "GR No.");
        cols.carry_columns = vec!["In-Bound #".to_string()];
        let r = resolved(&table, &cols);

        let rows = build_total_rows(&table, &groups[0], &r, TotalStrategy::Plain);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];

        assert_eq!(row[1], "R3"); // carry = last record, not first
        assert_eq!(row[3], "Total");
        assert_eq!(row[4], "15.50");
        assert_eq!(row[0], ""); // untouched columns stay blank
        assert_eq!(row[2], "");
    }

    #[test]
    fn test_always_blank_overrides_carry() {
        let table = sample_table();
        let groups = group_rows(&table, "Serial").unwrap();
        let mut cols = SummaryColumns::new("Amount (PKR)", "GR No.");
        cols.carry_columns = vec!["In-Bound #".to_string(), "Plant".to_string()];
        cols.always_blank_columns = vec!["Plant".to_string()];
        let r = resolved(&table, &cols);

        let rows = build_total_rows(&table, &groups[0], &r, TotalStrategy::Plain);
        assert_eq!(rows[0][1], "R3");
        assert_eq!(rows[0][2], ""); // forced blank despite carry rule
    }

    #[test]
    fn test_missing_carry_column_is_ignored() {
        let table = sample_table();
        let mut cols = SummaryColumns::new("Amount (PKR)", "GR No.");
        cols.carry_columns = vec!["Does Not Exist".to_string()];
        let r = resolved(&table, &cols);
        assert!(r.carry_cols.is_empty());
    }

    #[test]
    fn test_tax_inclusive_adds_second_row() {
        let table = sample_table();
        let groups = group_rows(&table, "Serial").unwrap();
        let cols = SummaryColumns::new("Amount (PKR)", "GR No.");
        let r = resolved(&table, &cols);

        let rows = build_total_rows(
            &table,
            &groups[0],
            &r,
            TotalStrategy::TaxInclusive { rate_percent: 10.0 },
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][4], "15.50");
        assert_eq!(rows[1][3], "Total (incl. tax)");
        assert_eq!(rows[1][4], "17.05"); // 15.50 + 10%
        assert_eq!(rows[1][1], ""); // no carries on the gross row
    }

    #[test]
    fn test_resolve_fails_without_amount_column() {
        let table = Table::new(vec!["Serial".to_string()]);
        let cols = SummaryColumns::new("Amount", "Serial");
        assert!(ResolvedSummary::resolve(&table, &cols).is_none());
    }
}
