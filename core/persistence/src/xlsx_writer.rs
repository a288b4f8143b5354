//! FILENAME: core/persistence/src/xlsx_writer.rs
//! Writes a table (or a group's slice of it) to an XLSX workbook, used for
//! the optional per-group workbook export alongside the rendered pages.

use crate::PersistenceError;
use engine::{Table, Value};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;

/// Writes the whole table to a single-sheet workbook.
pub fn save_table_xlsx(table: &Table, path: &Path) -> Result<(), PersistenceError> {
    let all: Vec<usize> = (0..table.row_count()).collect();
    save_rows_xlsx(table, &all, path)
}

/// Writes the header row plus the selected data rows (a group's
/// `row_indices`) to a single-sheet workbook.
pub fn save_rows_xlsx(
    table: &Table,
    row_indices: &[usize],
    path: &Path,
) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();

    let header_format = Format::new().set_bold();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (out_row, &src_row) in row_indices.iter().enumerate() {
        let row = (out_row + 1) as u32;
        for col in 0..table.column_count() {
            match table.value_at(src_row, col) {
                Value::Empty => {}
                Value::Number(n) => {
                    worksheet.write_number(row, col as u16, *n)?;
                }
                Value::Text(s) => {
                    worksheet.write_string(row, col as u16, s)?;
                }
                Value::Boolean(b) => {
                    worksheet.write_boolean(row, col as u16, *b)?;
                }
            }
        }
    }

    xlsx.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_reader::load_xlsx;

    fn sample_table() -> Table {
        let mut table = Table::new(vec![
            "Serial".to_string(),
            "Part Name".to_string(),
            "Amount".to_string(),
        ]);
        table.push_row(vec![
            Value::Text("A1".to_string()),
            Value::Text("Widget".to_string()),
            Value::Number(10.5),
        ]);
        table.push_row(vec![
            Value::Text("A2".to_string()),
            Value::Empty,
            Value::Number(3.0),
        ]);
        table.push_row(vec![
            Value::Text("B1".to_string()),
            Value::Text("Flange".to_string()),
            Value::Number(7.25),
        ]);
        table
    }

    #[test]
    fn test_round_trip_whole_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let table = sample_table();
        save_table_xlsx(&table, &path).unwrap();

        let loaded = load_xlsx(&path).unwrap();
        assert_eq!(loaded.columns, table.columns);
        assert_eq!(loaded.row_count(), 3);
        assert_eq!(loaded.value_at(0, 2), &Value::Number(10.5));
        assert_eq!(loaded.value_at(2, 1), &Value::Text("Flange".to_string()));
    }

    #[test]
    fn test_group_slice_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("group.xlsx");

        let table = sample_table();
        // Rows 0 and 1 form the "A" group.
        save_rows_xlsx(&table, &[0, 1], &path).unwrap();

        let loaded = load_xlsx(&path).unwrap();
        assert_eq!(loaded.row_count(), 2);
        assert_eq!(loaded.value_at(0, 0), &Value::Text("A1".to_string()));
        assert_eq!(loaded.value_at(1, 0), &Value::Text("A2".to_string()));
    }
}
