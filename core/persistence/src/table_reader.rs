// FILENAME: core/persistence/src/table_reader.rs

use crate::PersistenceError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use engine::{number_format::parse_number, Table, Value};
use log::debug;
use std::path::Path;

/// Loads the first worksheet of an XLSX file into a Table. The first row
/// is the header row; remaining rows become data rows padded to the header
/// width.
pub fn load_xlsx(path: &Path) -> Result<Table, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| PersistenceError::InvalidFormat("Workbook contains no sheets".to_string()))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();

    let header = rows.next().ok_or_else(|| {
        PersistenceError::InvalidFormat(format!("Sheet '{}' has no header row", sheet_name))
    })?;

    let columns: Vec<String> = header.iter().map(cell_to_header).collect();
    let mut table = Table::new(columns);

    for row in rows {
        let values: Vec<Value> = row.iter().map(cell_to_value).collect();
        table.push_row(values);
    }

    debug!(
        "loaded {} row(s) x {} column(s) from {:?}",
        table.row_count(),
        table.column_count(),
        path
    );

    Ok(table)
}

/// Loads a CSV file into a Table. Fields that parse as plain numbers
/// become numeric values, empty fields become blanks, everything else
/// stays text.
pub fn load_csv(path: &Path) -> Result<Table, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut table = Table::new(columns);

    for record in reader.records() {
        let record = record?;
        let values: Vec<Value> = record.iter().map(field_to_value).collect();
        table.push_row(values);
    }

    Ok(table)
}

fn cell_to_header(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => cell_to_value(other).display_value(),
    }
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Empty,
        Data::String(s) => Value::Text(s.clone()),
        Data::Float(f) => Value::Number(*f),
        Data::Int(i) => Value::Number(*i as f64),
        Data::Bool(b) => Value::Boolean(*b),
        Data::Error(e) => Value::Text(format!("{:?}", e)),
        Data::DateTime(dt) => Value::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Value::Text(s.clone()),
        Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

fn field_to_value(field: &str) -> Value {
    if field.trim().is_empty() {
        return Value::Empty;
    }
    match parse_number(field) {
        Some(n) => Value::Number(n),
        None => Value::Text(field.to_string()),
    }
}
