//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the shared report types.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod number_format;
pub mod style;
pub mod table;

// Re-export commonly used types at the crate root
pub use number_format::{
    format_cents, format_decimal, format_general, parse_number, to_cents,
};
pub use style::{
    BorderLineStyle, BorderStyle, Borders, CellStyle, Color, FontStyle, NumberFormat,
    StyleRegistry, TextAlign,
};
pub use table::{Table, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_tables() {
        let mut table = Table::new(vec!["Serial".to_string(), "Amount".to_string()]);
        table.push_row(vec![Value::Text("001".to_string()), Value::Number(10.0)]);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_index("Amount"), Some(1));
        assert_eq!(table.value_at(0, 1), &Value::Number(10.0));
    }

    #[test]
    fn integration_test_styled_amount() {
        let mut registry = StyleRegistry::new();
        let style = CellStyle::new()
            .with_bold(true)
            .with_text_align(TextAlign::Right)
            .with_number_format(NumberFormat::Number {
                decimal_places: 2,
                use_thousands_separator: true,
            });

        let idx = registry.get_or_create(style);
        let retrieved = registry.get(idx);
        assert!(retrieved.font.bold);

        let formatted = format_decimal(12345.0, 2, true);
        assert_eq!(formatted, "12,345.00");
    }
}
