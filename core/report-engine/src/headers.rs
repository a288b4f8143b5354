//! FILENAME: core/report-engine/src/headers.rs
//! Header Mapper - translates raw column names to display names.
//!
//! Source spreadsheets are not guaranteed to match expectations exactly, so
//! lookup is tolerant of incidental leading/trailing whitespace and unknown
//! columns pass through unchanged rather than failing.

use std::collections::HashMap;

/// Maps each actual column name to its display label.
///
/// The lookup key is the whitespace-trimmed column name; on a miss the
/// ORIGINAL, untrimmed name passes through as-is. The caller's map is never
/// mutated.
pub fn map_headers(actual: &[String], canonical: &HashMap<String, String>) -> Vec<String> {
    actual
        .iter()
        .map(|name| match canonical.get(name.trim()) {
            Some(display) => display.clone(),
            None => name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("Del.Challan".to_string(), "Delivery Challan".to_string());
        map.insert("Quantity".to_string(), "Qty".to_string());
        map
    }

    #[test]
    fn test_mapped_name_is_used() {
        let actual = vec!["Del.Challan".to_string()];
        let mapped = map_headers(&actual, &sample_map());
        assert_eq!(mapped, vec!["Delivery Challan".to_string()]);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let actual = vec!["  Quantity ".to_string()];
        let mapped = map_headers(&actual, &sample_map());
        assert_eq!(mapped, vec!["Qty".to_string()]);
    }

    #[test]
    fn test_unknown_column_passes_through_unstripped() {
        let actual = vec![" GR No. ".to_string()];
        let mapped = map_headers(&actual, &sample_map());
        // Unknown columns keep their original, untrimmed spelling.
        assert_eq!(mapped, vec![" GR No. ".to_string()]);
    }

    #[test]
    fn test_caller_map_untouched() {
        let map = sample_map();
        let before = map.len();
        let _ = map_headers(&["Other".to_string()], &map);
        assert_eq!(map.len(), before);
    }
}
