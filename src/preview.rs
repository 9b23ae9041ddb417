//! Read-only preview of generated row data.
//!
//! The header comes from the key order of the first record; only the
//! first rows are shown as a sample, with the total count reported
//! separately since the backend usually generates more.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use serde_json::Value;

use crate::Row;

/// How many rows the preview shows.
pub const PREVIEW_ROWS: usize = 3;

/// A rendered preview: a sample table plus the total record count.
#[derive(Debug)]
pub struct DataPreview {
    pub table: Table,
    pub total_rows: usize,
}

/// Build a preview of the given rows. Empty input renders nothing.
pub fn preview(data: &[Row]) -> Option<DataPreview> {
    let first = data.first()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(first.keys().map(String::as_str));

    for row in data.iter().take(PREVIEW_ROWS) {
        // Values aligned positionally to the header keys.
        table.add_row(first.keys().map(|key| match row.get(key) {
            Some(value) => cell_text(value),
            None => String::new(),
        }));
    }

    Some(DataPreview {
        table,
        total_rows: data.len(),
    })
}

/// Stringify a cell the way the backend coerces cell values: strings
/// verbatim, nulls empty, everything else in JSON form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(raw: &str) -> Vec<Row> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_empty_data_renders_nothing() {
        assert!(preview(&[]).is_none());
    }

    #[test]
    fn test_caps_body_at_three_rows_and_reports_total() {
        let data = rows(r#"[{"a":1,"b":2},{"a":3,"b":4},{"a":5,"b":6},{"a":7,"b":8}]"#);
        let preview = preview(&data).unwrap();

        assert_eq!(preview.total_rows, 4);
        assert_eq!(preview.table.row_iter().count(), 3);
        assert_eq!(preview.table.header().unwrap().cell_count(), 2);

        let rendered = preview.table.to_string();
        assert!(rendered.contains('a') && rendered.contains('b'));
        assert!(rendered.contains('5'));
        assert!(!rendered.contains('7'));
    }

    #[test]
    fn test_header_follows_first_record_key_order() {
        let data = rows(r#"[{"Task":"Plan","Due":"2024-05-01","Done":false}]"#);
        let preview = preview(&data).unwrap();
        let header: Vec<String> = preview
            .table
            .header()
            .unwrap()
            .cell_iter()
            .map(|c| c.content())
            .collect();

        assert_eq!(header, ["Task", "Due", "Done"]);
    }

    #[test]
    fn test_cell_text_coercion() {
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!("plain")), "plain");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(true)), "true");
    }
}
