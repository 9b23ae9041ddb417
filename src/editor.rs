//! Editable column-table model.
//!
//! Holds the column rows the user sees and edits: one row per column,
//! each a title plus a type tag. Edits happen against the rows; the
//! in-memory column list is only re-derived from the rows by
//! [`ColumnEditor::columns`] immediately before a push, which is the
//! single path by which manual edits reach the pushed payload.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};

use crate::column::{Column, ColumnType};

/// The editable column table.
#[derive(Debug, Clone, Default)]
pub struct ColumnEditor {
    rows: Vec<Column>,
}

impl ColumnEditor {
    /// Build the table from a generated column list, one row per column.
    pub fn from_columns(columns: &[Column]) -> Self {
        Self {
            rows: columns.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Column> {
        self.rows.get(index)
    }

    /// Append a blank row: empty title, first type tag pre-selected.
    pub fn add_empty(&mut self) {
        self.rows.push(Column::new("", ColumnType::default()));
    }

    /// Remove exactly one row. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn set_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.title = title.into();
        }
    }

    pub fn set_type(&mut self, index: usize, column_type: ColumnType) {
        if let Some(row) = self.rows.get_mut(index) {
            row.column_type = column_type;
        }
    }

    /// Read the column list back from the current row values, in row
    /// order, titles and types taken verbatim.
    pub fn columns(&self) -> Vec<Column> {
        self.rows.clone()
    }

    /// Render the rows as a table for display.
    pub fn render(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_header(vec!["#", "Title", "Type"]);

        for (i, row) in self.rows.iter().enumerate() {
            let title = if row.title.is_empty() {
                "(untitled)"
            } else {
                row.title.as_str()
            };
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(title),
                Cell::new(row.column_type),
            ]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Column> {
        vec![
            Column::new("Task", ColumnType::TextNumber),
            Column::new("Due", ColumnType::Date),
            Column::new("Done", ColumnType::Checkbox),
        ]
    }

    #[test]
    fn test_one_row_per_column() {
        let editor = ColumnEditor::from_columns(&sample());

        assert_eq!(editor.len(), 3);
        assert_eq!(editor.row(1).unwrap().title, "Due");
        assert_eq!(editor.row(1).unwrap().column_type, ColumnType::Date);
    }

    #[test]
    fn test_remove_keeps_other_rows_intact() {
        let mut editor = ColumnEditor::from_columns(&sample());
        editor.remove(1);

        assert_eq!(editor.len(), 2);
        assert_eq!(editor.row(0).unwrap().title, "Task");
        assert_eq!(editor.row(1).unwrap().title, "Done");
        assert_eq!(editor.row(1).unwrap().column_type, ColumnType::Checkbox);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut editor = ColumnEditor::from_columns(&sample());
        editor.remove(3);
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_add_empty_defaults() {
        let mut editor = ColumnEditor::default();
        editor.add_empty();

        assert_eq!(editor.len(), 1);
        assert_eq!(editor.row(0).unwrap().title, "");
        assert_eq!(editor.row(0).unwrap().column_type, ColumnType::TextNumber);
    }

    #[test]
    fn test_columns_reads_back_edited_values() {
        let mut editor = ColumnEditor::from_columns(&sample());
        editor.remove(2);
        editor.remove(0);
        editor.set_title(0, "Foo");
        editor.set_type(0, ColumnType::Date);

        assert_eq!(editor.columns(), vec![Column::new("Foo", ColumnType::Date)]);
    }

    #[test]
    fn test_render_lists_every_row() {
        let editor = ColumnEditor::from_columns(&sample());
        let rendered = editor.render().to_string();

        assert!(rendered.contains("Task"));
        assert!(rendered.contains("CHECKBOX"));
        assert_eq!(rendered.matches("DATE").count(), 1);
    }
}
