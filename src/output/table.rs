//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TaskRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "TITLE")]
        title: String,
        #[tabled(rename = "STATUS")]
        status: String,
    }

    fn row(id: i64, title: &str, status: &str) -> TaskRow {
        TaskRow {
            id,
            title: title.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TaskRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_renders_headers_and_cells() {
        let result = format_table(&[row(1, "Buy milk", "To Do")]);

        assert!(result.contains("ID"));
        assert!(result.contains("TITLE"));
        assert!(result.contains("Buy milk"));
        assert!(result.contains("To Do"));
    }

    #[test]
    fn test_format_table_multiple_rows() {
        let result = format_table(&[
            row(1, "Buy milk", "To Do"),
            row(2, "Pay rent", "Done"),
        ]);

        assert!(result.contains("Buy milk"));
        assert!(result.contains("Pay rent"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&[row(1, "Buy milk", "To Do")]);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
