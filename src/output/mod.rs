//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// Any list of display rows renders as a table or as enveloped JSON
impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "TITLE")]
        title: String,
    }

    #[test]
    fn test_vec_formats_as_table() {
        let rows = vec![Row {
            id: 1,
            title: "Buy milk".to_string(),
        }];

        let out = rows.format(OutputFormat::Table).unwrap();
        assert!(out.contains("TITLE"));
        assert!(out.contains("Buy milk"));
    }

    #[test]
    fn test_vec_formats_as_json_envelope() {
        let rows = vec![Row {
            id: 1,
            title: "Buy milk".to_string(),
        }];

        let out = rows.format(OutputFormat::Json).unwrap();
        assert!(out.contains("\"data\""));
        assert!(out.contains("\"meta\""));
        assert!(out.contains("Buy milk"));
    }
}
