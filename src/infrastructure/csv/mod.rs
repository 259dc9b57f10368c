// ============================================================
// CSV REPORT WRITER
// ============================================================
// Serializes a table to a CSV file: header row from the declared
// columns, then every row rendered in column order.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::domain::error::Result;
use crate::domain::Table;

pub struct ReportWriter {
    directory: PathBuf,
}

impl ReportWriter {
    /// Reports land in `directory`; it is created on first use.
    pub fn new(directory: &str) -> Self {
        Self {
            directory: PathBuf::from(directory),
        }
    }

    /// Write `table` as `<filename>.csv` and return the full path.
    pub fn write(&self, table: &Table, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(format!("{}.csv", sanitize(filename)));

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(table.column_names())?;
        for record in table.to_records() {
            writer.write_record(&record)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = table.len(), "Report written");
        Ok(path)
    }
}

/// Path separators and other characters invalid in file names are
/// replaced with underscores.
fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnType, Value};
    use std::env;

    fn sample_table() -> Table {
        let mut table = Table::new();
        table.add_column("REF", ColumnType::Text);
        table.add_column("pageviews", ColumnType::Integer);
        table
            .append_values(vec![Value::from("aeb1434b"), Value::from(12_i64)])
            .unwrap();
        table
    }

    fn temp_directory(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("readtrack-csv-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_write_emits_header_and_rows() {
        let dir = temp_directory("basic");
        let writer = ReportWriter::new(dir.to_str().unwrap());
        let path = writer.write(&sample_table(), "weekly").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("REF,pageviews"));
        assert_eq!(lines.next(), Some("aeb1434b,12"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_filename_is_sanitized() {
        let dir = temp_directory("sanitize");
        let writer = ReportWriter::new(dir.to_str().unwrap());
        let path = writer
            .write(&sample_table(), "weekly 2024-01-01_to_2024-01-07?")
            .unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .ends_with("2024-01-07_.csv"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize("plain-name"), "plain-name");
    }
}
