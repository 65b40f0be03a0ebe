// ============================================================
// CSV TABLE READER
// ============================================================
// Parse CSV files into tables with encoding fallback

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::error::{AppError, Result};
use crate::domain::Table;

/// CSV reader producing [`Table`] values.
pub struct CsvTableReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from headers and values
    trim: bool,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read and parse a CSV file.
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let content = read_with_encoding_fallback(path)?;

        self.parse_content(&content).map_err(|e| {
            AppError::ParseError(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse CSV content from a string.
    pub fn parse_content(&self, content: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("failed to parse CSV row {}: {}", index + 1, e))
            })?;

            // Pad short records so every row has one cell per header.
            let row: Vec<String> = (0..headers.len())
                .map(|idx| record.get(idx).unwrap_or("").to_string())
                .collect();
            rows.push(row);
        }

        Ok(Table::new(headers, rows))
    }
}

/// Read a file as UTF-8, falling back to Windows-1252 for legacy
/// exports, and lossy replacement as a last resort.
fn read_with_encoding_fallback(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::IoError(format!("failed to read {}: {}", path.display(), e)))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_csv() {
        let content = "case_id,source\n001,app\n002,clinic";
        let table = CsvTableReader::new().parse_content(content).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.headers(), &["case_id", "source"]);
        assert_eq!(table.get(&table.rows()[0], "source"), Some("app"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let content = "case_id,source\n 001 , app ";
        let table = CsvTableReader::new().parse_content(content).unwrap();

        assert_eq!(table.get(&table.rows()[0], "case_id"), Some("001"));
    }

    #[test]
    fn test_short_rows_padded() {
        let content = "case_id,source,year\n001,app";
        let table = CsvTableReader::new().parse_content(content).unwrap();

        assert_eq!(table.get(&table.rows()[0], "year"), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let content = "case_id;source\n001;app";
        let table = CsvTableReader::new()
            .with_delimiter(b';')
            .parse_content(content)
            .unwrap();

        assert_eq!(table.get(&table.rows()[0], "source"), Some("app"));
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let content = "case_id,labels\n001,\"['a, b']\"";
        let table = CsvTableReader::new().parse_content(content).unwrap();

        assert_eq!(table.get(&table.rows()[0], "labels"), Some("['a, b']"));
    }

    #[test]
    fn test_windows_1252_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        let mut file = fs::File::create(&path).unwrap();
        // "café" with an 0xE9 Latin-1 e-acute, invalid as UTF-8.
        file.write_all(b"case_id,source\n001,caf\xe9").unwrap();
        drop(file);

        let table = CsvTableReader::new().read_table(&path).unwrap();
        assert_eq!(table.get(&table.rows()[0], "source"), Some("café"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CsvTableReader::new().read_table(Path::new("/nonexistent/input.csv"));
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
