// ============================================================
// TABLE TYPES
// ============================================================
// Dynamic tabular records with by-name column access

use std::collections::HashMap;

/// An in-memory table of string cells with named columns.
///
/// Cells are stored verbatim; a cell whose trimmed value is empty is
/// treated as null by [`Table::get`]. Column lookup goes through a
/// header index built once at construction.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    ///
    /// When two columns share a name, the first occurrence wins for
    /// by-name access.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            index.entry(name.clone()).or_insert(idx);
        }

        Self { headers, index, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Non-null value of a named column in the given row.
    ///
    /// Returns `None` when the column is missing, the row is short, or
    /// the cell is empty after trimming.
    pub fn get<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        let idx = self.column(name)?;
        let value = row.get(idx)?;

        if value.trim().is_empty() {
            None
        } else {
            Some(value.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["case_id".to_string(), "source".to_string(), "year".to_string()],
            vec![
                vec!["001".to_string(), "app".to_string(), "2023".to_string()],
                vec!["002".to_string(), "  ".to_string(), String::new()],
            ],
        )
    }

    #[test]
    fn test_column_lookup() {
        let table = sample_table();

        assert_eq!(table.column("case_id"), Some(0));
        assert_eq!(table.column("year"), Some(2));
        assert_eq!(table.column("missing"), None);
        assert!(table.has_column("source"));
    }

    #[test]
    fn test_blank_cells_are_null() {
        let table = sample_table();
        let rows = table.rows();

        assert_eq!(table.get(&rows[0], "source"), Some("app"));
        assert_eq!(table.get(&rows[1], "source"), None);
        assert_eq!(table.get(&rows[1], "year"), None);
        assert_eq!(table.get(&rows[1], "case_id"), Some("002"));
    }

    #[test]
    fn test_short_rows_are_null() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string()]],
        );
        let rows = table.rows();

        assert_eq!(table.get(&rows[0], "a"), Some("1"));
        assert_eq!(table.get(&rows[0], "b"), None);
    }
}
