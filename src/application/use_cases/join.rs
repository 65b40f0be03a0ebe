// ============================================================
// RECORD JOINER
// ============================================================
// Inner join of the case and label tables on the case identifier

use std::collections::HashMap;

use crate::domain::error::{AppError, Result};
use crate::domain::Table;

/// Inner join `cases` with `labels` on `key`.
///
/// Keys are compared as trimmed strings. Rows whose key appears in only
/// one table are silently dropped; duplicate keys fan out pairwise.
/// Output columns are the case columns followed by the label columns
/// minus the duplicated key. Non-key column names must be disjoint
/// between the two tables.
pub fn inner_join(cases: &Table, labels: &Table, key: &str) -> Result<Table> {
    if !cases.has_column(key) {
        return Err(AppError::ValidationError(format!(
            "case table is missing join column '{}'",
            key
        )));
    }
    if !labels.has_column(key) {
        return Err(AppError::ValidationError(format!(
            "label table is missing join column '{}'",
            key
        )));
    }

    let collisions: Vec<&str> = labels
        .headers()
        .iter()
        .filter(|name| name.as_str() != key && cases.has_column(name))
        .map(String::as_str)
        .collect();
    if !collisions.is_empty() {
        return Err(AppError::ValidationError(format!(
            "case and label tables share non-key columns: {}",
            collisions.join(", ")
        )));
    }

    let label_key_idx = labels.column(key).unwrap_or_default();

    // Key -> label row indices, preserving label order for fan-out.
    let mut by_key: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, row) in labels.rows().iter().enumerate() {
        if let Some(value) = labels.get(row, key) {
            by_key.entry(value.trim()).or_default().push(idx);
        }
    }

    let mut headers: Vec<String> = cases.headers().to_vec();
    headers.extend(
        labels
            .headers()
            .iter()
            .filter(|name| name.as_str() != key)
            .cloned(),
    );

    let mut rows = Vec::new();
    for case_row in cases.rows() {
        let Some(case_key) = cases.get(case_row, key) else {
            continue;
        };

        let Some(matches) = by_key.get(case_key.trim()) else {
            continue;
        };

        for &label_idx in matches {
            let label_row = &labels.rows()[label_idx];
            let mut merged = case_row.clone();
            for (idx, cell) in label_row.iter().enumerate() {
                if idx != label_key_idx {
                    merged.push(cell.clone());
                }
            }
            rows.push(merged);
        }
    }

    Ok(Table::new(headers, rows))
}
