// ============================================================
// JSONL WRITER
// ============================================================
// Newline-delimited JSON output, one object per line

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::error::{AppError, Result};

/// Write `items` to `path` as newline-delimited JSON, one object per
/// line with no trailing separators. The parent directory is created
/// if missing. Returns the number of lines written.
pub fn write_jsonl<T: Serialize>(path: &Path, items: &[T]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::IoError(format!("failed to create dir {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = fs::File::create(path)
        .map_err(|e| AppError::IoError(format!("failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    for item in items {
        let line = serde_json::to_string(item)
            .map_err(|e| AppError::Internal(format!("failed to serialize record: {}", e)))?;
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| {
                AppError::IoError(format!("failed to write {}: {}", path.display(), e))
            })?;
    }

    writer
        .flush()
        .map_err(|e| AppError::IoError(format!("failed to flush {}: {}", path.display(), e)))?;

    Ok(items.len())
}
