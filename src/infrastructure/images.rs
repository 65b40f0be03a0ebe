// ============================================================
// IMAGE COPIER
// ============================================================
// Copies referenced images into the output directory

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::error::{AppError, Result};

/// Counters for one copy batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    pub copied: usize,
    pub failed: usize,
}

/// Copy every referenced image from `<dataset_root>/<relative>` to
/// `<target_dir>/<basename>`.
///
/// The target directory is created if missing. Same-basename
/// collisions are last-writer-wins. Individual failures are logged
/// with both paths and counted, never aborting the batch.
pub fn copy_images<'a, I>(paths: I, dataset_root: &Path, target_dir: &Path) -> Result<CopyOutcome>
where
    I: IntoIterator<Item = &'a str>,
{
    fs::create_dir_all(target_dir).map_err(|e| {
        AppError::IoError(format!(
            "failed to create image dir {}: {}",
            target_dir.display(),
            e
        ))
    })?;

    let mut outcome = CopyOutcome::default();

    for relative in paths {
        let source = dataset_root.join(relative);

        let Some(name) = source.file_name() else {
            warn!(path = relative, "image path has no file name, skipping");
            outcome.failed += 1;
            continue;
        };
        let target = target_dir.join(name);

        match fs::copy(&source, &target) {
            Ok(_) => outcome.copied += 1,
            Err(error) => {
                warn!(
                    source = %source.display(),
                    target = %target.display(),
                    error = %error,
                    "failed to copy image, skipping"
                );
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

/// Log the files directly under `directory` at debug level.
pub fn log_directory_contents(directory: &Path) {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(directory = %directory.display(), error = %error, "cannot list directory");
            return;
        }
    };

    for entry in entries.flatten() {
        if entry.path().is_file() {
            debug!(file = %entry.path().display(), "dataset file");
        }
    }
}
