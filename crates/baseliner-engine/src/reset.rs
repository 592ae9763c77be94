//! Baseline resetter — records are consumed exactly once.

use std::fs::OpenOptions;
use std::path::Path;

use baseliner_core::errors::RunError;

/// Truncate the baseline file to zero length.
///
/// Idempotent: an already-empty file stays empty, and a missing file is
/// created empty rather than treated as an error.
pub fn reset_baseline(path: &Path) -> Result<(), RunError> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| RunError::Reset {
            path: path.display().to_string(),
            source,
        })
}
