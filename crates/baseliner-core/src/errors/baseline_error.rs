//! Baseline file errors.

use super::error_code::{self, BaselinerErrorCode};

/// Errors that can occur while reading the baseline file.
///
/// Malformed records are not errors: the parser skips and counts them.
#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    #[error("Failed to read baseline file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BaselinerErrorCode for BaselineError {
    fn error_code(&self) -> &'static str {
        error_code::BASELINE_ERROR
    }
}
