//! File patching errors.

use super::error_code::{self, BaselinerErrorCode};

/// Errors that can occur while splicing recorded lines into a target file.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The recorded line number (adjusted by the running offset) falls
    /// outside the target file.
    #[error("Recorded line {line} falls outside {file} ({line_count} lines)")]
    LineOutOfRange {
        file: String,
        line: u32,
        line_count: usize,
    },

    /// No closing-brace-only line exists at or above the recorded
    /// insertion point.
    #[error("No closing-brace anchor at or above line {line} in {file}")]
    AnchorNotFound { file: String, line: u32 },
}

impl BaselinerErrorCode for PatchError {
    fn error_code(&self) -> &'static str {
        error_code::PATCH_ERROR
    }
}
