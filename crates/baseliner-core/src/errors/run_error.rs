//! Top-level pipeline errors.

use super::error_code::{self, BaselinerErrorCode};
use super::{BaselineError, ConfigError, PatchError};

/// Error for a full patch run. Wraps the subsystem errors and adds the
/// resetter's own failure mode.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Baseline(#[from] BaselineError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("Failed to truncate baseline file {path}: {source}")]
    Reset {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for pipeline results.
pub type RunResult<T> = Result<T, RunError>;

impl BaselinerErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            RunError::Config(e) => e.error_code(),
            RunError::Baseline(e) => e.error_code(),
            RunError::Patch(e) => e.error_code(),
            RunError::Reset { .. } => error_code::RUN_ERROR,
        }
    }
}
