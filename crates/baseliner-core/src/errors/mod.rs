//! Error handling for the baseliner tool.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod baseline_error;
pub mod config_error;
pub mod error_code;
pub mod patch_error;
pub mod run_error;

pub use baseline_error::BaselineError;
pub use config_error::ConfigError;
pub use error_code::BaselinerErrorCode;
pub use patch_error::PatchError;
pub use run_error::{RunError, RunResult};
