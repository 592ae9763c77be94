//! Layered configuration, resolved once per run.

pub mod baseline_config;
pub mod baseliner_config;
pub mod patch_config;

pub use baseline_config::BaselineConfig;
pub use baseliner_config::{BaselinerConfig, CliOverrides};
pub use patch_config::PatchConfig;
