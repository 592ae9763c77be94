//! Top-level baseliner configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BaselineConfig, PatchConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI overrides (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BASELINER_*`)
/// 3. Project config (`baseliner.toml` in the repository root)
/// 4. User config (`~/.baseliner/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaselinerConfig {
    pub baseline: BaselineConfig,
    pub patch: PatchConfig,
}

/// Override arguments that can be applied on top of a loaded config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub baseline_file_name: Option<String>,
    pub test_dir: Option<String>,
}

impl BaselinerConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI overrides
    /// 2. Environment variables (`BASELINER_*`)
    /// 3. Project config (`baseliner.toml` in `root`)
    /// 4. User config (`~/.baseliner/config.toml`)
    /// 5. Compiled defaults
    pub fn load(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings,
                        // not fatal. Continue with defaults.
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("baseliner.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI overrides
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BaselinerConfig) -> Result<(), ConfigError> {
        if config.baseline.effective_file_name().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "baseline.file_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.patch.effective_test_dir().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "patch.test_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.patch.effective_project_prefix().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "patch.project_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.patch.effective_namespace_prefix_segments() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "patch.namespace_prefix_segments".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.baseliner/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BaselinerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let file_config: BaselinerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut BaselinerConfig, other: &BaselinerConfig) {
        // Baseline
        if other.baseline.file_name.is_some() {
            base.baseline.file_name = other.baseline.file_name.clone();
        }

        // Patch
        if other.patch.test_dir.is_some() {
            base.patch.test_dir = other.patch.test_dir.clone();
        }
        if other.patch.project_prefix.is_some() {
            base.patch.project_prefix = other.patch.project_prefix.clone();
        }
        if other.patch.namespace_prefix_segments.is_some() {
            base.patch.namespace_prefix_segments = other.patch.namespace_prefix_segments;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASELINER_BASELINE_FILE_NAME`, `BASELINER_PATCH_TEST_DIR`, etc.
    fn apply_env_overrides(config: &mut BaselinerConfig) {
        if let Ok(val) = std::env::var("BASELINER_BASELINE_FILE_NAME") {
            config.baseline.file_name = Some(val);
        }
        if let Ok(val) = std::env::var("BASELINER_PATCH_TEST_DIR") {
            config.patch.test_dir = Some(val);
        }
        if let Ok(val) = std::env::var("BASELINER_PATCH_PROJECT_PREFIX") {
            config.patch.project_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("BASELINER_PATCH_NAMESPACE_PREFIX_SEGMENTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.patch.namespace_prefix_segments = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BaselinerConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.baseline_file_name {
            config.baseline.file_name = Some(v.clone());
        }
        if let Some(ref v) = cli.test_dir {
            config.patch.test_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level baseliner config directory: `~/.baseliner/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".baseliner"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
