//! Baseline file settings.

use serde::{Deserialize, Serialize};

/// Where the baseline file lives, relative to the repository root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaselineConfig {
    pub file_name: Option<String>,
}

impl BaselineConfig {
    pub const DEFAULT_FILE_NAME: &'static str = "QueryBaseline.txt";

    pub fn effective_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(Self::DEFAULT_FILE_NAME)
    }
}
