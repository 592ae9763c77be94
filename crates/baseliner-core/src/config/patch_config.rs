//! Target-file resolution settings.

use serde::{Deserialize, Serialize};

/// How recorded test names map onto the repository layout:
/// `<root>/<test_dir>/<project_prefix>.<Provider>.FunctionalTests/<identifier>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatchConfig {
    /// Directory under the repository root holding the functional test
    /// projects.
    pub test_dir: Option<String>,

    /// Project name prefix in `<prefix>.<Provider>.FunctionalTests`.
    pub project_prefix: Option<String>,

    /// Leading dotted-name segments (the root namespace) stripped before
    /// the remaining segments become the file path. Must be at least 1.
    pub namespace_prefix_segments: Option<usize>,
}

impl PatchConfig {
    pub fn effective_test_dir(&self) -> &str {
        self.test_dir.as_deref().unwrap_or("test")
    }

    pub fn effective_project_prefix(&self) -> &str {
        self.project_prefix.as_deref().unwrap_or("EFCore")
    }

    pub fn effective_namespace_prefix_segments(&self) -> usize {
        self.namespace_prefix_segments.unwrap_or(2)
    }
}
