//! Report types and output formats for a patch run.

pub mod console;
pub mod json;

use serde::Serialize;

use crate::parser::ParseStats;
use crate::patcher::FilePatch;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Everything a patch run did.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub parse: ParseStats,
    pub files: Vec<FilePatch>,
    pub baseline_reset: bool,
}

impl PatchReport {
    pub fn new(parse: ParseStats) -> Self {
        Self {
            parse,
            files: Vec::new(),
            baseline_reset: false,
        }
    }

    /// Total records applied across all files.
    pub fn records_applied(&self) -> usize {
        self.files.iter().map(|f| f.records_applied).sum()
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &PatchReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}
