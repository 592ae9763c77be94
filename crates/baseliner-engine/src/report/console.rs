//! Console reporter — human-readable output.

use super::{PatchReport, Reporter};

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn dim(&self) -> &'static str {
        if self.use_color {
            "\x1b[90m"
        } else {
            ""
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &PatchReport) -> Result<String, String> {
        let mut output = String::new();

        for file in &report.files {
            output.push_str(&format!(
                "✓ {} — {} record(s), +{} −{}\n",
                file.path, file.records_applied, file.lines_inserted, file.lines_removed
            ));
        }

        let skipped = report.parse.skipped();
        output.push_str(&format!(
            "─── {} file(s) patched, {} record(s) applied, {} block(s) skipped ───\n",
            report.files.len(),
            report.records_applied(),
            skipped
        ));
        if skipped > 0 {
            output.push_str(&format!(
                "{}skipped: {} malformed header, {} empty line number, {} unknown provider{}\n",
                self.dim(),
                report.parse.skipped_malformed_header,
                report.parse.skipped_empty_line_number,
                report.parse.skipped_unknown_provider,
                self.color_end()
            ));
        }
        output.push_str(if report.baseline_reset {
            "Baseline truncated ✓\n"
        } else {
            "Baseline NOT truncated ✗\n"
        });

        Ok(output)
    }
}
