//! Single-pass pipeline: parse → patch → reset.

use std::path::Path;

use baseliner_core::config::BaselinerConfig;
use baseliner_core::errors::{BaselineError, RunResult};

use crate::parser::parse_baseline;
use crate::patcher::{patch_file, provider_dir};
use crate::report::PatchReport;
use crate::reset::reset_baseline;

/// Run one full patch pass against a repository root.
///
/// Best-effort and non-transactional: a patch failure aborts the run,
/// leaving files already written in place and the baseline intact. The
/// baseline is truncated only after every file has been patched, so an
/// empty or noise-only baseline still ends the run truncated.
pub fn run(root: &Path, config: &BaselinerConfig) -> RunResult<PatchReport> {
    let baseline_path = root.join(config.baseline.effective_file_name());
    let text =
        std::fs::read_to_string(&baseline_path).map_err(|source| BaselineError::Read {
            path: baseline_path.display().to_string(),
            source,
        })?;

    let (records, parse) = parse_baseline(&text, &config.patch);
    tracing::info!(
        records = parse.records,
        skipped = parse.skipped(),
        "parsed baseline"
    );

    let mut report = PatchReport::new(parse);
    for (provider, files) in records.providers() {
        let dir = provider_dir(root, &config.patch, provider);
        for (identifier, file_records) in files {
            let patch = patch_file(&dir.join(identifier), provider, file_records)?;
            tracing::info!(
                file = %patch.path,
                records = patch.records_applied,
                inserted = patch.lines_inserted,
                removed = patch.lines_removed,
                "patched"
            );
            report.files.push(patch);
        }
    }

    reset_baseline(&baseline_path)?;
    report.baseline_reset = true;

    Ok(report)
}
