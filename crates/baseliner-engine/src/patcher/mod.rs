//! Test-file patcher — splices recorded lines above their brace anchor.

pub mod anchor;

use std::path::{Path, PathBuf};

use baseliner_core::config::PatchConfig;
use baseliner_core::errors::PatchError;
use baseliner_core::types::{FileRecords, Provider};
use serde::Serialize;

use self::anchor::find_anchor;

/// What happened to one target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePatch {
    pub provider: Provider,
    pub path: String,
    pub records_applied: usize,
    pub lines_inserted: usize,
    pub lines_removed: usize,
}

/// Resolve the functional-test project directory for a provider.
pub fn provider_dir(root: &Path, config: &PatchConfig, provider: Provider) -> PathBuf {
    root.join(config.effective_test_dir()).join(format!(
        "{}.{}.FunctionalTests",
        config.effective_project_prefix(),
        provider.dir_name()
    ))
}

/// Apply every record for one target file, ascending by recorded line
/// number, then rewrite the file in a single overwrite.
///
/// The recorded insertion point may have drifted since capture: lines
/// between the nearest preceding closing-brace anchor and the recorded
/// index are discarded before the body is spliced in above the anchor.
/// The running offset tracks both deletions and insertions so later
/// records for the same file land where they were recorded.
pub fn patch_file(
    path: &Path,
    provider: Provider,
    records: &FileRecords,
) -> Result<FilePatch, PatchError> {
    let display_path = path.display().to_string();

    let text = std::fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: display_path.clone(),
        source,
    })?;
    let had_final_newline = text.ends_with('\n');
    // Keep the file's dominant line ending; CRLF sources stay CRLF.
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

    let mut patch = FilePatch {
        provider,
        path: display_path.clone(),
        records_applied: 0,
        lines_inserted: 0,
        lines_removed: 0,
    };
    let mut offset: i64 = 0;

    for (&line_number, body) in records {
        let index = i64::from(line_number) - 1 + offset;
        if index < 0 || index as usize >= lines.len() {
            return Err(PatchError::LineOutOfRange {
                file: display_path.clone(),
                line: line_number,
                line_count: lines.len(),
            });
        }
        let index = index as usize;

        let anchor = find_anchor(&lines, index).ok_or_else(|| PatchError::AnchorNotFound {
            file: display_path.clone(),
            line: line_number,
        })?;

        // Discard drifted lines between the anchor and the recorded index.
        let removed = index - anchor;
        if removed > 0 {
            lines.drain(anchor + 1..=index);
            offset -= removed as i64;
            patch.lines_removed += removed;
        }

        // Insert the body immediately above the anchor. Inserting in
        // reverse keeps the final order identical to the recording.
        for line in body.iter().rev() {
            lines.insert(anchor, line.clone());
        }
        offset += body.len() as i64;
        patch.lines_inserted += body.len();
        patch.records_applied += 1;

        tracing::debug!(
            file = %display_path,
            line = line_number,
            inserted = body.len(),
            removed,
            "applied record"
        );
    }

    let mut out = lines.join(newline);
    if had_final_newline {
        out.push_str(newline);
    }
    std::fs::write(path, out).map_err(|source| PatchError::Write {
        path: display_path,
        source,
    })?;

    Ok(patch)
}
