//! Baseline file parser — splits capture blocks, tolerates noise.
//!
//! The baseline is capture output from a bulk test run and routinely
//! contains noise. Malformed blocks are skipped and counted, never raised.

pub mod header;

use baseliner_core::config::PatchConfig;
use baseliner_core::types::{BaselineRecord, Provider, RecordSet};
use serde::Serialize;

use self::header::{file_identifier, parse_header, LineField};

/// Per-reason accounting for parsed and skipped blocks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-empty blocks seen in the baseline file.
    pub blocks: usize,
    /// Blocks that produced a record.
    pub records: usize,
    /// Header missing the ` : ` separator, carrying a non-numeric line
    /// number, or naming a test with too few dotted segments.
    pub skipped_malformed_header: usize,
    /// Header with an empty line-number field (no-op record).
    pub skipped_empty_line_number: usize,
    /// Identifier matching no known provider.
    pub skipped_unknown_provider: usize,
}

impl ParseStats {
    /// Blocks skipped, all reasons combined.
    pub fn skipped(&self) -> usize {
        self.skipped_malformed_header
            + self.skipped_empty_line_number
            + self.skipped_unknown_provider
    }
}

/// Parse the full baseline text into grouped records plus skip accounting.
pub fn parse_baseline(text: &str, config: &PatchConfig) -> (RecordSet, ParseStats) {
    let mut set = RecordSet::new();
    let mut stats = ParseStats::default();

    for block in split_blocks(text) {
        stats.blocks += 1;
        let Some(record) = parse_block(&block, config, &mut stats) else {
            continue;
        };
        stats.records += 1;
        set.insert(record);
    }

    (set, stats)
}

/// Split the baseline text into record blocks.
///
/// Blocks are terminated by a delimiter line; the blank line preceding
/// the delimiter belongs to the separator, not the record body. Blank
/// lines between a delimiter and the next header are also separator
/// padding, but blank lines inside a body are kept verbatim.
fn split_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if is_delimiter(line) {
            if current.last().is_some_and(|l| l.trim().is_empty()) {
                current.pop();
            }
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if current.is_empty() && line.trim().is_empty() {
            continue;
        }
        current.push(line.to_string());
    }

    // Trailing block without a final delimiter.
    if current.last().is_some_and(|l| l.trim().is_empty()) {
        current.pop();
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// A delimiter line is a run of four or more dashes and nothing else.
/// The minimum run keeps empty SQL comment markers (`--`) inside record
/// bodies from terminating a block early.
fn is_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 4 && trimmed.bytes().all(|b| b == b'-')
}

/// Parse one block into a record, or count why it was skipped.
fn parse_block(
    block: &[String],
    config: &PatchConfig,
    stats: &mut ParseStats,
) -> Option<BaselineRecord> {
    let header = block.first()?;

    let (name, line_field) = match parse_header(header) {
        Some(parts) => parts,
        None => {
            stats.skipped_malformed_header += 1;
            tracing::debug!(header = %header, "skipping block with malformed header");
            return None;
        }
    };

    let line_number = match line_field {
        LineField::Empty => {
            stats.skipped_empty_line_number += 1;
            tracing::debug!(test = %name, "skipping no-op record with empty line number");
            return None;
        }
        LineField::Number(n) => n,
    };

    let Some(identifier) =
        file_identifier(name, config.effective_namespace_prefix_segments())
    else {
        stats.skipped_malformed_header += 1;
        tracing::debug!(test = %name, "skipping record with too few name segments");
        return None;
    };

    let Some(provider) = Provider::classify(&identifier) else {
        stats.skipped_unknown_provider += 1;
        tracing::debug!(test = %name, "skipping record for unknown provider");
        return None;
    };

    // The capture format appends one trailing artifact line per record.
    let mut body: Vec<String> = block[1..].to_vec();
    body.pop();

    Some(BaselineRecord {
        provider,
        file_identifier: identifier,
        line_number,
        body_lines: body,
    })
}
