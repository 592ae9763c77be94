//! Baseline records and the grouped record set.

use std::collections::BTreeMap;

use super::Provider;

/// Recorded body lines keyed by their 1-based line number in the target
/// file. Ascending iteration order is load-bearing: the patcher's running
/// offset only accumulates predictably when records apply in original
/// line order.
pub type FileRecords = BTreeMap<u32, Vec<String>>;

/// One parsed baseline record: which lines go where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineRecord {
    pub provider: Provider,
    /// Relative path of the target file within the provider's functional
    /// test project, e.g. `Query/MySqlServerQueryTest.cs`.
    pub file_identifier: String,
    pub line_number: u32,
    /// Body with the trailing capture-artifact line already dropped.
    pub body_lines: Vec<String>,
}

/// Records grouped provider → file identifier → line number → body lines.
///
/// Built once by the parser, consumed once by the patcher. BTreeMaps keep
/// provider and file iteration deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordSet {
    by_provider: BTreeMap<Provider, BTreeMap<String, FileRecords>>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A record for the same (provider, file, line)
    /// replaces the previous one (capture-file last-wins).
    pub fn insert(&mut self, record: BaselineRecord) {
        self.by_provider
            .entry(record.provider)
            .or_default()
            .entry(record.file_identifier)
            .or_default()
            .insert(record.line_number, record.body_lines);
    }

    pub fn is_empty(&self) -> bool {
        self.by_provider.is_empty()
    }

    /// Total record count across all providers and files.
    pub fn len(&self) -> usize {
        self.by_provider
            .values()
            .flat_map(|files| files.values())
            .map(|lines| lines.len())
            .sum()
    }

    /// Iterate providers and their file groups in deterministic order.
    pub fn providers(
        &self,
    ) -> impl Iterator<Item = (Provider, &BTreeMap<String, FileRecords>)> {
        self.by_provider.iter().map(|(p, files)| (*p, files))
    }
}
