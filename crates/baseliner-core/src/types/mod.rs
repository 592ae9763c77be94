//! Core domain types: providers, baseline records, the grouped record set.

pub mod provider;
pub mod record;

pub use provider::Provider;
pub use record::{BaselineRecord, FileRecords, RecordSet};
