//! Database providers whose functional test files are patched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A database backend with its own functional test project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Provider {
    SqlServer,
    Sqlite,
    Cosmos,
}

impl Provider {
    /// All known providers, in classification order.
    pub const ALL: [Provider; 3] = [Provider::SqlServer, Provider::Sqlite, Provider::Cosmos];

    /// The name component used in `<prefix>.<Provider>.FunctionalTests`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Provider::SqlServer => "SqlServer",
            Provider::Sqlite => "Sqlite",
            Provider::Cosmos => "Cosmos",
        }
    }

    /// Classify a file identifier by substring match, checked in
    /// declaration order. `None` means the record belongs to no known
    /// provider and is dropped by the parser.
    pub fn classify(identifier: &str) -> Option<Provider> {
        Provider::ALL
            .iter()
            .copied()
            .find(|p| identifier.contains(p.dir_name()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
