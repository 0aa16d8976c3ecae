//! Dataset identity and source provenance.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::table::Table;

/// Which of the three pipeline inputs a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// The user-supplied keyword-in-context export.
    Kwic,
    /// Corpus metadata, one row per corpus file.
    CorpusMetadata,
    /// Author metadata, one row per source link.
    AuthorMetadata,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Kwic => "KWIC results",
            Dataset::CorpusMetadata => "corpus metadata",
            Dataset::AuthorMetadata => "author metadata",
        };
        f.write_str(name)
    }
}

/// Provenance for one parsed input.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    /// Which input this is.
    pub dataset: Dataset,
    /// SHA-256 hash of the raw text.
    pub hash: String,
    /// Raw text size in bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of declared columns.
    pub column_count: usize,
}

impl SourceSummary {
    /// Summarize `text` as parsed into `table`.
    pub fn new(dataset: Dataset, text: &str, table: &Table) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            dataset,
            hash,
            size_bytes: text.len() as u64,
            row_count: table.row_count(),
            column_count: table.column_count(),
        }
    }
}
