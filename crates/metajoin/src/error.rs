//! Error types for the metajoin library.

use std::path::PathBuf;
use thiserror::Error;

use crate::input::Dataset;

/// Main error type for enrichment operations.
#[derive(Debug, Error)]
pub enum MetajoinError {
    /// A required input (primary file or reference location) was not supplied.
    #[error("Missing input: {0}")]
    InputMissing(String),

    /// The local primary file could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference table could not be retrieved.
    #[error("Failed to fetch {dataset}: {message}")]
    FetchFailure { dataset: Dataset, message: String },

    /// A table declared the wrong number of columns.
    #[error("Invalid number of columns in {dataset} ({actual}, should be {expected})")]
    ShapeMismatch {
        dataset: Dataset,
        actual: usize,
        expected: usize,
    },

    /// A required column is not declared by the table.
    #[error("No '{column}' column in {context}")]
    MissingColumn { column: String, context: String },

    /// The join key is not declared by one of the joined tables.
    #[error("Join key '{column}' is not a column of the {table} table")]
    MissingJoinKey { column: String, table: &'static str },

    /// A column name appears more than once.
    #[error("Duplicate column '{column}' in {context}")]
    DuplicateColumn { column: String, context: String },

    /// Empty input with nothing to parse.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for metajoin operations.
pub type Result<T> = std::result::Result<T, MetajoinError>;
