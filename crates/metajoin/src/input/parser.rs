//! Delimited-text parser with column-count validation.

use tracing::debug;

use crate::error::{MetajoinError, Result};
use super::source::Dataset;
use super::table::Table;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            quote: b'"',
        }
    }
}

/// Parses delimited text whose first record is the header.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a tab-separated parser.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse `text` into a table.
    ///
    /// When `expected_columns` is given, a header declaring any other number
    /// of columns fails with `ShapeMismatch` before any row is read.
    pub fn parse(
        &self,
        text: &str,
        expected_columns: Option<usize>,
        dataset: Dataset,
    ) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        if let Some(expected) = expected_columns {
            if headers.len() != expected {
                return Err(MetajoinError::ShapeMismatch {
                    dataset,
                    actual: headers.len(),
                    expected,
                });
            }
        }

        if headers.is_empty() {
            return Err(MetajoinError::EmptyData(format!("no columns found in {dataset}")));
        }

        let mut records: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            records.push(record.iter().map(str::to_string).collect());
        }

        let table = Table::from_records(headers, records).map_err(|e| match e {
            MetajoinError::DuplicateColumn { column, .. } => MetajoinError::DuplicateColumn {
                column,
                context: format!("{dataset} header"),
            },
            other => other,
        })?;

        debug!(
            %dataset,
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed table"
        );

        Ok(table)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
