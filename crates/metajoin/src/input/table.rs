//! In-memory tabular data with declared columns.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{MetajoinError, Result};

/// A single record, keyed by column name in declared-column order.
pub type Row = IndexMap<String, String>;

/// Parsed tabular data.
///
/// The declared columns are authoritative: every row holds a subset of them.
/// Rows produced by the parser hold all of them; rows that passed through a
/// left join without a match may lack the reference-only columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table, checking that column names are unique and that no row
    /// carries a field outside the declared columns.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(MetajoinError::DuplicateColumn {
                    column: column.clone(),
                    context: "table header".to_string(),
                });
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if let Some(stray) = row.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(MetajoinError::MissingColumn {
                    column: stray.clone(),
                    context: format!("declared columns (row {})", index + 1),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Build a table from positional records, padding short records with
    /// empty strings and dropping surplus fields.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
        let rows = records
            .into_iter()
            .map(|mut record| {
                record.resize(columns.len(), String::new());
                columns.iter().cloned().zip(record).collect::<Row>()
            })
            .collect();
        Self::new(columns, rows)
    }

    /// Assemble a table whose invariants the caller already upholds.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Declared column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether `name` is a declared column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get a specific cell value. `None` if the row is out of range or the
    /// row has no value for that column.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// All values of a column, `None` where a row lacks the field.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = Option<&'a str>> {
        self.rows.iter().map(move |row| row.get(column).map(String::as_str))
    }

    /// Fail with `MissingColumn` unless `column` is declared.
    pub fn require_column(&self, column: &str, context: &str) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(MetajoinError::MissingColumn {
                column: column.to_string(),
                context: context.to_string(),
            })
        }
    }
}
