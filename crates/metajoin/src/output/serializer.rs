//! Delimited-text and JSON output.

use crate::error::Result;
use crate::input::Table;

/// Writes tables as delimited text with minimal quoting.
#[derive(Debug, Clone)]
pub struct Serializer {
    delimiter: u8,
}

impl Serializer {
    /// Create a tab-separated serializer.
    pub fn new() -> Self {
        Self { delimiter: b'\t' }
    }

    /// Create a serializer for another delimiter (e.g. `b','`).
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Render the header followed by one record per row, values in
    /// declared-column order. Fields a row does not carry are written empty.
    ///
    /// Fields containing the delimiter, a quote or a line break are quoted,
    /// with embedded quotes doubled.
    pub fn serialize(&self, table: &Table) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(
                table
                    .columns()
                    .iter()
                    .map(|c| row.get(c).map(String::as_str).unwrap_or("")),
            )?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;

        // every field came from a String
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `table` as tab-separated text.
pub fn serialize(table: &Table) -> Result<String> {
    Serializer::new().serialize(table)
}

/// Render the rows of `table` as a JSON array of objects. Absent fields are
/// omitted.
pub fn to_json(table: &Table) -> Result<String> {
    Ok(serde_json::to_string_pretty(table.rows())?)
}
