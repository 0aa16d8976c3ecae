//! Per-column value normalization.

use tracing::trace;

use crate::error::Result;
use crate::input::Table;

/// Return a copy of `table` with `transform` applied to every value of
/// `column`.
///
/// Row count and declared columns are unchanged. Rows that lack a value for
/// `column` are passed through untouched.
pub fn normalize_keys<F>(table: &Table, column: &str, transform: F) -> Result<Table>
where
    F: Fn(&str) -> String,
{
    table.require_column(column, "table being normalized")?;

    let mut changed = 0usize;
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            if let Some(value) = row.get_mut(column) {
                let normalized = transform(value.as_str());
                if normalized != *value {
                    changed += 1;
                    *value = normalized;
                }
            }
            row
        })
        .collect();

    trace!(column, changed, "normalized column");

    Ok(Table::from_parts(table.columns().to_vec(), rows))
}
