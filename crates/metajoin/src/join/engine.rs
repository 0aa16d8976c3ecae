//! Left-join engine.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{MetajoinError, Result};
use crate::input::Table;

use super::lookup::Lookup;

/// Match counts from one left join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    /// Primary rows that found a reference row.
    pub matched: usize,
    /// Primary rows passed through without new fields.
    pub unmatched: usize,
    /// Reference keys shared by more than one row (only the first is used).
    pub duplicate_keys: usize,
}

/// Left-join `primary` with `reference` on column `on`.
pub fn left_join(primary: &Table, reference: &Table, on: &str) -> Result<Table> {
    left_join_with_stats(primary, reference, on).map(|(table, _)| table)
}

/// Left-join `primary` with `reference` on column `on`, reporting match
/// counts.
///
/// Every primary row appears exactly once, in its original position. A row
/// whose key matches takes the columns it does not already declare from the
/// first matching reference row; a row without a match is passed through
/// unchanged. Declared columns are the primary columns followed by the
/// reference-only columns in reference order.
pub fn left_join_with_stats(
    primary: &Table,
    reference: &Table,
    on: &str,
) -> Result<(Table, JoinStats)> {
    if !primary.has_column(on) {
        return Err(MetajoinError::MissingJoinKey {
            column: on.to_string(),
            table: "primary",
        });
    }
    if !reference.has_column(on) {
        return Err(MetajoinError::MissingJoinKey {
            column: on.to_string(),
            table: "reference",
        });
    }

    let lookup = Lookup::build(reference, on);

    let declared: HashSet<&str> = primary.columns().iter().map(String::as_str).collect();
    let added: Vec<&String> = reference
        .columns()
        .iter()
        .filter(|c| !declared.contains(c.as_str()))
        .collect();

    let mut stats = JoinStats {
        duplicate_keys: lookup.duplicate_keys(),
        ..JoinStats::default()
    };

    let rows = primary
        .rows()
        .iter()
        .map(|row| {
            let mut merged = row.clone();
            match row.get(on).and_then(|key| lookup.first(key)) {
                Some(matched) => {
                    stats.matched += 1;
                    for column in &added {
                        if let Some(value) = matched.get(column.as_str()) {
                            merged.insert((*column).clone(), value.clone());
                        }
                    }
                }
                None => stats.unmatched += 1,
            }
            merged
        })
        .collect();

    let mut columns = primary.columns().to_vec();
    columns.extend(added.iter().map(|c| (*c).clone()));

    debug!(
        on,
        matched = stats.matched,
        unmatched = stats.unmatched,
        duplicate_keys = stats.duplicate_keys,
        "left join complete"
    );

    Ok((Table::from_parts(columns, rows), stats))
}
