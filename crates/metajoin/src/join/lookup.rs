//! Transient key-to-rows index over a reference table.

use std::collections::HashMap;

use crate::input::{Row, Table};

/// Reference rows grouped by their value in the join column.
///
/// Rows sharing a key keep their original relative order, so the first entry
/// of each group is the first such row in the reference table. Rows with no
/// value for the join column are not indexed.
#[derive(Debug)]
pub struct Lookup<'a> {
    groups: HashMap<&'a str, Vec<&'a Row>>,
}

impl<'a> Lookup<'a> {
    /// Index `reference` on column `on` in a single pass.
    pub fn build(reference: &'a Table, on: &str) -> Self {
        let mut groups: HashMap<&'a str, Vec<&'a Row>> = HashMap::new();
        for row in reference.rows() {
            if let Some(key) = row.get(on) {
                groups.entry(key.as_str()).or_default().push(row);
            }
        }
        Self { groups }
    }

    /// The first reference row with this key.
    pub fn first(&self, key: &str) -> Option<&'a Row> {
        self.groups.get(key).and_then(|rows| rows.first().copied())
    }

    /// Number of keys shared by more than one reference row.
    pub fn duplicate_keys(&self) -> usize {
        self.groups.values().filter(|rows| rows.len() > 1).count()
    }
}
