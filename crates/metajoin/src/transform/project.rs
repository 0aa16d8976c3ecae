//! Column projection.

use std::collections::HashSet;

use crate::error::{MetajoinError, Result};
use crate::input::{Row, Table};

/// Restrict `table` to `keep`, in the order given.
///
/// Fails with `MissingColumn` if any requested column is not declared.
pub fn project<S: AsRef<str>>(table: &Table, keep: &[S]) -> Result<Table> {
    let mut seen = HashSet::with_capacity(keep.len());
    for column in keep {
        let column = column.as_ref();
        table.require_column(column, "table being projected")?;
        if !seen.insert(column) {
            return Err(MetajoinError::DuplicateColumn {
                column: column.to_string(),
                context: "projection".to_string(),
            });
        }
    }

    let columns: Vec<String> = keep.iter().map(|c| c.as_ref().to_string()).collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .filter_map(|c| row.get(c).map(|v| (c.clone(), v.clone())))
                .collect::<Row>()
        })
        .collect();

    Ok(Table::from_parts(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Dataset, Parser};

    fn corpus() -> Table {
        Parser::new()
            .parse(
                "File\tTitle\tYear\tLink\ndoc1\tA\t1920\tL1\ndoc2\tB\t1931\tL2\n",
                None,
                Dataset::CorpusMetadata,
            )
            .unwrap()
    }

    #[test]
    fn test_project_keeps_requested_order() {
        let projected = project(&corpus(), &["Link", "File"]).unwrap();

        assert_eq!(projected.columns(), ["Link", "File"]);
        assert_eq!(projected.row_count(), 2);
        let keys: Vec<&str> = projected.rows()[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Link", "File"]);
        assert_eq!(projected.get(1, "File"), Some("doc2"));
        assert_eq!(projected.get(1, "Title"), None);
    }

    #[test]
    fn test_project_missing_column() {
        let err = project(&corpus(), &["File", "Author"]).unwrap_err();
        assert!(matches!(err, MetajoinError::MissingColumn { ref column, .. } if column == "Author"));
    }

    #[test]
    fn test_project_duplicate_column() {
        let err = project(&corpus(), &["File", "File"]).unwrap_err();
        assert!(matches!(err, MetajoinError::DuplicateColumn { .. }));
    }
}
