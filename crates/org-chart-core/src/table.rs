//! Columnar input table.
//!
//! The host supplies one cell sequence per column, all of the same length.
//! Cells are optional text; `null` in JSON deserializes to `None`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column name -> ordered cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnarTable {
    columns: BTreeMap<String, Vec<Option<String>>>,
}

impl ColumnarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a column.
    pub fn with_column<I, S>(mut self, name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.insert_column(name, cells);
        self
    }

    /// Add (or replace) a column in place.
    pub fn insert_column<I, S>(&mut self, name: impl Into<String>, cells: I)
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let cells = cells.into_iter().map(|c| c.map(Into::into)).collect();
        self.columns.insert(name.into(), cells);
    }

    /// Build a columnar table from row records.
    ///
    /// Every column seen in any record becomes a column; records lacking it
    /// get `None` in that position, so all columns share the same length.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = BTreeMap<String, Option<String>>>,
    {
        let records: Vec<_> = records.into_iter().collect();
        let mut columns: BTreeMap<String, Vec<Option<String>>> = BTreeMap::new();

        for record in &records {
            for name in record.keys() {
                columns
                    .entry(name.clone())
                    .or_insert_with(|| Vec::with_capacity(records.len()));
            }
        }

        for (name, cells) in columns.iter_mut() {
            cells.extend(records.iter().map(|r| r.get(name).cloned().flatten()));
        }

        Self { columns }
    }

    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Cell text, treating out-of-range rows and empty strings as absent.
    pub fn cell(&self, column: &str, row: usize) -> Option<&str> {
        self.column(column).and_then(|cells| cell_text(cells, row))
    }

    /// Length of the longest column.
    pub fn max_len(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Non-empty cell text at `row`.
pub(crate) fn cell_text(cells: &[Option<String>], row: usize) -> Option<&str> {
    cells
        .get(row)
        .and_then(|c| c.as_deref())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cells_and_absence() {
        let table = ColumnarTable::new().with_column("L0", [Some("A (1)-X"), None, Some("")]);

        assert_eq!(table.cell("L0", 0), Some("A (1)-X"));
        assert_eq!(table.cell("L0", 1), None);
        assert_eq!(table.cell("L0", 2), None);
        assert_eq!(table.cell("L0", 3), None);
        assert_eq!(table.cell("missing", 0), None);
        assert_eq!(table.max_len(), 3);
    }

    #[test]
    fn test_from_records_fills_gaps() {
        let mut first = BTreeMap::new();
        first.insert("a".to_string(), Some("1".to_string()));
        let mut second = BTreeMap::new();
        second.insert("b".to_string(), Some("2".to_string()));

        let table = ColumnarTable::from_records(vec![first, second]);

        assert_eq!(table.column("a").unwrap(), &[Some("1".to_string()), None]);
        assert_eq!(table.column("b").unwrap(), &[None, Some("2".to_string())]);
    }

    #[test]
    fn test_deserialize_with_nulls() {
        let table: ColumnarTable =
            serde_json::from_str(r#"{"L0": ["A (1)-X", null], "Name": ["a", "b"]}"#).unwrap();
        assert_eq!(table.cell("L0", 1), None);
        assert_eq!(table.cell("Name", 1), Some("b"));
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["L0", "Name"]);
    }
}
