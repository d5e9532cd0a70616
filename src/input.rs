//! Table input
//!
//! Reads the host-supplied table from JSON. Two shapes are accepted:
//! - Columnar: `{"Level 0": ["...", null], "Full Name": ["...", "..."]}`
//! - Records: `[{"Level 0": "...", "Full Name": "..."}, ...]`
//!
//! Scalar cells are converted to text (numbers and booleans via their JSON
//! rendering); `null` becomes an absent cell.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use org_chart_core::ColumnarTable;

/// Input JSON that does not describe a table.
#[derive(Debug, Error)]
pub enum TableShapeError {
    #[error("Expected a JSON object of columns or an array of row objects")]
    UnsupportedShape,

    #[error("Column '{0}' is not an array")]
    ColumnNotArray(String),

    #[error("Row {0} is not an object")]
    RowNotObject(usize),

    #[error("Cell in column '{column}' at row {row} is not a scalar")]
    NonScalarCell { column: String, row: usize },
}

/// Load a table from a JSON file.
pub fn load_table(path: &Path) -> Result<ColumnarTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let table = table_from_json(value).with_context(|| format!("Invalid table {}", path.display()))?;
    info!(
        columns = table.column_names().count(),
        rows = table.max_len(),
        "Loaded table from {}",
        path.display()
    );
    Ok(table)
}

/// Convert decoded JSON into a columnar table.
pub fn table_from_json(value: Value) -> Result<ColumnarTable, TableShapeError> {
    let table = match value {
        Value::Object(columns) => columnar(columns)?,
        Value::Array(rows) => records(rows)?,
        _ => return Err(TableShapeError::UnsupportedShape),
    };

    let lengths: Vec<usize> = table
        .column_names()
        .filter_map(|name| table.column(name).map(<[_]>::len))
        .collect();
    if lengths.windows(2).any(|w| w[0] != w[1]) {
        warn!(?lengths, "Columns have different lengths; short columns read as empty");
    }

    Ok(table)
}

fn columnar(columns: serde_json::Map<String, Value>) -> Result<ColumnarTable, TableShapeError> {
    let mut table = ColumnarTable::new();
    for (name, cells) in columns {
        let Value::Array(cells) = cells else {
            return Err(TableShapeError::ColumnNotArray(name));
        };
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(row, cell)| {
                cell_to_text(cell).ok_or_else(|| TableShapeError::NonScalarCell {
                    column: name.clone(),
                    row,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        table.insert_column(name, cells);
    }
    Ok(table)
}

fn records(rows: Vec<Value>) -> Result<ColumnarTable, TableShapeError> {
    let mut converted = Vec::with_capacity(rows.len());
    for (row, record) in rows.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(TableShapeError::RowNotObject(row));
        };
        let mut cells = BTreeMap::new();
        for (column, cell) in fields {
            let text = cell_to_text(cell).ok_or_else(|| TableShapeError::NonScalarCell {
                column: column.clone(),
                row,
            })?;
            cells.insert(column, text);
        }
        converted.push(cells);
    }
    Ok(ColumnarTable::from_records(converted))
}

/// `None` for arrays/objects, `Some(None)` for null.
fn cell_to_text(cell: Value) -> Option<Option<String>> {
    match cell {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s)),
        Value::Number(n) => Some(Some(n.to_string())),
        Value::Bool(b) => Some(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => None,
    }
}
