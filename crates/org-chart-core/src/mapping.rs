//! Column mapping: which table columns hold the hierarchy levels, the row's
//! full name and its unit id.
//!
//! The mapping is validated once against a table with [`LevelColumnMapping::resolve`],
//! which yields borrowed column slices for the builder to walk.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ColumnRole, ConfigError};
use crate::table::ColumnarTable;

/// Levels 0..=10.
pub const MAX_LEVELS: usize = 11;

/// Named column configuration.
///
/// `levels[k]` is the column holding level `k`; `None` leaves that level
/// unconfigured and it is passed over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelColumnMapping {
    /// Column with the row's own leaf display name.
    pub full_name: String,
    /// Column with the business unit id. Required to be present, otherwise unused.
    pub unit_id: String,
    /// Business unit name column. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Level columns, root first.
    #[serde(default)]
    pub levels: Vec<Option<String>>,
}

impl LevelColumnMapping {
    pub fn new(full_name: impl Into<String>, unit_id: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            unit_id: unit_id.into(),
            unit_name: None,
            levels: Vec::new(),
        }
    }

    /// Configure the column for `level`, growing the level list as needed.
    pub fn with_level(mut self, level: usize, column: impl Into<String>) -> Self {
        if self.levels.len() <= level {
            self.levels.resize(level + 1, None);
        }
        self.levels[level] = Some(column.into());
        self
    }

    /// Configure consecutive levels starting at 0.
    pub fn with_levels<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = columns.into_iter().map(|c| Some(c.into())).collect();
        self
    }

    pub fn with_unit_name(mut self, column: impl Into<String>) -> Self {
        self.unit_name = Some(column.into());
        self
    }

    /// Check the mapping on its own, without a table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Trailing unconfigured entries do not count as levels
        let configured = self.levels.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
        if configured > MAX_LEVELS {
            return Err(ConfigError::TooManyLevels { count: configured });
        }
        match self.levels.first() {
            Some(Some(column)) if !column.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingLevelZero),
        }
    }

    /// Validate against `table` and borrow the mapped columns.
    ///
    /// Level 0, full name and unit id must exist in the table. Optional level
    /// columns that are unconfigured or missing from the table are skipped.
    pub fn resolve<'t>(&self, table: &'t ColumnarTable) -> Result<ResolvedColumns<'t>, ConfigError> {
        self.validate()?;

        let required = |role: ColumnRole, column: &str| {
            table
                .column(column)
                .ok_or_else(|| ConfigError::ColumnNotFound {
                    role,
                    column: column.to_string(),
                })
        };

        let level_zero = self.levels[0].as_deref().unwrap_or_default();
        let root = required(ColumnRole::Level(0), level_zero)?;
        let full_name = required(ColumnRole::FullName, &self.full_name)?;
        required(ColumnRole::UnitId, &self.unit_id)?;

        let mut levels = vec![(0, root)];
        for (level, column) in self.levels.iter().enumerate().skip(1) {
            let Some(column) = column else { continue };
            match table.column(column) {
                Some(cells) => levels.push((level, cells)),
                None => debug!(level, column = %column, "Level column not in table, skipping"),
            }
        }

        Ok(ResolvedColumns {
            row_count: root.len(),
            levels,
            full_name,
        })
    }
}

/// Column slices for one build, in chain order.
#[derive(Debug, Clone)]
pub struct ResolvedColumns<'t> {
    /// Number of rows, taken from the level 0 column.
    pub row_count: usize,
    /// Configured level index and its cells, root first. Gaps in the
    /// configuration are already dropped, so indices may skip.
    pub levels: Vec<(usize, &'t [Option<String>])>,
    pub full_name: &'t [Option<String>],
}
