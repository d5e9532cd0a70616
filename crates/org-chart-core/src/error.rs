//! Error types for level parsing and column mapping validation.
//!
//! Neither error aborts a build: the builder records them in
//! [`BuildDiagnostics`](crate::diagnostics::BuildDiagnostics) and carries on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapping::MAX_LEVELS;

/// Which role a mapped column plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Hierarchy level column (0 = root).
    Level(usize),
    FullName,
    UnitId,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::Level(level) => write!(f, "level {}", level),
            ColumnRole::FullName => write!(f, "full name"),
            ColumnRole::UnitId => write!(f, "unit id"),
        }
    }
}

/// Rejection of a single encoded level string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LevelParseError {
    /// Cell was absent or empty.
    #[error("Empty level string")]
    Empty,

    /// Cell did not match `Name (UnitCode)-LeafCode`.
    #[error("Malformed level string '{raw}': expected 'Name (UnitCode)-LeafCode'")]
    Malformed {
        /// The offending cell text, unchanged.
        raw: String,
    },
}

impl LevelParseError {
    /// Stable error code for diagnostics output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "LEVEL_EMPTY",
            Self::Malformed { .. } => "LEVEL_MALFORMED",
        }
    }

    /// Raw text that was rejected (empty for [`LevelParseError::Empty`]).
    pub fn raw(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Malformed { raw } => raw,
        }
    }
}

/// Column mapping that cannot be applied to a table.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    /// No column is configured for level 0.
    #[error("No column configured for level 0")]
    MissingLevelZero,

    /// A mandatory column is configured but not present in the table.
    #[error("Missing {role} column '{column}' in table")]
    ColumnNotFound { role: ColumnRole, column: String },

    /// More level columns configured than the hierarchy supports.
    #[error("{count} level columns configured (max {max})", max = MAX_LEVELS)]
    TooManyLevels { count: usize },
}

impl ConfigError {
    /// Stable error code for diagnostics output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingLevelZero => "MISSING_LEVEL_ZERO",
            Self::ColumnNotFound { .. } => "COLUMN_NOT_FOUND",
            Self::TooManyLevels { .. } => "TOO_MANY_LEVELS",
        }
    }
}
