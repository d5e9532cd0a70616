//! Build diagnostics.
//!
//! Collected during a build for operator visibility. Nothing recorded here
//! aborts construction.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LevelParseError};

/// A level string the parser rejected, with its table coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRejection {
    /// Row index in the input table.
    pub row: usize,
    /// Configured level index of the offending column (0 = root).
    pub level: usize,
    pub raw: String,
    pub reason: LevelParseError,
}

/// Aggregate counts and rejection records for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDiagnostics {
    /// Set when the mapping could not be applied; the chart is then empty.
    pub config_error: Option<ConfigError>,
    pub rows_seen: usize,
    /// Rows whose level chain was empty.
    pub rows_skipped: usize,
    pub rejections: Vec<LevelRejection>,
    /// Leaf nodes created without a full name (the unit name was used instead).
    pub missing_full_names: usize,
}

impl BuildDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn config_missing(error: ConfigError) -> Self {
        Self {
            config_error: Some(error),
            ..Self::default()
        }
    }

    pub(crate) fn reject(&mut self, row: usize, level: usize, reason: LevelParseError) {
        self.rejections.push(LevelRejection {
            row,
            level,
            raw: reason.raw().to_string(),
            reason,
        });
    }

    pub fn levels_rejected(&self) -> usize {
        self.rejections.len()
    }

    /// No config error, skipped rows, rejections or missing names.
    pub fn is_clean(&self) -> bool {
        self.config_error.is_none()
            && self.rows_skipped == 0
            && self.rejections.is_empty()
            && self.missing_full_names == 0
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        if let Some(err) = &self.config_error {
            return format!("configuration incomplete: {}", err);
        }
        format!(
            "{} rows, {} skipped, {} level strings rejected, {} missing full names",
            self.rows_seen,
            self.rows_skipped,
            self.rejections.len(),
            self.missing_full_names
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let mut diag = BuildDiagnostics::new();
        diag.rows_seen = 4;
        diag.rows_skipped = 1;
        diag.reject(
            2,
            1,
            LevelParseError::Malformed {
                raw: "Acme (123)".to_string(),
            },
        );

        assert!(!diag.is_clean());
        assert_eq!(diag.rejections[0].raw, "Acme (123)");
        assert_eq!(
            diag.summary(),
            "4 rows, 1 skipped, 1 level strings rejected, 0 missing full names"
        );

        let diag = BuildDiagnostics::config_missing(ConfigError::MissingLevelZero);
        assert_eq!(
            diag.summary(),
            "configuration incomplete: No column configured for level 0"
        );
    }
}
