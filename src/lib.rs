//! org-chart: host layer over `org-chart-core`
//!
//! Adds the pieces a host needs around the pure hierarchy logic:
//! - YAML chart configuration (column mapping, search toggle, leaf naming)
//! - JSON table loading (columnar or row records)
//! - Tracing initialization
//!
//! The `org_chart_cli` binary (feature `cli`) drives these end to end.

pub mod config;
pub mod input;
pub mod logging;

pub use config::{ChartConfig, ConfigLoader};
pub use input::{load_table, table_from_json, TableShapeError};
pub use logging::init_tracing;

// Re-export the core API so hosts need a single dependency
pub use org_chart_core::*;

use std::path::Path;

/// Load config and table, then build the chart with the configured policy.
pub fn build_from_files(config: &ChartConfig, table_path: &Path) -> anyhow::Result<OrgChart> {
    let table = load_table(table_path)?;
    Ok(TreeBuilder::new(&config.mapping)
        .with_leaf_naming(config.leaf_naming)
        .build(&table))
}
