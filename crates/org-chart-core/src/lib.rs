//! org-chart-core: business-unit hierarchy from denormalized rows
//!
//! This crate contains the pure hierarchy logic with NO I/O:
//! - Level parser for `Name (UnitCode)-LeafCode` cells
//! - Columnar table and column mapping types
//! - Tree builder with path-based node identity and prefix dedup
//! - Subtree statistics (direct/total subordinates)
//! - Case-insensitive node search
//! - Build diagnostics and a rebuild memo
//!
//! # Architecture
//!
//! ```text
//! ColumnarTable + LevelColumnMapping
//!        │
//!        ▼
//! TreeBuilder ── parse_level (per cell)
//!        │
//!        ▼
//! OrgChart { nodes, index, diagnostics } ── search(term)
//! ```
//!
//! # Example
//!
//! ```
//! use org_chart_core::{build_org_chart, ColumnarTable, LevelColumnMapping};
//!
//! let table = ColumnarTable::new()
//!     .with_column("Level 0", [Some("Cambridge Investment Research, Inc. (00001)-QV6")])
//!     .with_column("Level 1", [Some("West Region (00200)-W01")])
//!     .with_column("Full Name", [Some("Jane Doe")])
//!     .with_column("Unit Id", [Some("00200")]);
//! let mapping = LevelColumnMapping::new("Full Name", "Unit Id")
//!     .with_levels(["Level 0", "Level 1"]);
//!
//! let chart = build_org_chart(&table, &mapping);
//! assert_eq!(chart.len(), 2);
//! assert_eq!(chart.nodes()[0].total_subordinates, 1);
//! assert_eq!(chart.search("jane")[0].name, "Jane Doe");
//! ```

pub mod builder;
pub mod chart;
pub mod diagnostics;
pub mod error;
pub mod level;
pub mod mapping;
pub mod memo;
pub mod node;
pub mod search;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use builder::{build_nodes, build_org_chart, LeafNaming, TreeBuilder};
pub use chart::OrgChart;
pub use diagnostics::{BuildDiagnostics, LevelRejection};
pub use error::{ColumnRole, ConfigError, LevelParseError};
pub use level::{parse_level, ParsedLevel};
pub use mapping::{LevelColumnMapping, ResolvedColumns, MAX_LEVELS};
pub use memo::ChartMemo;
pub use node::{OrgNode, SearchResult, ID_SEPARATOR};
pub use search::search;
pub use stats::annotate;
pub use table::ColumnarTable;
