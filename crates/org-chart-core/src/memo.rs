//! Rebuild memo.
//!
//! Hosts that rebuild on every input change can keep a `ChartMemo` and get the
//! previous chart back when the table and mapping are unchanged.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

use crate::builder::{LeafNaming, TreeBuilder};
use crate::chart::OrgChart;
use crate::mapping::LevelColumnMapping;
use crate::table::ColumnarTable;

/// Remembers the last build by input fingerprint.
#[derive(Debug, Default)]
pub struct ChartMemo {
    naming: LeafNaming,
    last: Option<LastBuild>,
}

/// Input kept alongside the fingerprint; a fingerprint match alone is not
/// enough to reuse the chart.
#[derive(Debug)]
struct LastBuild {
    fingerprint: u64,
    table: ColumnarTable,
    mapping: LevelColumnMapping,
    chart: Arc<OrgChart>,
}

impl LastBuild {
    fn matches(&self, fingerprint: u64, table: &ColumnarTable, mapping: &LevelColumnMapping) -> bool {
        self.fingerprint == fingerprint && self.mapping == *mapping && self.table == *table
    }
}

impl ChartMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leaf_naming(naming: LeafNaming) -> Self {
        Self {
            naming,
            last: None,
        }
    }

    /// Return the cached chart for identical input, otherwise rebuild.
    pub fn get_or_build(
        &mut self,
        table: &ColumnarTable,
        mapping: &LevelColumnMapping,
    ) -> Arc<OrgChart> {
        let fingerprint = fingerprint(table, mapping, self.naming);

        if let Some(last) = &self.last {
            if last.matches(fingerprint, table, mapping) {
                debug!(fingerprint, "Input unchanged, reusing org chart");
                return Arc::clone(&last.chart);
            }
        }

        let chart = Arc::new(
            TreeBuilder::new(mapping)
                .with_leaf_naming(self.naming)
                .build(table),
        );
        self.last = Some(LastBuild {
            fingerprint,
            table: table.clone(),
            mapping: mapping.clone(),
            chart: Arc::clone(&chart),
        });
        chart
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

fn fingerprint(table: &ColumnarTable, mapping: &LevelColumnMapping, naming: LeafNaming) -> u64 {
    let mut hasher = DefaultHasher::new();
    table.hash(&mut hasher);
    mapping.hash(&mut hasher);
    naming.hash(&mut hasher);
    hasher.finish()
}
