//! TreeBuilder - reconstructs the business-unit hierarchy from denormalized rows
//!
//! Every row carries its full ancestor chain, one encoded level string per
//! column. The builder:
//! - Walks each row's level columns from the root until the first empty cell
//! - Parses each level, skipping (and recording) rejected ones
//! - Identifies nodes by the pipe-joined raw level strings of their path, so
//!   rows sharing a prefix share the ancestor nodes
//! - Computes subordinate counts once every node exists
//!
//! The id lookup table lives only for one `build` call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::chart::OrgChart;
use crate::diagnostics::BuildDiagnostics;
use crate::level::parse_level;
use crate::mapping::{LevelColumnMapping, ResolvedColumns};
use crate::node::{OrgNode, ID_SEPARATOR};
use crate::stats::annotate;
use crate::table::{cell_text, ColumnarTable};

/// How to name a node first created as a row's leaf once a later row extends
/// the path beneath it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafNaming {
    /// Keep the name assigned at creation (the creating row's full name).
    #[default]
    FirstWrite,
    /// Rename to the parsed unit name when the node turns out to be an ancestor.
    Promote,
}

/// Builds an [`OrgChart`] from a columnar table.
#[derive(Debug, Clone)]
pub struct TreeBuilder<'m> {
    mapping: &'m LevelColumnMapping,
    naming: LeafNaming,
}

impl<'m> TreeBuilder<'m> {
    pub fn new(mapping: &'m LevelColumnMapping) -> Self {
        Self {
            mapping,
            naming: LeafNaming::default(),
        }
    }

    pub fn with_leaf_naming(mut self, naming: LeafNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Build the chart. Never fails: a mapping that does not fit the table
    /// gives an empty chart with the reason in its diagnostics.
    pub fn build(&self, table: &ColumnarTable) -> OrgChart {
        let columns = match self.mapping.resolve(table) {
            Ok(columns) => columns,
            Err(err) => {
                warn!(code = err.code(), "Missing required columns in data: {}", err);
                return OrgChart::from_parts(Vec::new(), BuildDiagnostics::config_missing(err));
            }
        };

        let mut pass = BuildPass::new(self.naming);
        for row in 0..columns.row_count {
            pass.add_row(&columns, row);
        }

        let BuildPass {
            mut nodes,
            diagnostics,
            ..
        } = pass;
        annotate(&mut nodes);

        info!(
            nodes = nodes.len(),
            rows = diagnostics.rows_seen,
            rows_skipped = diagnostics.rows_skipped,
            levels_rejected = diagnostics.levels_rejected(),
            "Built org chart"
        );

        OrgChart::from_parts(nodes, diagnostics)
    }
}

/// Build with the default leaf naming.
pub fn build_org_chart(table: &ColumnarTable, mapping: &LevelColumnMapping) -> OrgChart {
    TreeBuilder::new(mapping).build(table)
}

/// Build and return just the node list.
pub fn build_nodes(table: &ColumnarTable, mapping: &LevelColumnMapping) -> Vec<OrgNode> {
    build_org_chart(table, mapping).into_nodes()
}

/// State of a single pass over the rows.
struct BuildPass {
    naming: LeafNaming,
    nodes: Vec<OrgNode>,
    /// id -> index into `nodes`
    index: HashMap<String, usize>,
    /// Nodes created as the deepest level of their row
    created_as_leaf: Vec<bool>,
    diagnostics: BuildDiagnostics,
}

impl BuildPass {
    fn new(naming: LeafNaming) -> Self {
        Self {
            naming,
            nodes: Vec::new(),
            index: HashMap::new(),
            created_as_leaf: Vec::new(),
            diagnostics: BuildDiagnostics::new(),
        }
    }

    fn add_row(&mut self, columns: &ResolvedColumns<'_>, row: usize) {
        self.diagnostics.rows_seen += 1;

        // Levels are contiguous from the root; the first gap ends the chain
        let chain: Vec<(usize, &str)> = columns
            .levels
            .iter()
            .map_while(|&(level, cells)| cell_text(cells, row).map(|raw| (level, raw)))
            .collect();

        if chain.is_empty() {
            self.diagnostics.rows_skipped += 1;
            return;
        }

        let last = chain.len() - 1;
        let mut path = String::new();
        let mut parent: Option<usize> = None;
        // Leaf-created node waiting to be renamed once something attaches below it
        let mut promotion: Option<(usize, String)> = None;

        for (position, &(level, raw)) in chain.iter().enumerate() {
            if position > 0 {
                path.push(ID_SEPARATOR);
            }
            path.push_str(raw);

            let parsed = match parse_level(Some(raw)) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(row, level, raw = %raw, "Skipping invalid level string");
                    self.diagnostics.reject(row, level, err);
                    continue;
                }
            };

            if let Some((idx, name)) = promotion.take() {
                self.nodes[idx].name = name;
                self.created_as_leaf[idx] = false;
            }

            if let Some(&existing) = self.index.get(path.as_str()) {
                if position < last
                    && self.naming == LeafNaming::Promote
                    && self.created_as_leaf[existing]
                {
                    promotion = Some((existing, parsed.name));
                }
                parent = Some(existing);
                continue;
            }

            let is_leaf = position == last;
            let name = if is_leaf {
                match cell_text(columns.full_name, row) {
                    Some(full_name) => full_name.to_string(),
                    None => {
                        self.diagnostics.missing_full_names += 1;
                        parsed.name.clone()
                    }
                }
            } else {
                parsed.name.clone()
            };

            let parent_id = parent.map(|p| self.nodes[p].id.clone());
            let node = OrgNode::new(path.clone(), parent_id, name, parsed.name)
                .with_codes(parsed.business_unit_code, parsed.bebl_code);

            let idx = self.nodes.len();
            self.nodes.push(node);
            self.created_as_leaf.push(is_leaf);
            self.index.insert(path.clone(), idx);
            parent = Some(idx);
        }
    }
}
