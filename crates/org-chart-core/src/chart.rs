//! OrgChart - immutable result of a build.
//!
//! Holds the node list in first-encountered order together with an id index
//! and the build diagnostics. Nodes are only handed out by shared reference,
//! so a chart can be shared across threads behind an `Arc`.

use serde::Serialize;
use std::collections::HashMap;

use crate::diagnostics::BuildDiagnostics;
use crate::node::{OrgNode, SearchResult};
use crate::search::search;

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrgChart {
    nodes: Vec<OrgNode>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    diagnostics: BuildDiagnostics,
}

impl OrgChart {
    /// Wrap an annotated node list.
    pub fn from_parts(nodes: Vec<OrgNode>, diagnostics: BuildDiagnostics) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Self {
            nodes,
            index,
            diagnostics,
        }
    }

    pub fn nodes(&self) -> &[OrgNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<OrgNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn diagnostics(&self) -> &BuildDiagnostics {
        &self.diagnostics
    }

    /// Lookup by node id.
    pub fn get(&self, id: &str) -> Option<&OrgNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn roots(&self) -> impl Iterator<Item = &OrgNode> {
        self.nodes.iter().filter(|n| n.is_root())
    }

    /// Direct children of `id`, in node order.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a OrgNode> + 'a {
        self.nodes
            .iter()
            .filter(move |n| n.parent_id.as_deref() == Some(id))
    }

    /// Path from `id` up to its root, starting with the node itself.
    /// Empty if `id` is unknown.
    pub fn ancestors(&self, id: &str) -> Vec<&OrgNode> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            // Guard against malformed parent links in hand-built charts
            if path.len() > self.nodes.len() {
                break;
            }
            path.push(node);
            current = node.parent_id.as_deref().and_then(|p| self.get(p));
        }
        path
    }

    /// See [`search`](crate::search::search).
    pub fn search(&self, term: &str) -> Vec<&OrgNode> {
        search(&self.nodes, term)
    }

    pub fn search_results(&self, term: &str) -> Vec<SearchResult> {
        self.search(term).into_iter().map(SearchResult::from).collect()
    }
}
