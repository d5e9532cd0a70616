//! Output node and search result types.
//!
//! Field names on the wire match what the chart renderer reads
//! (`parentId`, `_directSubordinates`, ...).

use serde::{Deserialize, Serialize};

/// Separator between raw level strings in a node id.
pub const ID_SEPARATOR: char = '|';

/// One unique business unit in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgNode {
    /// Pipe-joined raw level strings from the root down to this node.
    pub id: String,
    /// `None` for roots.
    pub parent_id: Option<String>,
    /// Leaf rows carry the row's full name here, ancestors the parsed unit name.
    pub name: String,
    pub business_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bebl_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_unit_code: Option<String>,

    // =========================================================================
    // COMPUTED FIELDS - Set by stats::annotate
    // =========================================================================
    #[serde(rename = "_directSubordinates", default)]
    pub direct_subordinates: usize,
    #[serde(rename = "_totalSubordinates", default)]
    pub total_subordinates: usize,
}

impl OrgNode {
    pub fn new(
        id: impl Into<String>,
        parent_id: Option<String>,
        name: impl Into<String>,
        business_unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id,
            name: name.into(),
            business_unit: business_unit.into(),
            bebl_code: None,
            business_unit_code: None,
            direct_subordinates: 0,
            total_subordinates: 0,
        }
    }

    pub fn with_codes(
        mut self,
        business_unit_code: impl Into<String>,
        bebl_code: impl Into<String>,
    ) -> Self {
        self.business_unit_code = Some(business_unit_code.into());
        self.bebl_code = Some(bebl_code.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Compact search hit for dropdown-style consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub node_id: String,
    pub name: String,
    pub business_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bebl_code: Option<String>,
}

impl From<&OrgNode> for SearchResult {
    fn from(node: &OrgNode) -> Self {
        Self {
            node_id: node.id.clone(),
            name: node.name.clone(),
            business_unit: node.business_unit.clone(),
            bebl_code: node.bebl_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let mut node = OrgNode::new("A (1)-X", None, "A", "A").with_codes("1", "X");
        node.direct_subordinates = 2;
        node.total_subordinates = 5;

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["parentId"], serde_json::Value::Null);
        assert_eq!(json["businessUnit"], "A");
        assert_eq!(json["beblCode"], "X");
        assert_eq!(json["businessUnitCode"], "1");
        assert_eq!(json["_directSubordinates"], 2);
        assert_eq!(json["_totalSubordinates"], 5);
    }

    #[test]
    fn test_search_result_from_node() {
        let node = OrgNode::new("A (1)-X", None, "Alice", "A").with_codes("1", "X");
        let hit = SearchResult::from(&node);
        assert_eq!(hit.node_id, "A (1)-X");
        assert_eq!(hit.bebl_code.as_deref(), Some("X"));
    }
}
