//! Node search.
//!
//! A linear, case-insensitive substring filter over name, business unit and
//! BEBL code. Results keep node order; there is no relevance ranking.

use crate::node::OrgNode;

/// Nodes whose name, business unit or BEBL code contains `term`.
///
/// An empty or whitespace-only term means "no query" and returns nothing.
/// The term is trimmed; the node fields are matched as stored.
pub fn search<'a>(nodes: &'a [OrgNode], term: &str) -> Vec<&'a OrgNode> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let term = term.to_lowercase();

    nodes.iter().filter(|node| matches(node, &term)).collect()
}

/// `term` must already be lower-cased.
fn matches(node: &OrgNode, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(&node.name)
        || contains(&node.business_unit)
        || node.bebl_code.as_deref().is_some_and(contains)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<OrgNode> {
        vec![
            OrgNode::new("1", None, "Jane Doe", "Sales (S1)").with_codes("S1", "J01"),
            OrgNode::new("2", None, "John Roe", "Ops").with_codes("O1", "J02"),
        ]
    }

    fn ids(hits: &[&OrgNode]) -> Vec<String> {
        hits.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_name_match() {
        let nodes = people();
        assert_eq!(ids(&search(&nodes, "jo")), vec!["2"]);
    }

    #[test]
    fn test_business_unit_matched_as_stored() {
        let nodes = people();
        // "Sales (S1)" lower-cases to "sales (s1)"
        assert_eq!(ids(&search(&nodes, "s1")), vec!["1"]);
        assert_eq!(ids(&search(&nodes, "(S1)")), vec!["1"]);
    }

    #[test]
    fn test_bebl_code_match_keeps_order() {
        let nodes = people();
        assert_eq!(ids(&search(&nodes, "J0")), vec!["1", "2"]);
        assert_eq!(ids(&search(&nodes, "j02")), vec!["2"]);
    }

    #[test]
    fn test_empty_term() {
        let nodes = people();
        assert!(search(&nodes, "").is_empty());
        assert!(search(&nodes, "   ").is_empty());
    }

    #[test]
    fn test_missing_bebl_code_and_no_match() {
        let nodes = vec![OrgNode::new("1", None, "Alpha", "Beta")];
        assert!(search(&nodes, "gamma").is_empty());
        assert_eq!(ids(&search(&nodes, " ALP ")), vec!["1"]);
    }
}
