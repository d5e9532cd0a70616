//! Subtree statistics.
//!
//! Direct and total subordinate counts are derived once the full node list
//! exists. The traversal is an explicit post-order stack, so depth is bounded
//! by heap rather than the call stack.

use std::collections::HashMap;

use crate::node::OrgNode;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    Open,
    Done,
}

/// Fill `direct_subordinates` and `total_subordinates` for every node.
///
/// Works for any creation order. Nodes whose parent is not in the list count
/// as roots; a parent link that would close a cycle is ignored.
pub fn annotate(nodes: &mut [OrgNode]) {
    let children = child_lists(nodes);
    let mut totals = vec![0usize; nodes.len()];
    let mut state = vec![Visit::Pending; nodes.len()];
    // Children actually counted for each node (cycle-closing edges dropped)
    let mut counted: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];

    for start in 0..nodes.len() {
        if state[start] != Visit::Pending {
            continue;
        }

        let mut stack = vec![(start, false)];
        while let Some((idx, expanded)) = stack.pop() {
            if expanded {
                totals[idx] = counted[idx].iter().map(|&c| 1 + totals[c]).sum();
                state[idx] = Visit::Done;
                continue;
            }
            if state[idx] != Visit::Pending {
                continue;
            }

            state[idx] = Visit::Open;
            stack.push((idx, true));
            for &child in children[idx].iter().rev() {
                match state[child] {
                    Visit::Open => {}
                    Visit::Pending => {
                        counted[idx].push(child);
                        stack.push((child, false));
                    }
                    Visit::Done => counted[idx].push(child),
                }
            }
        }
    }

    for (idx, node) in nodes.iter_mut().enumerate() {
        node.direct_subordinates = counted[idx].len();
        node.total_subordinates = totals[idx];
    }
}

/// Children of each node by index, in node order.
fn child_lists(nodes: &[OrgNode]) -> Vec<Vec<usize>> {
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let mut children = vec![Vec::new(); nodes.len()];
    for (idx, node) in nodes.iter().enumerate() {
        if let Some(&parent) = node.parent_id.as_deref().and_then(|p| index.get(p)) {
            if parent != idx {
                children[parent].push(idx);
            }
        }
    }
    children
}
