//! Subtree filtering by path targets.
//!
//! Both modes share one prefix rule ([`path::matches_target`]): a node
//! matches a target when its path equals the target or sits strictly below
//! it. What happens on a match depends on the mode:
//!
//! - **Exclude**: matching nodes vanish with their whole subtree; everything
//!   else is kept as a recursively pruned copy. An empty target set keeps
//!   everything.
//! - **Only**: matching nodes are kept verbatim — a match short-circuits
//!   deeper filtering for that branch. Non-matching nodes are not kept
//!   themselves but their children are still searched, and any matches
//!   surface as siblings in the result. An empty target set keeps nothing.
//!
//! Filtering never mutates the input tree or the page data inside kept
//! nodes; targets naming nodes that don't exist are harmless, and blank
//! targets never match.

use crate::path;
use crate::types::TreeNode;

/// Keep-matches vs drop-matches semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Drop matching subtrees, keep the rest.
    Exclude,
    /// Keep only matching subtrees.
    Only,
}

/// Filter a sibling list against a target set.
pub fn filter(nodes: &[TreeNode], targets: &[String], mode: FilterMode) -> Vec<TreeNode> {
    match mode {
        FilterMode::Exclude => exclude(nodes, targets),
        FilterMode::Only => only(nodes, targets),
    }
}

fn matches_any(node: &TreeNode, targets: &[String]) -> bool {
    targets.iter().any(|t| path::matches_target(&node.path, t))
}

fn exclude(nodes: &[TreeNode], targets: &[String]) -> Vec<TreeNode> {
    nodes
        .iter()
        .filter(|node| !matches_any(node, targets))
        .map(|node| TreeNode {
            segment: node.segment.clone(),
            path: node.path.clone(),
            kind: node.kind.clone(),
            children: exclude(&node.children, targets),
        })
        .collect()
}

fn only(nodes: &[TreeNode], targets: &[String]) -> Vec<TreeNode> {
    let mut kept = Vec::new();
    for node in nodes {
        if matches_any(node, targets) {
            kept.push(node.clone());
        } else {
            kept.extend(only(&node.children, targets));
        }
    }
    kept
}
