//! Shared test utilities for the pages-list test suite.
//!
//! Page fixtures are built from ids alone — the url is derived
//! (`"a/b"` → `"/a/b/"`) so tests read as path lists, and shape
//! assertions compare trees structurally without caring about sibling
//! order.

use crate::types::{Page, Tree, TreeNode};

/// A visible, untitled page at the given id.
pub fn page(id: &str) -> Page {
    Page {
        id: id.to_string(),
        url: if id.is_empty() {
            "/".to_string()
        } else {
            format!("/{id}/")
        },
        ..Page::default()
    }
}

/// A visible page with a display title.
pub fn titled_page(id: &str, title: &str) -> Page {
    Page {
        title: title.to_string(),
        ..page(id)
    }
}

/// A page flagged hidden.
pub fn hidden_page(id: &str) -> Page {
    Page {
        hidden: true,
        ..page(id)
    }
}

/// Owned target list from string literals.
pub fn targets(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

/// Assert two trees have the same structure: same node paths, same
/// page/directory kinds, same parent-child relations. Sibling order is
/// ignored — it legitimately follows insertion order.
pub fn assert_same_shape(a: &Tree, b: &Tree) {
    assert_eq!(
        a.root_page.is_some(),
        b.root_page.is_some(),
        "root page presence mismatch"
    );
    assert_same_children(&a.children, &b.children);
}

fn assert_same_children(a: &[TreeNode], b: &[TreeNode]) {
    let mut a_sorted: Vec<&TreeNode> = a.iter().collect();
    let mut b_sorted: Vec<&TreeNode> = b.iter().collect();
    a_sorted.sort_by(|x, y| x.segment.cmp(&y.segment));
    b_sorted.sort_by(|x, y| x.segment.cmp(&y.segment));

    let a_paths: Vec<&str> = a_sorted.iter().map(|n| n.path.as_str()).collect();
    let b_paths: Vec<&str> = b_sorted.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(a_paths, b_paths, "sibling sets differ");

    for (left, right) in a_sorted.iter().zip(&b_sorted) {
        assert_eq!(
            left.page().map(|p| p.id.as_str()),
            right.page().map(|p| p.id.as_str()),
            "node kind mismatch at '{}'",
            left.path
        );
        assert_same_children(&left.children, &right.children);
    }
}
