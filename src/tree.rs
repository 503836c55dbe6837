//! Navigation tree construction.
//!
//! Takes the host's flat page collection and merges every page's segment
//! chain into one rooted tree. Intermediate segments that no real page
//! names become synthetic directory nodes carrying their joined path, so
//! filters and active-path checks can address them like any other node.
//!
//! ## Merge rules
//!
//! - Exactly one node per distinct path prefix: inserting `"a/b"` reuses
//!   the node `"a"` created earlier, and inserting `"a"` afterwards turns
//!   that existing directory node into a page node in place.
//! - A page, once attached, is never displaced by a later ancestor-only
//!   insertion. Two pages with the identical id are the one exception:
//!   the later one in iteration order wins.
//! - A page decomposing to the empty segment sequence (the root index) is
//!   stored on the tree itself, not as a child.
//!
//! Descent is insert-or-get on owned children, so the result is the same
//! whatever order the pages arrive in (up to sibling order and the
//! duplicate-id tie-break).

use crate::path;
use crate::types::{NodeKind, Page, Tree, TreeNode};

/// Build the navigation tree from the full page collection.
pub fn build(pages: &[Page]) -> Tree {
    let mut tree = Tree::default();
    for page in pages {
        insert(&mut tree, page.clone());
    }
    tree
}

/// Merge one page into the tree.
pub fn insert(tree: &mut Tree, page: Page) {
    let segments: Vec<String> = path::decompose(&page.id)
        .into_iter()
        .map(str::to_string)
        .collect();
    if segments.is_empty() {
        tree.root_page = Some(page);
        return;
    }
    insert_at(&mut tree.children, &segments, 0, page);
}

/// Walk/create nodes along `segments` starting at `depth`, attaching the
/// page at the final segment.
fn insert_at(siblings: &mut Vec<TreeNode>, segments: &[String], depth: usize, page: Page) {
    let segment = &segments[depth];
    let index = match siblings.iter().position(|c| &c.segment == segment) {
        Some(index) => index,
        None => {
            let node_path = segments[..=depth].join("/");
            siblings.push(TreeNode::directory(segment, &node_path));
            siblings.len() - 1
        }
    };
    let node = &mut siblings[index];
    if depth == segments.len() - 1 {
        // Duplicate ids resolve last-wins; directory nodes get enriched.
        node.kind = NodeKind::Page(page);
    } else {
        insert_at(&mut node.children, segments, depth + 1, page);
    }
}
