//! CLI output formatting.
//!
//! The `tree` and `check` subcommands print an information-first outline of
//! the built tree: each node's primary line is its positional index plus
//! display title, with the synthesized path as an indented `Path:` context
//! line. Format functions are pure (return `Vec<String>`, no I/O) with
//! `print_*` wrappers, so tests assert on lines directly.
//!
//! ```text
//! 001 Documentation
//!     Path: docs
//!     001 install
//!         Path: docs/install
//!     002 api
//!         Path: docs/api
//! 002 Blog (hidden)
//!     Path: blog
//!
//! 6 pages, 8 nodes (2 directories), 1 hidden
//! ```

use crate::path;
use crate::types::{NodeKind, Page, Tree, TreeNode};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Display title for a node: page title, else its segment name.
fn node_title(node: &TreeNode) -> &str {
    match node.page() {
        Some(page) if !page.title.is_empty() => &page.title,
        _ => &node.segment,
    }
}

/// Marker appended to the header line for non-plain nodes.
fn node_detail(node: &TreeNode) -> Option<&'static str> {
    match &node.kind {
        NodeKind::Directory => Some("directory"),
        NodeKind::Page(page) if page.hidden => Some("hidden"),
        NodeKind::Page(_) => None,
    }
}

/// Format the tree as an indented outline.
pub fn format_tree(tree: &Tree) -> Vec<String> {
    let mut lines = Vec::new();
    format_level(&tree.children, 0, &mut lines);
    lines
}

fn format_level(nodes: &[TreeNode], depth: usize, lines: &mut Vec<String>) {
    for (pos, node) in nodes.iter().enumerate() {
        let header = match node_detail(node) {
            Some(detail) => format!(
                "{}{} {} ({})",
                indent(depth),
                format_index(pos + 1),
                node_title(node),
                detail
            ),
            None => format!(
                "{}{} {}",
                indent(depth),
                format_index(pos + 1),
                node_title(node)
            ),
        };
        lines.push(header);
        lines.push(format!("{}Path: {}", indent(depth + 1), node.path));
        format_level(&node.children, depth + 1, lines);
    }
}

/// Format the check summary: counts and degenerate inputs.
pub fn format_check(pages: &[Page], tree: &Tree) -> Vec<String> {
    let (nodes, directories) = count_nodes(&tree.children);
    let hidden = pages.iter().filter(|p| p.hidden).count();
    let blank_ids = pages.iter().filter(|p| p.id.is_empty()).count();

    // Ids collide at the node they decompose to, so "a/b" and "a/b/index"
    // count as duplicates.
    let mut sorted_ids: Vec<String> = pages.iter().map(|p| path::normalize(&p.id)).collect();
    sorted_ids.sort_unstable();
    let duplicates = sorted_ids.windows(2).filter(|w| w[0] == w[1]).count();

    let mut lines = vec![format!(
        "{} pages, {} nodes ({} directories), {} hidden",
        pages.len(),
        nodes,
        directories,
        hidden
    )];
    if tree.root_page.is_some() {
        lines.push("Root page present (not listed)".to_string());
    }
    if blank_ids > 0 {
        lines.push(format!("{blank_ids} pages with blank ids (treated as root)"));
    }
    if duplicates > 0 {
        lines.push(format!("{duplicates} duplicate ids (last one wins)"));
    }
    lines
}

fn count_nodes(nodes: &[TreeNode]) -> (usize, usize) {
    let mut total = 0;
    let mut directories = 0;
    for node in nodes {
        total += 1;
        if node.page().is_none() {
            directories += 1;
        }
        let (t, d) = count_nodes(&node.children);
        total += t;
        directories += d;
    }
    (total, directories)
}

/// Print the tree outline to stdout.
pub fn print_tree(tree: &Tree) {
    for line in format_tree(tree) {
        println!("{line}");
    }
}

/// Print the check summary to stdout.
pub fn print_check(pages: &[Page], tree: &Tree) {
    for line in format_check(pages, tree) {
        println!("{line}");
    }
}
