//! Shared types: the flat page records consumed from the CMS host and the
//! nested tree built from them.
//!
//! `Page` is deserialized from whatever the host hands over; fields beyond
//! the ones this crate reads are kept verbatim in `extra` so templates that
//! iterate the tree directly still see them.

use serde::{Deserialize, Serialize};

/// One content page as loaded by the CMS host.
///
/// `id` is the slash-delimited path identifier, possibly ending in `/index`
/// for a directory's landing page. Every field is optional on the wire —
/// a page with no title or url still occupies its spot in the tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Slash-delimited path identifier (e.g. `"docs/install/index"`)
    #[serde(default)]
    pub id: String,
    /// Absolute or site-relative URL the rendered link points at
    #[serde(default)]
    pub url: String,
    /// Display title; empty falls back to the url basename, then the segment
    #[serde(default)]
    pub title: String,
    /// Hidden pages keep their place in the tree but are never rendered
    #[serde(default)]
    pub hidden: bool,
    /// Host-specific fields this crate doesn't interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// What a tree node stands for: a real page, or a directory synthesized
/// because some page's path passes through it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Directory,
    Page(Page),
}

/// One node of the navigation tree.
///
/// `path` is the full slash-joined path from the root, synthesized for
/// directory nodes so filters and active-path checks can address them the
/// same way as real pages. Children keep first-insertion order; lookup is
/// always by segment name, never by position.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub segment: String,
    pub path: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// New empty directory node at the given path.
    pub fn directory(segment: &str, path: &str) -> Self {
        TreeNode {
            segment: segment.to_string(),
            path: path.to_string(),
            kind: NodeKind::Directory,
            children: Vec::new(),
        }
    }

    /// The real page at this node, if any.
    pub fn page(&self) -> Option<&Page> {
        match &self.kind {
            NodeKind::Page(page) => Some(page),
            NodeKind::Directory => None,
        }
    }

    /// Child lookup by segment name.
    pub fn child(&self, segment: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.segment == segment)
    }
}

/// The whole navigation tree.
///
/// The root itself is never rendered or matched; a page whose id decomposes
/// to the empty segment sequence (the site root, e.g. `"index"`) is stored
/// in `root_page` and stays invisible to list rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tree {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_page: Option<Page>,
    pub children: Vec<TreeNode>,
}

impl Tree {
    /// Walk the tree along a slash-delimited path. Returns `None` when any
    /// segment is missing.
    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut node = self.children.iter().find(|c| c.segment == first)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }
}
