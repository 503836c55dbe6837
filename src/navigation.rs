//! One render cycle, tied together.
//!
//! [`Navigation`] is the context object a host builds once per request:
//! it resolves page ids relative to the configured base url, builds the
//! tree, and exposes the three conventional render entry points —
//!
//! - [`Navigation::render`]: the bare list (config `hide_pages` applied
//!   as an exclude filter),
//! - [`Navigation::render_only`]: keep only the targeted subtrees,
//! - [`Navigation::render_exclude`]: drop the targeted subtrees —
//!
//! plus the built [`Tree`] itself for templates that iterate by hand.
//! Each `Navigation` owns its tree; concurrent renders each build their
//! own and nothing is shared or cached across cycles.

use crate::config::NavConfig;
use crate::filter::{self, FilterMode};
use crate::path;
use crate::render;
use crate::tree;
use crate::types::{Page, Tree};

/// Immutable context for a single render cycle.
#[derive(Debug, Clone)]
pub struct Navigation {
    tree: Tree,
    current: Option<String>,
    hide_pages: Vec<String>,
}

impl Navigation {
    /// Build the tree from the host's page snapshot.
    ///
    /// A page with an empty `id` but a url gets its id derived by
    /// stripping the configured base url; `current_url` goes through the
    /// same stripping so both sides compare on site-relative paths.
    pub fn new(pages: &[Page], current_url: Option<&str>, config: &NavConfig) -> Self {
        let resolved: Vec<Page> = pages
            .iter()
            .map(|page| {
                let mut page = page.clone();
                if page.id.is_empty() && !page.url.is_empty() {
                    page.id = path::strip_base(&page.url, &config.base_url).to_string();
                }
                page
            })
            .collect();
        Navigation {
            tree: tree::build(&resolved),
            current: current_url.map(|url| path::strip_base(url, &config.base_url).to_string()),
            hide_pages: config.hide_pages.clone(),
        }
    }

    /// The built tree, for custom iteration.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Render the full navigation list, minus the configured `hide_pages`.
    pub fn render(&self) -> String {
        self.render_exclude(&[])
    }

    /// Render only the subtrees matching `targets`.
    pub fn render_only(&self, targets: &[String]) -> String {
        let nodes = self.hidden_pruned();
        let kept = filter::filter(&nodes, targets, FilterMode::Only);
        self.to_html(&kept)
    }

    /// Render everything except the subtrees matching `targets`.
    pub fn render_exclude(&self, targets: &[String]) -> String {
        let nodes = self.hidden_pruned();
        let kept = filter::filter(&nodes, targets, FilterMode::Exclude);
        self.to_html(&kept)
    }

    fn hidden_pruned(&self) -> Vec<crate::types::TreeNode> {
        filter::filter(&self.tree.children, &self.hide_pages, FilterMode::Exclude)
    }

    fn to_html(&self, nodes: &[crate::types::TreeNode]) -> String {
        render::render(nodes, self.current.as_deref())
            .map(|markup| markup.into_string())
            .unwrap_or_default()
    }
}
