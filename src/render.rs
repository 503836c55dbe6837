//! Nested list rendering.
//!
//! Walks a (possibly filtered) sibling list and emits `<ul>`/`<li>` markup
//! with [maud]. Each item carries a class token set templates can style
//! against:
//!
//! - the node's segment name,
//! - `is-page` or `is-directory`,
//! - `has-childs` when the nested list below it is non-empty,
//! - `is-current` on the node whose page is being served,
//! - `is-active` on every ancestor of the current page.
//!
//! Current/active comparisons run on normalized ids, so serving
//! `"a/b/index"` marks the `"a/b"` node current. Hidden pages never appear;
//! a hidden page whose children are visible degrades to an inert directory
//! label so the children stay reachable.
//!
//! [maud]: https://maud.lambda.xyz/

use crate::path;
use crate::types::{Page, TreeNode};
use maud::{Markup, html};

/// Render a sibling list as a nested `<ul>`, or `None` when nothing in it
/// is visible — empty branches emit no empty containers.
///
/// `current` is the id (or base-stripped url path) of the page being
/// served; `None` renders without current/active marks.
pub fn render(nodes: &[TreeNode], current: Option<&str>) -> Option<Markup> {
    let current = current.map(path::normalize);
    render_list(nodes, current.as_deref())
}

fn render_list(nodes: &[TreeNode], current: Option<&str>) -> Option<Markup> {
    let items: Vec<Markup> = nodes
        .iter()
        .filter_map(|node| render_item(node, current))
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(html! {
        ul {
            @for item in &items { (item) }
        }
    })
}

fn render_item(node: &TreeNode, current: Option<&str>) -> Option<Markup> {
    let nested = render_list(&node.children, current);

    // A hidden page renders as a directory label when its children are
    // visible, and not at all when they aren't.
    let page = node.page().filter(|p| !p.hidden);
    if node.page().is_some_and(|p| p.hidden) && nested.is_none() {
        return None;
    }

    let mut classes = vec![node.segment.as_str()];
    classes.push(if page.is_some() { "is-page" } else { "is-directory" });
    if nested.is_some() {
        classes.push("has-childs");
    }
    if let Some(current) = current {
        if page.is_some() && node.path == current {
            classes.push("is-current");
        }
        if !node.path.is_empty()
            && current.len() > node.path.len()
            && current.starts_with(&node.path)
            && current.as_bytes()[node.path.len()] == b'/'
        {
            classes.push("is-active");
        }
    }
    let class = classes.join(" ");

    Some(html! {
        li class=(class) {
            @match page {
                Some(page) => { a href=(page.url) { (label(page, &node.segment)) } }
                None => { span { (node.segment) } }
            }
            @if let Some(nested) = &nested { (nested) }
        }
    })
}

/// Link text: title, else url basename, else the segment name.
fn label<'a>(page: &'a Page, segment: &'a str) -> &'a str {
    if !page.title.is_empty() {
        return &page.title;
    }
    let basename = page.url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if basename.is_empty() { segment } else { basename }
}
