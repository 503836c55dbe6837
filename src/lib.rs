//! # Pages List
//!
//! A nested navigation list for flat-file CMS sites. The host hands over its
//! flat page collection (slash-delimited ids like `"docs/install/index"`);
//! this crate builds a rooted tree out of the shared path prefixes and
//! renders it as nested `<ul>`/`<li>` HTML with current- and active-path
//! classes, ready to drop into a template.
//!
//! # Architecture: Build, Filter, Render
//!
//! Three pure transformations, each consuming the previous one's output:
//!
//! ```text
//! 1. Build    pages      →  Tree            (flat ids → nested nodes)
//! 2. Filter   Tree       →  pruned nodes    (only / exclude by path prefix)
//! 3. Render   nodes      →  HTML            (nested lists + state classes)
//! ```
//!
//! The pipeline runs once per render cycle over an immutable page snapshot.
//! Nothing is cached across cycles and nothing is shared between concurrent
//! renders — each [`navigation::Navigation`] owns its tree. All three stages
//! absorb degenerate input (blank ids, duplicate ids, unknown filter
//! targets, missing current page) by degrading output, never by failing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`path`] | Id decomposition (`index` collapsing), base-url stripping, the one prefix-match rule |
//! | [`tree`] | Merges every page's segment chain into one rooted tree, synthesizing directory nodes |
//! | [`filter`] | Inclusive ("only") and exclusive ("exclude") subtree pruning by target paths |
//! | [`render`] | Maud rendering: nested lists, `is-page`/`is-directory`/`has-childs`/`is-current`/`is-active` |
//! | [`navigation`] | Per-render-cycle façade tying strip → build → filter → render together |
//! | [`types`] | `Page`, `TreeNode`, `NodeKind`, `Tree` |
//! | [`config`] | `nav.toml` loading: `base_url`, `hide_pages` |
//! | [`output`] | CLI output formatting — indented outline of the built tree |
//!
//! # Design Decisions
//!
//! ## One Node Per Path Prefix
//!
//! Pages `"a"` and `"a/b"` must coexist: inserting `"a/b"` reuses the node
//! created for `"a"`, and inserting `"a"` after `"a/b"` enriches the
//! existing directory node in place. The builder descends insert-or-get on
//! owned children ([`tree::build`]), so page order never changes the
//! resulting structure — the only order-sensitive case is two pages with
//! the identical id, where the later one wins.
//!
//! ## Tagged Nodes, Not Field Sniffing
//!
//! A node is [`types::NodeKind::Directory`] or [`types::NodeKind::Page`] —
//! a real variant tag, checked by match. Synthetic directory nodes still
//! carry a joined path so filters and active-path checks address every node
//! uniformly.
//!
//! ## One Prefix Rule Everywhere
//!
//! Filters, the config hide list, and active-path marking all use the same
//! match: a path matches a target iff it equals it (modulo a trailing `/`)
//! or continues it across a `/` boundary. `"ab"` never matches `"a"`. The
//! rule lives in [`path::matches_target`] and nowhere else.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked templates, auto-escaped interpolation, no runtime template files.
//! Page titles land in the markup XSS-safe by default.

pub mod config;
pub mod filter;
pub mod navigation;
pub mod output;
pub mod path;
pub mod render;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
