//! Centralized path-identifier handling.
//!
//! Page identifiers are slash-delimited (`"docs/install/index"`). Everything
//! that interprets them lives here so the builder, the filter, and the
//! renderer agree on one set of rules:
//!
//! - A trailing literal `index` segment is dropped, so `"a/b/index"` and
//!   `"a/b"` name the same tree node (a directory's landing page collapses
//!   to the directory's path).
//! - An empty id names the site root (empty segment sequence).
//! - No case folding, no slash deduplication — malformed ids pass through
//!   unchanged; degraded output beats a crash.

/// Split an id into its path segments, dropping a trailing `index`.
///
/// - `"a/b/index"` → `["a", "b"]`
/// - `"a/b"` → `["a", "b"]`
/// - `"index"` → `[]`
/// - `""` → `[]`
pub fn decompose(id: &str) -> Vec<&str> {
    if id.is_empty() {
        return Vec::new();
    }
    let mut segments: Vec<&str> = id.split('/').collect();
    if segments.last() == Some(&"index") {
        segments.pop();
    }
    segments
}

/// Canonical form of an id: its segments rejoined with `/`.
///
/// Current-page comparisons go through this so `"a/b/index"` marks the
/// `"a/b"` node current.
pub fn normalize(id: &str) -> String {
    decompose(id).join("/")
}

/// Strip a site base url (with or without trailing `/`) off a page url,
/// along with any surrounding slashes, yielding the path identifier the
/// decomposer expects. Urls outside the base pass through minus the slashes.
pub fn strip_base<'a>(url: &'a str, base_url: &str) -> &'a str {
    let base = base_url.trim_end_matches('/');
    // The base only counts when it ends on a path boundary, so a host that
    // merely shares a string prefix isn't mangled.
    let rest = match url.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => url,
    };
    rest.trim_start_matches('/').trim_end_matches('/')
}

/// Prefix-match a node path against a filter target.
///
/// Matches iff `path` equals the target (ignoring a trailing `/` on the
/// target) or lies strictly below it: `"a/b"` matches targets `"a/b"`,
/// `"a/b/"` and `"a"`, but `"ab"` never matches target `"a"`. Blank
/// targets match nothing.
pub fn matches_target(path: &str, target: &str) -> bool {
    let target = target.trim().trim_end_matches('/');
    if target.is_empty() {
        return false;
    }
    match path.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_splits_on_slashes() {
        assert_eq!(decompose("a/b/c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_index_is_dropped() {
        assert_eq!(decompose("a/b/index"), vec!["a", "b"]);
    }

    #[test]
    fn index_collapsing_equivalence() {
        assert_eq!(decompose("a/b/index"), decompose("a/b"));
    }

    #[test]
    fn bare_index_is_the_root() {
        assert_eq!(decompose("index"), Vec::<&str>::new());
    }

    #[test]
    fn empty_id_is_the_root() {
        assert_eq!(decompose(""), Vec::<&str>::new());
    }

    #[test]
    fn single_segment() {
        assert_eq!(decompose("about"), vec!["about"]);
    }

    #[test]
    fn interior_index_is_kept() {
        assert_eq!(decompose("index/sub"), vec!["index", "sub"]);
    }

    #[test]
    fn no_case_folding() {
        assert_eq!(decompose("A/Index"), vec!["A", "Index"]);
    }

    #[test]
    fn repeated_slashes_propagate_as_is() {
        assert_eq!(decompose("a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn normalize_collapses_index() {
        assert_eq!(normalize("a/b/index"), "a/b");
        assert_eq!(normalize("index"), "");
    }

    #[test]
    fn strip_base_with_and_without_trailing_slash() {
        assert_eq!(strip_base("http://site/a/b", "http://site/"), "a/b");
        assert_eq!(strip_base("http://site/a/b", "http://site"), "a/b");
    }

    #[test]
    fn strip_base_drops_trailing_slash() {
        assert_eq!(strip_base("http://site/a/b/", "http://site"), "a/b");
    }

    #[test]
    fn strip_base_on_foreign_url_only_trims_slashes() {
        assert_eq!(strip_base("/a/b/", "http://site"), "a/b");
    }

    #[test]
    fn strip_base_needs_a_path_boundary_after_the_base() {
        assert_eq!(strip_base("http://site2/x", "http://site/"), "http://site2/x");
        assert_eq!(strip_base("http://site2/x", "http://site"), "http://site2/x");
    }

    #[test]
    fn strip_base_of_root_url_is_empty() {
        assert_eq!(strip_base("http://site/", "http://site"), "");
    }

    #[test]
    fn target_matches_exact_path() {
        assert!(matches_target("a/b", "a/b"));
    }

    #[test]
    fn target_matches_descendants() {
        assert!(matches_target("a/b/c", "a/b"));
    }

    #[test]
    fn target_with_trailing_slash_matches_itself_and_below() {
        assert!(matches_target("a/b", "a/b/"));
        assert!(matches_target("a/b/c", "a/b/"));
    }

    #[test]
    fn sibling_prefix_does_not_match() {
        assert!(!matches_target("ab", "a"));
        assert!(!matches_target("a/bc", "a/b"));
    }

    #[test]
    fn ancestor_does_not_match_deeper_target() {
        assert!(!matches_target("a", "a/b"));
    }

    #[test]
    fn blank_target_never_matches() {
        assert!(!matches_target("a", ""));
        assert!(!matches_target("a", "   "));
        assert!(!matches_target("a", "/"));
    }
}
