//! Centralized URL generation with base-path support.
//!
//! The site is deployed under a sub-path (GitHub Pages project site:
//! `https://scamp34.github.io/Dashuka`), so every generated href needs the
//! base path prepended. Keeping the prefix logic in one place means a
//! deployment move only touches `config.toml`, not every template.
//!
//! ## Two directions
//!
//! - **Building** (`with_base`, `home_url`, `category_url`, `album_url`):
//!   route-relative path in, full site path out. Used by the templating layer
//!   for every href/src it emits.
//! - **Stripping** (`strip_base`): full observed path in, route-relative path
//!   out. Used by navigation highlighting, where the runtime-observed
//!   pathname includes the base path but nav entries are route-relative.
//!
//! ## Caller contract
//!
//! These are plain string concatenations. `with_base` performs no validation
//! and is not idempotent: calling it on an already-based path double-prefixes
//! (`/Dashuka/Dashuka/about`). Callers pass route-relative paths starting
//! with `/`, exactly once. The typed builders exist so call sites rarely
//! touch `with_base` directly; home, category, and album are the site's only
//! first-class route kinds.
//!
//! All operations are total: any string input produces a string output, no
//! errors, no panics.

/// Builds and strips site URLs around an immutable base path.
///
/// The base path is injected at construction (normally from
/// [`SiteConfig::resolver`](crate::config::SiteConfig::resolver), the same
/// value the build pipeline deploys under) rather than read from a global,
/// so tests can exercise any base path, including the empty root deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlResolver {
    base_path: String,
}

impl UrlResolver {
    /// Create a resolver for the given base path.
    ///
    /// An empty base path means the site is served at the domain root and
    /// every operation becomes a pass-through. No validation happens here;
    /// well-formedness (leading `/`, no trailing `/`) is enforced where the
    /// value is configured, in [`SiteConfig::validate`](crate::config::SiteConfig::validate).
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The configured base path, exactly as injected.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Whether the site is served at the domain root (empty base path).
    pub fn is_root(&self) -> bool {
        self.base_path.is_empty()
    }

    /// Prepend the base path to a route-relative path.
    ///
    /// Plain concatenation: `/about` becomes `/Dashuka/about`. The input is
    /// not inspected. Passing an already-based path double-prefixes it; see
    /// the module docs for the caller contract.
    pub fn with_base(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }

    /// Remove the base path from a full observed path.
    ///
    /// If the base path is non-empty and `path` starts with it, returns the
    /// remainder, or `/` when the remainder is empty (stripping the bare base
    /// path yields the root route, never the empty string). Any other input
    /// passes through unchanged, including everything when the base path is
    /// empty. Total over all string inputs.
    ///
    /// Matching is textual, not segment-aware: with base `/Dashuka`, the
    /// input `/Dashukax` strips to `x`. Observed paths come from the site's
    /// own links, which are built by this resolver, so the looser match never
    /// bites in practice.
    pub fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if !self.base_path.is_empty() {
            if let Some(rest) = path.strip_prefix(self.base_path.as_str()) {
                return if rest.is_empty() { "/" } else { rest };
            }
        }
        path
    }

    /// Full path of the home page: base path + `/`.
    pub fn home_url(&self) -> String {
        format!("{}/", self.base_path)
    }

    /// Full path of a category page: base path + `/category/` + id.
    ///
    /// `id` is an opaque, caller-supplied token assumed to be URL-safe; no
    /// escaping is performed.
    pub fn category_url(&self, id: &str) -> String {
        format!("{}/category/{}", self.base_path, id)
    }

    /// Full path of an album page: base path + `/album/` + id.
    ///
    /// `id` is an opaque, caller-supplied token assumed to be URL-safe; no
    /// escaping is performed.
    pub fn album_url(&self, id: &str) -> String {
        format!("{}/album/{}", self.base_path, id)
    }
}

/// Join a site origin and an already-based path into an absolute URL.
///
/// A trailing slash on the origin is trimmed so the path's leading slash is
/// the only separator: `https://scamp34.github.io` + `/Dashuka/album/42`.
/// Used for canonical links and anywhere the deployed hostname matters.
pub fn full_url(origin: &str, based_path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), based_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashuka() -> UrlResolver {
        UrlResolver::new("/Dashuka")
    }

    fn root() -> UrlResolver {
        UrlResolver::new("")
    }

    // =========================================================================
    // with_base
    // =========================================================================

    #[test]
    fn with_base_prepends_prefix() {
        assert_eq!(dashuka().with_base("/about"), "/Dashuka/about");
    }

    #[test]
    fn with_base_empty_base_is_identity() {
        assert_eq!(root().with_base("/about"), "/about");
        assert_eq!(root().with_base("/"), "/");
    }

    #[test]
    fn with_base_twice_double_prefixes() {
        // Pinned caller contract: no idempotence guard. A guard would change
        // observable output for any caller relying on plain concatenation.
        let r = dashuka();
        let once = r.with_base("/about");
        assert_eq!(r.with_base(&once), "/Dashuka/Dashuka/about");
    }

    #[test]
    fn with_base_does_not_validate_input() {
        assert_eq!(dashuka().with_base("about"), "/Dashukaabout");
        assert_eq!(dashuka().with_base(""), "/Dashuka");
    }

    // =========================================================================
    // strip_base
    // =========================================================================

    #[test]
    fn strip_base_removes_prefix() {
        assert_eq!(dashuka().strip_base("/Dashuka/about"), "/about");
    }

    #[test]
    fn strip_base_bare_base_path_yields_root() {
        assert_eq!(dashuka().strip_base("/Dashuka"), "/");
    }

    #[test]
    fn strip_base_unrelated_path_passes_through() {
        assert_eq!(dashuka().strip_base("/unrelated/path"), "/unrelated/path");
    }

    #[test]
    fn strip_base_empty_base_is_identity() {
        assert_eq!(root().strip_base("/Dashuka/about"), "/Dashuka/about");
        assert_eq!(root().strip_base("/about"), "/about");
        // Even the empty string passes through: the empty-remainder-to-root
        // rule only applies when a non-empty base path was actually stripped.
        assert_eq!(root().strip_base(""), "");
    }

    #[test]
    fn strip_base_is_textual_not_segment_aware() {
        // Prefix matching is plain starts_with, same as the original site.
        assert_eq!(dashuka().strip_base("/Dashukax"), "x");
    }

    #[test]
    fn strip_base_returns_borrowed_remainder() {
        let r = dashuka();
        let observed = String::from("/Dashuka/category/landscapes");
        let stripped = r.strip_base(&observed);
        assert_eq!(stripped, "/category/landscapes");
    }

    // =========================================================================
    // Round trips
    // =========================================================================

    #[test]
    fn strip_after_with_base_round_trips() {
        let r = dashuka();
        for p in ["/", "/about", "/category/landscapes", "/album/paris-2024"] {
            assert_eq!(r.strip_base(&r.with_base(p)), p);
        }
    }

    #[test]
    fn strip_home_url_yields_root() {
        assert_eq!(dashuka().strip_base(&dashuka().home_url()), "/");
        assert_eq!(root().strip_base(&root().home_url()), "/");
    }

    // =========================================================================
    // Typed builders
    // =========================================================================

    #[test]
    fn home_url_is_base_plus_slash() {
        assert_eq!(dashuka().home_url(), "/Dashuka/");
        assert_eq!(root().home_url(), "/");
    }

    #[test]
    fn category_url_builds_category_route() {
        assert_eq!(
            dashuka().category_url("landscapes"),
            "/Dashuka/category/landscapes"
        );
        assert_eq!(root().category_url("landscapes"), "/category/landscapes");
    }

    #[test]
    fn album_url_builds_album_route() {
        assert_eq!(dashuka().album_url("paris-2024"), "/Dashuka/album/paris-2024");
        assert_eq!(root().album_url("paris-2024"), "/album/paris-2024");
    }

    #[test]
    fn typed_builders_match_with_base() {
        let r = dashuka();
        assert_eq!(r.home_url(), r.with_base("/"));
        assert_eq!(r.category_url("x"), r.with_base("/category/x"));
        assert_eq!(r.album_url("x"), r.with_base("/album/x"));
    }

    #[test]
    fn ids_are_not_escaped() {
        // Opaque-id contract: the builder emits whatever it was handed.
        assert_eq!(
            dashuka().category_url("has space"),
            "/Dashuka/category/has space"
        );
    }

    // =========================================================================
    // Scenario from the deployed site
    // =========================================================================

    #[test]
    fn dashuka_album_scenario() {
        let r = dashuka();
        assert_eq!(r.with_base("/album/42"), "/Dashuka/album/42");
        assert_eq!(r.strip_base("/Dashuka/album/42"), "/album/42");
    }

    // =========================================================================
    // Accessors and full_url
    // =========================================================================

    #[test]
    fn base_path_accessor_returns_injected_value() {
        assert_eq!(dashuka().base_path(), "/Dashuka");
        assert_eq!(root().base_path(), "");
    }

    #[test]
    fn is_root_reflects_empty_base() {
        assert!(root().is_root());
        assert!(!dashuka().is_root());
    }

    #[test]
    fn default_resolver_is_root_deployment() {
        let r = UrlResolver::default();
        assert!(r.is_root());
        assert_eq!(r.with_base("/about"), "/about");
    }

    #[test]
    fn full_url_joins_origin_and_based_path() {
        assert_eq!(
            full_url("https://scamp34.github.io", "/Dashuka/album/42"),
            "https://scamp34.github.io/Dashuka/album/42"
        );
    }

    #[test]
    fn full_url_trims_trailing_slash_on_origin() {
        assert_eq!(
            full_url("https://scamp34.github.io/", "/Dashuka/"),
            "https://scamp34.github.io/Dashuka/"
        );
    }
}
