//! The site's route taxonomy: home, category, album.
//!
//! These are the only first-class page kinds the portfolio has. Modeling them
//! as an enum gives call sites one place that knows the URL shapes, in both
//! directions:
//!
//! - **Forward**: [`Route::url`] builds the full site path through the typed
//!   builders on [`UrlResolver`], so templates never concatenate route
//!   strings by hand.
//! - **Inverse**: [`Route::from_path`] parses a base-stripped path back into
//!   a route. Navigation highlighting needs this: the runtime-observed
//!   pathname (base path included) is stripped, parsed, and compared against
//!   each nav entry's route to decide which one is active.
//!
//! ## Trailing slashes
//!
//! The site builds with the `directory` output format, so a deployed album
//! page is observed as `/Dashuka/album/paris-2024/` with a trailing slash,
//! while freshly built hrefs have none. [`Route::from_path`] accepts one
//! trailing slash so both spellings parse to the same route. The resolver's
//! `strip_base` stays untouched by this; tolerance lives here, at the
//! comparison layer.

use crate::urls::UrlResolver;

/// A first-class page of the site.
///
/// Category and album ids are opaque, URL-safe tokens (the same contract as
/// [`UrlResolver::category_url`] and [`UrlResolver::album_url`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The landing page.
    Home,
    /// A category listing page, e.g. `/category/landscapes`.
    Category(String),
    /// An album page, e.g. `/album/paris-2024`.
    Album(String),
}

impl Route {
    /// Full site path for this route, base path included.
    pub fn url(&self, resolver: &UrlResolver) -> String {
        match self {
            Route::Home => resolver.home_url(),
            Route::Category(id) => resolver.category_url(id),
            Route::Album(id) => resolver.album_url(id),
        }
    }

    /// Parse a route-relative path (base path already stripped).
    ///
    /// `/` is home, `/category/<id>` and `/album/<id>` are the listing pages;
    /// one trailing slash is accepted on any of them. Everything else,
    /// including empty ids and deeper paths, is `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        if path == "/" {
            return Some(Route::Home);
        }
        if let Some(id) = path.strip_prefix("/category/") {
            if !id.is_empty() && !id.contains('/') {
                return Some(Route::Category(id.to_string()));
            }
        }
        if let Some(id) = path.strip_prefix("/album/") {
            if !id.is_empty() && !id.contains('/') {
                return Some(Route::Album(id.to_string()));
            }
        }
        None
    }

    /// Whether this route is the one the observed pathname points at.
    ///
    /// The navigation-highlighting check: strip the base path off the
    /// runtime-observed pathname, parse, compare.
    pub fn matches(&self, resolver: &UrlResolver, observed: &str) -> bool {
        active_route(resolver, observed).as_ref() == Some(self)
    }

    /// The id carried by category and album routes.
    pub fn id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::Category(id) | Route::Album(id) => Some(id),
        }
    }
}

/// Resolve an observed pathname to the route it displays, if any.
///
/// Strips the base path, then parses. Returns `None` for paths outside the
/// route taxonomy (assets, unknown pages, foreign prefixes).
pub fn active_route(resolver: &UrlResolver, observed: &str) -> Option<Route> {
    Route::from_path(resolver.strip_base(observed))
}
