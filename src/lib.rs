//! # Dashuka
//!
//! Site configuration and base-path URL tooling for the Dashuka photography
//! portfolio. The site itself is static: an external generator renders the
//! pages, an external optimizer produces responsive AVIF/WebP variants, and
//! the styling layer turns theme tokens into CSS. What lives here is the part
//! that must not drift: the single `config.toml` describing the deployment,
//! and the URL resolver that bakes its base path into every link.
//!
//! # Why a URL resolver at all
//!
//! The portfolio deploys as a GitHub Pages project site, served under
//! `https://scamp34.github.io/Dashuka` rather than a domain root. Every
//! internal href needs the `/Dashuka` prefix, and navigation highlighting
//! needs to take it back off the browser-observed pathname. Scattering that
//! prefix across templates is how sub-path deployments break; centralizing it
//! means a future move (different sub-path, or a custom domain at the root)
//! is a one-line config change.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`urls`] | Core: [`UrlResolver`](urls::UrlResolver) builds full site paths from route-relative ones and strips the base path back off |
//! | [`routes`] | The route taxonomy (home, category, album): typed URL building and the inverse parse used for active-nav decisions |
//! | [`config`] | `config.toml` loading, stock defaults, merging, validation; the one place the base path is configured |
//! | [`output`] | CLI output formatting for the `check` summary |
//!
//! # Design Decisions
//!
//! ## One Source Of Truth For The Base Path
//!
//! The resolver is constructed from the loaded config
//! ([`config::SiteConfig::resolver`]), never from its own constant. The value
//! the hosting setup deploys under and the value links are built with are the
//! same string, read once.
//!
//! ## Typed Builders Over Ad-Hoc Concatenation
//!
//! Home, category, and album are the site's only first-class route kinds.
//! [`urls::UrlResolver::category_url`] and friends keep call sites from
//! assembling `"/category/" + id` by hand, and [`routes::Route`] documents
//! the taxonomy as a type.
//!
//! ## Plain Concatenation, Documented Contract
//!
//! [`urls::UrlResolver::with_base`] does not validate, normalize, or guard
//! against double-prefixing. Callers pass route-relative paths exactly once;
//! the contract is documented and pinned by tests rather than silently
//! "fixed", because a guard would change the output of every caller that
//! relies on plain concatenation.
//!
//! ## Config Carries Values It Never Uses
//!
//! `[build]`, `[images]`, and `[theme]` are wiring for the external build
//! pipeline and styling layer. Loading and validating them here keeps the
//! whole deployment described by one checked file, even though this crate
//! never encodes an image or emits CSS.

pub mod config;
pub mod output;
pub mod routes;
pub mod urls;
