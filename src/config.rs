//! Site configuration module.
//!
//! Handles loading, validating, and merging the site's `config.toml`. One
//! file at the site root carries every value the deployment depends on: the
//! public origin and base path, the build output format, the wiring values
//! handed to the external image pipeline, and the theme color tokens the
//! styling layer consumes. The crate itself only loads and exposes these
//! values; the build pipeline and templates do the actual work with them.
//!
//! The base path deserves the emphasis: [`SiteConfig::resolver`] constructs
//! the [`UrlResolver`](crate::urls::UrlResolver) from `base_path`, so the
//! prefix baked into every generated link is the same value the hosting
//! configuration deploys under. There is no second copy to keep in sync.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Dashuka"                        # Site title
//! site_url = "https://scamp34.github.io"   # Public origin (absolute URL)
//! base_path = "/Dashuka"                   # URL prefix of the deployment
//!
//! [build]
//! format = "directory"      # "directory" (clean URLs) or "file" (.html)
//!
//! [images]
//! formats = ["avif", "webp"] # Output formats, preference order
//! sizes = [800, 1400, 2080]  # Responsive widths to generate
//! quality = 90               # Encoding quality (0-100)
//! inline_limit = 0           # Inline assets below this many bytes (0 = never)
//!
//! [theme]
//! mode = "dark"              # Default color scheme: "dark" or "light"
//!
//! [theme.colors]
//! background = "#111111"
//! text_primary = "#f5f5f5"
//! text_secondary = "#a3a3a3"
//! accent = "#6366f1"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! # Deploy at the domain root instead of a sub-path
//! base_path = ""
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::urls::UrlResolver;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have stock defaults matching the deployed site. User config
/// files need only specify the values they want to override. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used by the templating layer for `<title>` and headers.
    pub title: String,
    /// Public origin the site is served from (absolute `http(s)` URL).
    pub site_url: String,
    /// URL path prefix of the deployment. Empty for a domain-root
    /// deployment; otherwise starts with `/` and has no trailing `/`
    /// (e.g. `/Dashuka` for a GitHub Pages project site).
    pub base_path: String,
    /// Build output settings.
    pub build: BuildConfig,
    /// Image pipeline wiring (consumed by the external optimizer).
    pub images: ImagesConfig,
    /// Theme settings (mode and color tokens).
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Dashuka".to_string(),
            site_url: "https://scamp34.github.io".to_string(),
            base_path: "/Dashuka".to_string(),
            build: BuildConfig::default(),
            images: ImagesConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.is_empty() {
            if !self.base_path.starts_with('/') {
                return Err(ConfigError::Validation(
                    "base_path must be empty or start with '/'".into(),
                ));
            }
            if self.base_path.ends_with('/') {
                return Err(ConfigError::Validation(
                    "base_path must not end with '/' (the trailing separator \
                     comes from the route path)"
                        .into(),
                ));
            }
        }
        let parsed = url::Url::parse(&self.site_url).map_err(|e| {
            ConfigError::Validation(format!("site_url is not a valid absolute URL: {e}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "site_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 0-100".into(),
            ));
        }
        if self.images.sizes.is_empty() {
            return Err(ConfigError::Validation(
                "images.sizes must not be empty".into(),
            ));
        }
        if self.images.formats.is_empty() {
            return Err(ConfigError::Validation(
                "images.formats must not be empty".into(),
            ));
        }
        self.theme.colors.validate()?;
        Ok(())
    }

    /// Construct the URL resolver for this configuration.
    ///
    /// This is the single point where the deployment base path enters URL
    /// generation; resolver and hosting configuration cannot drift apart.
    pub fn resolver(&self) -> UrlResolver {
        UrlResolver::new(self.base_path.clone())
    }

    /// The site origin with any trailing slash trimmed, ready for
    /// [`full_url`](crate::urls::full_url).
    pub fn site_origin(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

/// Build output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// How pages are written to disk, which decides the served URL shape.
    pub format: OutputFormat,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Directory,
        }
    }
}

/// Page output format of the external generator.
///
/// `directory` writes `about/index.html` and serves `/about/` (clean URLs,
/// trailing slash); `file` writes `about.html` and serves `/about.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Directory,
    File,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Directory => "directory",
            OutputFormat::File => "file",
        }
    }
}

/// Image pipeline wiring values.
///
/// The crate never encodes anything; these are handed verbatim to the
/// external optimizer that does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Output formats in preference order.
    pub formats: Vec<ImageFormat>,
    /// Pixel widths to generate for responsive `<picture>` elements.
    pub sizes: Vec<u32>,
    /// Encoding quality (0 = worst, 100 = best).
    pub quality: u32,
    /// Assets smaller than this many bytes may be inlined into markup.
    /// 0 disables inlining entirely so every photo stays a separate,
    /// cacheable file.
    pub inline_limit: u64,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            formats: vec![ImageFormat::Avif, ImageFormat::Webp],
            sizes: vec![800, 1400, 2080],
            quality: 90,
            inline_limit: 0,
        }
    }
}

/// Output format understood by the image pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Avif,
    Webp,
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Avif => "avif",
            ImageFormat::Webp => "webp",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }
}

/// Theme settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Default color scheme. The site ships dark-first: photos read best
    /// against a dark background.
    pub mode: ThemeMode,
    /// Color tokens consumed by the styling layer.
    pub colors: ColorConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ColorConfig::default(),
        }
    }
}

/// Default color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Theme color tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Primary text color.
    pub text_primary: String,
    /// Secondary/muted text color (captions, metadata).
    pub text_secondary: String,
    /// Accent color (links, focus states).
    pub accent: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#111111".to_string(),
            text_primary: "#f5f5f5".to_string(),
            text_secondary: "#a3a3a3".to_string(),
            accent: "#6366f1".to_string(),
        }
    }
}

impl ColorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let tokens = [
            ("theme.colors.background", &self.background),
            ("theme.colors.text_primary", &self.text_primary),
            ("theme.colors.text_secondary", &self.text_secondary),
            ("theme.colors.accent", &self.accent),
        ];
        for (name, value) in tokens {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a hex color like #111111, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

/// Accepts `#rgb` and `#rrggbb`.
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Dashuka Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults, which match the deployed site.
# Unknown keys will cause an error.

# Site title, used for <title> and page headers.
title = "Dashuka"

# Public origin the site is served from. Must be an absolute http(s) URL.
site_url = "https://scamp34.github.io"

# URL path prefix of the deployment. Every generated link starts with this,
# and it must match the sub-path the host serves the site under.
# Use "" when deploying at the domain root.
base_path = "/Dashuka"

# ---------------------------------------------------------------------------
# Build output
# ---------------------------------------------------------------------------
[build]
# "directory" writes about/index.html and serves clean URLs (/about/).
# "file" writes about.html and serves /about.html.
format = "directory"

# ---------------------------------------------------------------------------
# Image pipeline
# ---------------------------------------------------------------------------
# These values are handed to the external image optimizer; nothing in this
# tool encodes images.
[images]
# Output formats, preference order. Allowed: "avif", "webp", "jpeg", "png".
formats = ["avif", "webp"]

# Pixel widths to generate for responsive <picture> elements.
sizes = [800, 1400, 2080]

# Encoding quality (0 = worst, 100 = best).
quality = 90

# Assets smaller than this many bytes may be inlined into markup.
# 0 disables inlining so every photo stays a separate, cacheable file.
inline_limit = 0

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Default color scheme: "dark" or "light".
mode = "dark"

# Color tokens consumed by the styling layer (#rgb or #rrggbb).
[theme.colors]
background = "#111111"
text_primary = "#f5f5f5"
text_secondary = "#a3a3a3"
accent = "#6366f1"
"##
}
