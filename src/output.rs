//! CLI output formatting for the `check` command.
//!
//! # Output Format
//!
//! The effective configuration is displayed as labeled groups with the
//! resolved sample URLs up front, since the base path wiring is what `check`
//! exists to eyeball:
//!
//! ```text
//! Site
//!     Title: Dashuka
//!     Origin: https://scamp34.github.io
//!     Base path: /Dashuka
//!
//! URLs
//!     Home: /Dashuka/
//!     Category: /Dashuka/category/<id>
//!     Album: /Dashuka/album/<id>
//!
//! Build
//!     Format: directory
//!
//! Images
//!     Formats: avif, webp
//!     Sizes: 800, 1400, 2080
//!     Quality: 90
//!     Inlining: disabled
//!
//! Theme
//!     Mode: dark
//!     Background: #111111
//!     Text: #f5f5f5 (secondary #a3a3a3)
//!     Accent: #6366f1
//! ```
//!
//! # Architecture
//!
//! `format_check_output` returns `Vec<String>` and does no I/O, so the
//! summary is unit-testable; `print_check_output` is the stdout wrapper.

use crate::config::SiteConfig;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One indented `Label: value` line.
fn field(label: &str, value: impl AsRef<str>) -> String {
    format!("{}{}: {}", indent(1), label, value.as_ref())
}

/// Comma-join a list of displayable items.
fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the effective configuration as display lines.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let resolver = config.resolver();
    let base_display = if resolver.is_root() {
        "(domain root)".to_string()
    } else {
        resolver.base_path().to_string()
    };
    let formats: Vec<&str> = config.images.formats.iter().map(|f| f.as_str()).collect();
    let inlining = match config.images.inline_limit {
        0 => "disabled".to_string(),
        n => format!("below {n} bytes"),
    };

    let mut lines = Vec::new();
    lines.push("Site".to_string());
    lines.push(field("Title", &config.title));
    lines.push(field("Origin", config.site_origin()));
    lines.push(field("Base path", base_display));
    lines.push(String::new());
    lines.push("URLs".to_string());
    lines.push(field("Home", resolver.home_url()));
    lines.push(field("Category", resolver.category_url("<id>")));
    lines.push(field("Album", resolver.album_url("<id>")));
    lines.push(String::new());
    lines.push("Build".to_string());
    lines.push(field("Format", config.build.format.as_str()));
    lines.push(String::new());
    lines.push("Images".to_string());
    lines.push(field("Formats", join_list(&formats)));
    lines.push(field("Sizes", join_list(&config.images.sizes)));
    lines.push(field("Quality", config.images.quality.to_string()));
    lines.push(field("Inlining", inlining));
    lines.push(String::new());
    lines.push("Theme".to_string());
    lines.push(field("Mode", config.theme.mode.as_str()));
    lines.push(field("Background", &config.theme.colors.background));
    lines.push(field(
        "Text",
        format!(
            "{} (secondary {})",
            config.theme.colors.text_primary, config.theme.colors.text_secondary
        ),
    ));
    lines.push(field("Accent", &config.theme.colors.accent));
    lines
}

/// Print the effective configuration to stdout.
pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}
