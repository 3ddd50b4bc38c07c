//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The content itself
//! is compiled in (see [`crate::catalog`]); the config only covers what a
//! deployment reasonably varies: page metadata, optional contact links, the
//! assets directory, and the two color palettes.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml              # Optional, overrides stock defaults
//! └── assets/                  # Copied verbatim to the output root
//!     └── Resume.pdf
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Relative to the site directory
//!
//! [site]
//! title = "Ryan Michael Bauer | Portfolio"
//! description = "..."
//! lang = "en"
//!
//! [links]
//! email = ""                # Shown in the contact footer when set
//! github = ""               # Shown in the contact footer when set
//!
//! [colors.dark]
//! background = "#0B0E14"
//! surface = "#111827"
//! text = "#F3F4F6"
//! text_muted = "#9CA3AF"
//! border = "#1F2937"
//! accent = "#00F2FF"
//! brand = "#2E5BFF"
//!
//! [colors.light]
//! background = "#F8FAFC"
//! surface = "#FFFFFF"
//! text = "#0F172A"
//! text_muted = "#475569"
//! border = "#E2E8F0"
//! accent = "#2E5BFF"
//! brand = "#2E5BFF"
//! ```
//!
//! Config files are sparse: override only the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the site dir) copied verbatim into the output.
    pub assets_dir: String,
    /// Document metadata.
    pub site: SiteMeta,
    /// Optional contact links.
    pub links: LinksConfig,
    /// Palettes for the two themes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            site: SiteMeta::default(),
            links: LinksConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        let assets = Path::new(&self.assets_dir);
        if self.assets_dir.is_empty() || assets.is_absolute() {
            return Err(ConfigError::Validation(
                "assets_dir must be a relative path".into(),
            ));
        }
        if assets.components().any(|c| c == Component::ParentDir) {
            return Err(ConfigError::Validation(format!(
                "assets_dir must stay inside the site directory: {}",
                self.assets_dir
            )));
        }
        if !self.links.email.is_empty() && !self.links.email.contains('@') {
            return Err(ConfigError::Validation(format!(
                "links.email is not an address: {}",
                self.links.email
            )));
        }
        self.colors.dark.validate("colors.dark")?;
        self.colors.light.validate("colors.light")?;
        Ok(())
    }
}

/// Document metadata rendered into `<head>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Ryan Michael Bauer | Portfolio".to_string(),
            description: "Management Information Systems student at FAU focused on cybersecurity and information assurance.".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Contact links. Empty means "not shown".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    pub email: String,
    pub github: String,
}

impl LinksConfig {
    pub fn mailto(&self) -> Option<String> {
        (!self.email.is_empty()).then(|| format!("mailto:{}", self.email))
    }

    pub fn github(&self) -> Option<&str> {
        (!self.github.is_empty()).then_some(self.github.as_str())
    }
}

/// Color configuration for the dark and light themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub dark: Palette,
    pub light: Palette,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            dark: Palette::default_dark(),
            light: Palette::default_light(),
        }
    }
}

/// One theme's palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Page background.
    pub background: String,
    /// Cards, nav bar, chips.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (lead paragraph, issuers, dates).
    pub text_muted: String,
    pub border: String,
    /// Highlight color (family name, badge, icons).
    pub accent: String,
    /// Button and glow color.
    pub brand: String,
}

impl Palette {
    pub fn default_dark() -> Self {
        Self {
            background: "#0B0E14".to_string(),
            surface: "#111827".to_string(),
            text: "#F3F4F6".to_string(),
            text_muted: "#9CA3AF".to_string(),
            border: "#1F2937".to_string(),
            accent: "#00F2FF".to_string(),
            brand: "#2E5BFF".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#F8FAFC".to_string(),
            surface: "#FFFFFF".to_string(),
            text: "#0F172A".to_string(),
            text_muted: "#475569".to_string(),
            border: "#E2E8F0".to_string(),
            accent: "#2E5BFF".to_string(),
            brand: "#2E5BFF".to_string(),
        }
    }

    /// `(name, value)` pairs in CSS variable order.
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("bg", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text-muted", self.text_muted.as_str()),
            ("border", self.border.as_str()),
            ("accent", self.accent.as_str()),
            ("brand", self.brand.as_str()),
        ]
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        for (name, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{section}: color '{name}' must not be empty"
                )));
            }
            if value.contains([';', '{', '}']) {
                return Err(ConfigError::Validation(format!(
                    "{section}: color '{name}' contains invalid characters: {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_dark()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given site directory.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Portfolio Site Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Directory next to this file whose contents are copied to the output root.
# Put Resume.pdf here so the /Resume.pdf links resolve.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
title = "Ryan Michael Bauer | Portfolio"
description = "Management Information Systems student at FAU focused on cybersecurity and information assurance."
lang = "en"

# ---------------------------------------------------------------------------
# Contact links (left empty = not shown in the footer)
# ---------------------------------------------------------------------------
[links]
email = ""
github = ""

# ---------------------------------------------------------------------------
# Colors - Dark theme (initial theme on every load)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0B0E14"
surface = "#111827"
text = "#F3F4F6"
text_muted = "#9CA3AF"    # Lead paragraph, issuers, dates
border = "#1F2937"
accent = "#00F2FF"        # Family name, badge, icons
brand = "#2E5BFF"         # Buttons, glow

# ---------------------------------------------------------------------------
# Colors - Light theme
# ---------------------------------------------------------------------------
[colors.light]
background = "#F8FAFC"
surface = "#FFFFFF"
text = "#0F172A"
text_muted = "#475569"
border = "#E2E8F0"
accent = "#2E5BFF"
brand = "#2E5BFF"
"##
}

/// Generate CSS custom properties for both palettes.
///
/// Both palettes are always present (`--dark-*` and `--light-*`); the static
/// stylesheet's `--dark` / `--light` surface modifiers pick between them.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let mut css = String::from(":root {\n");
    for (prefix, palette) in [("dark", &colors.dark), ("light", &colors.light)] {
        for (name, value) in palette.entries() {
            css.push_str(&format!("    --{prefix}-{name}: {value};\n"));
        }
    }
    css.push('}');
    css
}
