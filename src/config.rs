//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` in the source
//! directory. Configuration covers everything that is neither content nor
//! theme: page metadata, the analytics tag, the gallery reveal delay, and
//! the Instagram embed list.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Vitrina"              # <title> and OpenGraph title
//! description = ""               # Meta description
//! locale = "es_BO"               # OpenGraph locale
//! logo = "/logo.webp"            # Hero logo path (under assets/)
//!
//! [analytics]
//! # google_tag = "G-XXXXXXXXXX"  # gtag snippet emitted only when set
//!
//! [gallery]
//! reveal_delay_ms = 800          # Skeleton delay; 0 disables the skeleton
//!
//! [instagram]
//! posts = []                     # Post URLs for the embed page
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
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
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page metadata (title, description, locale, logo).
    pub site: SiteMeta,
    /// Analytics snippet settings.
    pub analytics: AnalyticsConfig,
    /// Gallery presentation settings.
    pub gallery: GalleryConfig,
    /// Instagram embed page settings.
    pub instagram: InstagramConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.reveal_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "gallery.reveal_delay_ms must be 0-10000".into(),
            ));
        }
        for url in &self.instagram.posts {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "instagram.posts entries must be http(s) URLs, got: {url}"
                )));
            }
        }
        Ok(())
    }
}

/// Page metadata emitted into `<head>` and OpenGraph tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<title>` and OpenGraph title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// OpenGraph locale (e.g. `es_BO`).
    pub locale: String,
    /// Hero logo path, relative to the assets root.
    pub logo: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Vitrina".to_string(),
            description: String::new(),
            locale: "es_BO".to_string(),
            logo: "/logo.webp".to_string(),
        }
    }
}

/// Analytics settings. The snippet is emitted only when a tag is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Google tag ID (`G-…`). Absent means no analytics markup at all.
    pub google_tag: Option<String>,
}

/// Gallery presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// How long the shimmer skeleton gates the grid after a filter change,
    /// in milliseconds. Purely presentational; 0 disables the skeleton.
    pub reveal_delay_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 800,
        }
    }
}

/// Instagram embed page settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstagramConfig {
    /// Post URLs rendered as embed iframes, in order.
    pub posts: Vec<String>,
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
/// and validates the result.
pub fn load_config(source: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(source)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Vitrina Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Place this file next to content.json in the source directory.

# ---------------------------------------------------------------------------
# Page metadata
# ---------------------------------------------------------------------------
[site]
# <title> and OpenGraph title for every page.
title = "Vitrina"

# Meta description.
description = ""

# OpenGraph locale.
locale = "es_BO"

# Hero logo path, relative to the assets root.
logo = "/logo.webp"

# ---------------------------------------------------------------------------
# Analytics
# ---------------------------------------------------------------------------
[analytics]
# Google tag ID. When commented out, no analytics markup is emitted.
# google_tag = "G-XXXXXXXXXX"

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# How long the shimmer skeleton gates the grid after a filter change (ms).
# Set to 0 to disable the skeleton entirely.
reveal_delay_ms = 800

# ---------------------------------------------------------------------------
# Instagram embed page
# ---------------------------------------------------------------------------
[instagram]
# Post URLs rendered as embeds on /instagram/, in order.
posts = []
"##
}
