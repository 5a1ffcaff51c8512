//! Style store: the theme file consumed for presentation only.
//!
//! `style.json` is a flat record of color tokens. The generator turns it
//! into CSS custom properties prepended to the embedded stylesheet; nothing
//! else reads it. Unknown keys are rejected to catch typos early, and every
//! token has a default so a sparse file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The theme record loaded from `style.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    pub colors: Colors,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            colors: Colors::default(),
        }
    }
}

/// Color tokens, consumed verbatim as CSS values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Accent color: filter highlights, menu overlay, category labels.
    pub primary: String,
    /// Page background.
    pub background: String,
    /// Body text.
    pub text: String,
    /// Secondary text: hours line, credit, inactive filter buttons.
    pub text_muted: String,
    /// Text on top of the primary-colored menu overlay.
    pub overlay_text: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#ea580c".to_string(),
            background: "#fafafa".to_string(),
            text: "#171717".to_string(),
            text_muted: "#525252".to_string(),
            overlay_text: "#ffffff".to_string(),
        }
    }
}

/// Load `style.json` from the source directory.
///
/// A missing file means stock colors — the style store is presentation only
/// and never required.
pub fn load_style(source: &Path) -> Result<StyleSheet, StyleError> {
    let path = source.join("style.json");
    if !path.exists() {
        return Ok(StyleSheet::default());
    }
    let raw = fs::read_to_string(&path)?;
    let style: StyleSheet = serde_json::from_str(&raw)?;
    Ok(style)
}

/// Generate CSS custom properties from the color tokens.
pub fn generate_color_css(colors: &Colors) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-bg: {background};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-overlay-text: {overlay_text};
}}"#,
        primary = colors.primary,
        background = colors.background,
        text = colors.text,
        text_muted = colors.text_muted,
        overlay_text = colors.overlay_text,
    )
}

/// Returns a stock `style.json` with every token at its default.
///
/// Used by the `gen-style` CLI command.
pub fn stock_style_json() -> String {
    // Serializing the default keeps the stock file and the defaults from
    // drifting apart.
    serde_json::to_string_pretty(&StyleSheet::default()).expect("default style must serialize")
}
