//! Behavior configuration.
//!
//! Handles loading, validating, and merging `grete-ui.toml`. Stock defaults
//! reproduce the site's shipped behavior; a config file only needs the keys
//! it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [accordion]
//! open_on_load = "first-subcollection"  # or "first-collection", "none"
//!
//! [gallery]
//! gap_fallback = 16.0        # Used when the track's CSS gap can't be parsed
//! scroll_behavior = "smooth" # or "instant"
//!
//! [keyboard]
//! enabled = true
//! previous = "ArrowLeft"
//! next = "ArrowRight"
//!
//! [anchors]
//! enabled = true
//! scroll_behavior = "smooth"
//!
//! [parallax]
//! enabled = true
//! start_percent = 15.0       # Background position at the top of the page
//! end_percent = 85.0         # Background position one viewport down
//! ```
//!
//! ## Delivery to the Browser
//!
//! The browser binding cannot read files. The CLI's `embed` command renders
//! the resolved config as a JSON `<script>` element (see [`crate::embed`]),
//! which the binding parses with [`BehaviorConfig::from_json`].
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Behavior configuration loaded from `grete-ui.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Which section starts expanded.
    pub accordion: AccordionConfig,
    /// Carousel stepping.
    pub gallery: GalleryConfig,
    /// Arrow-key navigation of the open subcollection's gallery.
    pub keyboard: KeyboardConfig,
    /// Smooth scrolling for `#fragment` links.
    pub anchors: AnchorsConfig,
    /// Hero background pan and nav/header chrome.
    pub parallax: ParallaxConfig,
}

impl BehaviorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gap = self.gallery.gap_fallback;
        if !gap.is_finite() || gap < 0.0 {
            return Err(ConfigError::Validation(
                "gallery.gap_fallback must be a non-negative number".into(),
            ));
        }
        for (name, value) in [
            ("parallax.start_percent", self.parallax.start_percent),
            ("parallax.end_percent", self.parallax.end_percent),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Validation(format!("{name} must be 0-100")));
            }
        }
        if self.keyboard.previous.is_empty() || self.keyboard.next.is_empty() {
            return Err(ConfigError::Validation(
                "keyboard.previous and keyboard.next must not be empty".into(),
            ));
        }
        if self.keyboard.previous == self.keyboard.next {
            return Err(ConfigError::Validation(
                "keyboard.previous and keyboard.next must be different keys".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate the JSON form embedded in the page.
    ///
    /// Missing keys take their defaults, same as a sparse TOML file.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BehaviorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Animation style for programmatic scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMotion {
    #[default]
    Smooth,
    Instant,
}

/// Which section is expanded when the page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenOnLoad {
    #[default]
    FirstSubcollection,
    FirstCollection,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionConfig {
    pub open_on_load: OpenOnLoad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Gap between slides, in CSS pixels, when the track's computed `gap`
    /// is not a number (`normal`, empty).
    pub gap_fallback: f64,
    pub scroll_behavior: ScrollMotion,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            gap_fallback: 16.0,
            scroll_behavior: ScrollMotion::Smooth,
        }
    }
}

/// Key names follow `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardConfig {
    pub enabled: bool,
    pub previous: String,
    pub next: String,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            previous: "ArrowLeft".to_string(),
            next: "ArrowRight".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorsConfig {
    pub enabled: bool,
    pub scroll_behavior: ScrollMotion,
}

impl Default for AnchorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scroll_behavior: ScrollMotion::Smooth,
        }
    }
}

/// Hero pan range, as `background-position` vertical percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    pub enabled: bool,
    pub start_percent: f64,
    pub end_percent: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            start_percent: 15.0,
            end_percent: 85.0,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Default config file name, looked up in the working directory by the CLI.
pub const CONFIG_FILE_NAME: &str = "grete-ui.toml";

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(BehaviorConfig::default())?)
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

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<BehaviorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BehaviorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when the file
/// is absent.
pub fn load_config(path: &Path) -> Result<BehaviorConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `grete-ui.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# GRETE UI Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Accordion
# ---------------------------------------------------------------------------
[accordion]
# Section expanded on page load: "first-subcollection", "first-collection"
# or "none". Opening any section closes every other one.
open_on_load = "first-subcollection"

# ---------------------------------------------------------------------------
# Gallery carousels
# ---------------------------------------------------------------------------
[gallery]
# Gap between slides (CSS px) used when the track's computed `gap` is not a
# number. Prev/next buttons and arrow keys step by slide width + gap.
gap_fallback = 16.0

# "smooth" or "instant".
scroll_behavior = "smooth"

# ---------------------------------------------------------------------------
# Keyboard
# ---------------------------------------------------------------------------
[keyboard]
# Arrow keys move the gallery of the open subcollection.
enabled = true
previous = "ArrowLeft"
next = "ArrowRight"

# ---------------------------------------------------------------------------
# In-page anchors
# ---------------------------------------------------------------------------
[anchors]
# Animate jumps to #fragment links whose target exists.
enabled = true
scroll_behavior = "smooth"

# ---------------------------------------------------------------------------
# Hero parallax
# ---------------------------------------------------------------------------
[parallax]
# The hero background pans from start_percent to end_percent over the first
# viewport height of scrolling, while the vertical nav fades out. Past that
# point the header becomes visible.
enabled = true
start_percent = 15.0
end_percent = 85.0
"##
}
