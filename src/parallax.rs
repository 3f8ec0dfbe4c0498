//! Hero parallax.
//!
//! While the visitor scrolls through the first viewport height, the hero's
//! background pans vertically and the vertical nav fades out. Past that
//! point the nav stays hidden and the sticky header appears.
//!
//! ```text
//! scroll_y:   0 ────────────── pan_distance ──────────▶
//! background: center 15%  →  center 85%   (untouched)
//! nav:        opacity 1   →  opacity 0    opacity 0
//! header:     hidden                      .is-visible
//! ```
//!
//! Each frame is a pure function of the scroll offset. No easing, no
//! debounce: the surface is updated on every scroll event.

use crate::config::ParallaxConfig;

/// What to apply to the hero chrome for one scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxFrame {
    /// Vertical background position in percent. `None` past the pan
    /// distance: the background keeps its last value.
    pub background_percent: Option<f64>,
    /// Opacity of the vertical nav.
    pub nav_opacity: f64,
    /// Whether the header gets `is-visible`.
    pub header_visible: bool,
}

impl ParallaxFrame {
    /// `background-position` value, e.g. `"center 50%"`.
    pub fn background_position(&self) -> Option<String> {
        self.background_percent.map(|p| format!("center {p}%"))
    }

    /// `opacity` value, e.g. `"0.25"`.
    pub fn opacity_css(&self) -> String {
        format!("{}", self.nav_opacity)
    }
}

/// Progress through the pan distance, in `[0, 1]`.
pub fn pan_progress(scroll_y: f64, pan_distance: f64) -> f64 {
    if pan_distance <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / pan_distance).clamp(0.0, 1.0)
}

/// Hero parallax with its pan distance fixed at setup.
#[derive(Debug, Clone)]
pub struct HeroParallax {
    pan_distance: f64,
    config: ParallaxConfig,
}

impl HeroParallax {
    /// `viewport_height` is captured once; later resizes don't change the
    /// pan distance.
    pub fn new(viewport_height: f64, config: &ParallaxConfig) -> Self {
        Self {
            pan_distance: viewport_height,
            config: config.clone(),
        }
    }

    pub fn pan_distance(&self) -> f64 {
        self.pan_distance
    }

    pub fn frame(&self, scroll_y: f64) -> ParallaxFrame {
        if scroll_y <= self.pan_distance {
            let t = pan_progress(scroll_y, self.pan_distance);
            let start = self.config.start_percent;
            let end = self.config.end_percent;
            ParallaxFrame {
                background_percent: Some(start + t * (end - start)),
                nav_opacity: 1.0 - t,
                header_visible: false,
            }
        } else {
            ParallaxFrame {
                background_percent: None,
                nav_opacity: 0.0,
                header_visible: true,
            }
        }
    }
}
