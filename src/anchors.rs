//! Smooth scrolling for in-page anchor links.

use crate::config::AnchorsConfig;
use crate::surface::Surface;

/// What happened to an anchor click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// The target was scrolled into view; the browser's jump must be
    /// suppressed.
    Scrolled,
    /// Nothing was done; default navigation proceeds untouched.
    Ignored,
}

/// The element id an in-page link points at.
///
/// `None` for links that don't start with `#` and for the bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone)]
pub struct SmoothScrollRouter {
    config: AnchorsConfig,
}

impl SmoothScrollRouter {
    pub fn new(config: &AnchorsConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn on_click<S: Surface + ?Sized>(&self, href: &str, surface: &mut S) -> AnchorOutcome {
        if !self.config.enabled {
            return AnchorOutcome::Ignored;
        }
        let Some(id) = fragment_id(href) else {
            return AnchorOutcome::Ignored;
        };
        if surface.scroll_to_anchor(id, self.config.scroll_behavior) {
            tracing::debug!(target_id = id, "anchor scroll");
            AnchorOutcome::Scrolled
        } else {
            AnchorOutcome::Ignored
        }
    }
}
