//! Gallery carousel controller.
//!
//! A gallery is a horizontally scrolling track of slides with optional
//! prev/next buttons and a `"01 / 07"` counter. The controller never caches
//! layout: slide width is measured on every step so responsive breakpoints
//! are picked up without a resize listener.
//!
//! ## Step Size
//!
//! One step is the first slide's rendered width plus the track's CSS `gap`.
//! Buttons and arrow keys share [`GalleryController::step`], so both move by
//! the same distance. The computed `gap` is parsed like a CSS length prefix;
//! anything without a leading integer (`normal`, empty) falls back to the
//! configured gap.
//!
//! ## Counter Sync
//!
//! The counter is derived from the scroll offset on every track scroll
//! event, including the intermediate events of a smooth scroll, so it tracks
//! manual swipes as well as button presses.

use crate::config::GalleryConfig;
use crate::counter::format_counter;
use crate::state::GalleryId;
use crate::surface::Surface;

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// `-1.0` for previous, `1.0` for next.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Previous => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// Structure of one `.gallery` element as found on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySpec {
    pub has_track: bool,
    pub slides: usize,
    pub has_counter: bool,
    pub has_prev: bool,
    pub has_next: bool,
}

impl GallerySpec {
    /// A complete gallery: track, counter and both buttons.
    pub fn full(slides: usize) -> Self {
        Self {
            has_track: true,
            slides,
            has_counter: true,
            has_prev: true,
            has_next: true,
        }
    }
}

/// Parse the leading integer of a CSS length (`"16px"` → 16).
///
/// Fractions are truncated (`"12.5px"` → 12). Returns `None` when there is
/// no leading integer.
pub fn parse_gap(css: &str) -> Option<f64> {
    let s = css.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

/// Slide width plus gap: the distance of one carousel step.
pub fn slide_width(first_slide_width: f64, gap_css: Option<&str>, gap_fallback: f64) -> f64 {
    let gap = gap_css.and_then(parse_gap).unwrap_or(gap_fallback);
    first_slide_width + gap
}

/// Index of the slide nearest the scroll offset, clamped to the slide range.
pub fn current_index(scroll_left: f64, step: f64, slides: usize) -> usize {
    if step <= 0.0 || slides == 0 || !scroll_left.is_finite() {
        return 0;
    }
    let index = (scroll_left / step).round().max(0.0) as usize;
    index.min(slides - 1)
}

/// Behavior for one wired gallery.
#[derive(Debug, Clone)]
pub struct GalleryController {
    id: GalleryId,
    spec: GallerySpec,
    config: GalleryConfig,
}

impl GalleryController {
    /// Wire a gallery. Returns `None` for a gallery with no track or no
    /// slides; such a gallery gets no behavior at all.
    pub fn wire(id: GalleryId, spec: &GallerySpec, config: &GalleryConfig) -> Option<Self> {
        if !spec.has_track || spec.slides == 0 {
            tracing::debug!(%id, "gallery skipped: no track or no slides");
            return None;
        }
        Some(Self {
            id,
            spec: spec.clone(),
            config: config.clone(),
        })
    }

    pub fn id(&self) -> GalleryId {
        self.id
    }

    pub fn slides(&self) -> usize {
        self.spec.slides
    }

    pub fn has_control(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.spec.has_prev,
            Direction::Next => self.spec.has_next,
        }
    }

    /// Current step distance, measured now.
    pub fn step<S: Surface + ?Sized>(&self, surface: &S) -> f64 {
        let gap = surface.track_gap(self.id);
        slide_width(
            surface.first_slide_width(self.id),
            gap.as_deref(),
            self.config.gap_fallback,
        )
    }

    /// Prev/next button press. Returns `false` when the gallery has no
    /// button for that direction.
    pub fn navigate<S: Surface + ?Sized>(&self, surface: &mut S, direction: Direction) -> bool {
        if !self.has_control(direction) {
            return false;
        }
        self.scroll_by_slide(surface, direction);
        true
    }

    /// Scroll one step in `direction`.
    pub fn scroll_by_slide<S: Surface + ?Sized>(&self, surface: &mut S, direction: Direction) {
        let delta = direction.sign() * self.step(&*surface);
        tracing::debug!(id = %self.id, ?direction, delta, "gallery step");
        surface.scroll_track_by(self.id, delta, self.config.scroll_behavior);
    }

    /// Recompute the index from the track's scroll offset and update the
    /// counter. Returns the index.
    pub fn sync_counter<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let index = current_index(
            surface.track_scroll_left(self.id),
            self.step(&*surface),
            self.spec.slides,
        );
        self.set_counter(surface, index);
        index
    }

    pub fn set_counter<S: Surface + ?Sized>(&self, surface: &mut S, index: usize) {
        if self.spec.has_counter {
            surface.set_counter_text(self.id, &format_counter(index, self.spec.slides));
        }
    }

    /// Back to the first slide, counter included.
    pub fn reset<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_track_scroll_left(self.id, 0.0);
        self.set_counter(surface, 0);
    }
}
