//! Display surface trait.
//!
//! The [`Surface`] trait is every read and write the controllers make on the
//! page: class flags, slide measurements, track scroll offsets, counter text,
//! anchor scrolling, and the hero's inline styles. The controllers are written
//! against this trait only, so they run unchanged in the browser
//! (`DomSurface`, wasm32 builds) and in native tests (a recording double).
//!
//! Implementations tolerate missing elements: a write to something that
//! isn't there does nothing, a read returns a neutral value.

use crate::config::ScrollMotion;
use crate::parallax::ParallaxFrame;
use crate::state::{GalleryId, SectionId};

pub trait Surface {
    /// Add or remove the `is-open` flag on a section.
    fn set_section_open(&mut self, section: SectionId, open: bool);

    /// Whether the section currently carries `is-open`, whoever set it.
    fn is_section_open(&self, section: SectionId) -> bool;

    /// Rendered width of the gallery's first slide.
    fn first_slide_width(&self, gallery: GalleryId) -> f64;

    /// Raw computed `gap` of the gallery track (`"16px"`, `"normal"`, ...).
    fn track_gap(&self, gallery: GalleryId) -> Option<String>;

    /// Current horizontal scroll offset of the gallery track.
    fn track_scroll_left(&self, gallery: GalleryId) -> f64;

    /// Jump the gallery track to an absolute offset, without animation.
    fn set_track_scroll_left(&mut self, gallery: GalleryId, offset: f64);

    /// Scroll the gallery track by a relative amount. Fire-and-forget: an
    /// animated scroll is not awaited and may be overridden by the next one.
    fn scroll_track_by(&mut self, gallery: GalleryId, delta: f64, motion: ScrollMotion);

    /// Replace the gallery counter's text.
    fn set_counter_text(&mut self, gallery: GalleryId, text: &str);

    /// Scroll the element with this id into view. Returns `false`, and does
    /// nothing, when no such element exists.
    fn scroll_to_anchor(&mut self, id: &str, motion: ScrollMotion) -> bool;

    /// Apply one parallax frame to the hero, vertical nav and header.
    fn apply_parallax(&mut self, frame: &ParallaxFrame);
}
