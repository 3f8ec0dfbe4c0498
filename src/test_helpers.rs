//! Shared test utilities for the grete-ui test suite.
//!
//! Provides [`RecordingSurface`], a [`Surface`] double that records every
//! write and simulates the few bits of layout the controllers read (slide
//! width, track gap, scroll offsets, anchor targets), plus a sample page
//! layout.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut surface = RecordingSurface::new().with_slide_width(400.0);
//! let page = Page::setup(&sample_layout(), &BehaviorConfig::default(), &mut surface);
//! assert_eq!(surface.counter(GalleryId(1)), Some("01 / 07"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::accordion::{HeaderKind, SectionSpec};
use crate::config::ScrollMotion;
use crate::gallery::GallerySpec;
use crate::page::PageLayout;
use crate::parallax::ParallaxFrame;
use crate::state::{GalleryId, SectionId};
use crate::surface::Surface;

/// One recorded write.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    SetSectionOpen { section: SectionId, open: bool },
    SetTrackScrollLeft { gallery: GalleryId, offset: f64 },
    ScrollTrackBy { gallery: GalleryId, delta: f64, motion: ScrollMotion },
    SetCounterText { gallery: GalleryId, text: String },
    ScrollToAnchor { id: String, motion: ScrollMotion },
    ApplyParallax(ParallaxFrame),
}

/// Surface double. Scrolls land instantly.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    open: BTreeSet<SectionId>,
    scroll: BTreeMap<GalleryId, f64>,
    counters: BTreeMap<GalleryId, String>,
    anchors: BTreeSet<String>,
    /// Width of every gallery's first slide.
    pub slide_width: f64,
    /// Computed `gap` of every track.
    pub gap: Option<String>,
    pub hero_background: Option<String>,
    pub nav_opacity: Option<String>,
    pub header_visible: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            slide_width: 400.0,
            ..Self::default()
        }
    }

    pub fn with_slide_width(mut self, width: f64) -> Self {
        self.slide_width = width;
        self
    }

    pub fn with_gap(mut self, gap: &str) -> Self {
        self.gap = Some(gap.to_string());
        self
    }

    pub fn with_anchor(mut self, id: &str) -> Self {
        self.anchors.insert(id.to_string());
        self
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Pretend the markup shipped with this section expanded.
    pub fn mark_open(&mut self, section: SectionId) {
        self.open.insert(section);
    }

    /// Sections currently flagged `is-open`, sorted.
    pub fn open_sections(&self) -> Vec<SectionId> {
        self.open.iter().copied().collect()
    }

    /// Simulate the visitor swiping a track.
    pub fn set_scroll(&mut self, gallery: GalleryId, offset: f64) {
        self.scroll.insert(gallery, offset);
    }

    pub fn scroll(&self, gallery: GalleryId) -> f64 {
        self.scroll.get(&gallery).copied().unwrap_or(0.0)
    }

    /// Overwrite a counter without recording, as a stale render would.
    pub fn set_counter(&mut self, gallery: GalleryId, text: &str) {
        self.counters.insert(gallery, text.to_string());
    }

    pub fn counter(&self, gallery: GalleryId) -> Option<&str> {
        self.counters.get(&gallery).map(String::as_str)
    }
}

impl Surface for RecordingSurface {
    fn set_section_open(&mut self, section: SectionId, open: bool) {
        self.ops.push(SurfaceOp::SetSectionOpen { section, open });
        if open {
            self.open.insert(section);
        } else {
            self.open.remove(&section);
        }
    }

    fn is_section_open(&self, section: SectionId) -> bool {
        self.open.contains(&section)
    }

    fn first_slide_width(&self, _gallery: GalleryId) -> f64 {
        self.slide_width
    }

    fn track_gap(&self, _gallery: GalleryId) -> Option<String> {
        self.gap.clone()
    }

    fn track_scroll_left(&self, gallery: GalleryId) -> f64 {
        self.scroll(gallery)
    }

    fn set_track_scroll_left(&mut self, gallery: GalleryId, offset: f64) {
        self.ops.push(SurfaceOp::SetTrackScrollLeft { gallery, offset });
        self.scroll.insert(gallery, offset);
    }

    fn scroll_track_by(&mut self, gallery: GalleryId, delta: f64, motion: ScrollMotion) {
        self.ops.push(SurfaceOp::ScrollTrackBy {
            gallery,
            delta,
            motion,
        });
        *self.scroll.entry(gallery).or_insert(0.0) += delta;
    }

    fn set_counter_text(&mut self, gallery: GalleryId, text: &str) {
        self.ops.push(SurfaceOp::SetCounterText {
            gallery,
            text: text.to_string(),
        });
        self.counters.insert(gallery, text.to_string());
    }

    fn scroll_to_anchor(&mut self, id: &str, motion: ScrollMotion) -> bool {
        if !self.anchors.contains(id) {
            return false;
        }
        self.ops.push(SurfaceOp::ScrollToAnchor {
            id: id.to_string(),
            motion,
        });
        true
    }

    fn apply_parallax(&mut self, frame: &ParallaxFrame) {
        self.ops.push(SurfaceOp::ApplyParallax(frame.clone()));
        if let Some(position) = frame.background_position() {
            self.hero_background = Some(position);
        }
        self.nav_opacity = Some(frame.opacity_css());
        self.header_visible = frame.header_visible;
    }
}

// =========================================================================
// Layouts
// =========================================================================

/// A page shaped like the shipped site.
///
/// ```text
/// collection 0   main header (static)
/// collection 1   gallery 0 (5 slides)
/// collection 2   no gallery
/// subcollection 0  gallery 1 (7 slides)
/// subcollection 1  gallery 2 (3 slides)
/// gallery 3      empty, skipped
/// hero, viewport 900
/// ```
pub fn sample_layout() -> PageLayout {
    PageLayout {
        collections: vec![
            SectionSpec {
                header: HeaderKind::Main,
                gallery: None,
            },
            SectionSpec::interactive(Some(GalleryId(0))),
            SectionSpec::interactive(None),
        ],
        subcollections: vec![
            SectionSpec::interactive(Some(GalleryId(1))),
            SectionSpec::interactive(Some(GalleryId(2))),
        ],
        galleries: vec![
            GallerySpec::full(5),
            GallerySpec::full(7),
            GallerySpec::full(3),
            GallerySpec::full(0),
        ],
        has_hero: true,
        viewport_height: 900.0,
    }
}
