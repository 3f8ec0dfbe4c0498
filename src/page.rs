//! Page-level wiring.
//!
//! [`Page::setup`] runs once the document is parsed and wires the
//! controllers in a fixed order:
//!
//! 1. collections
//! 2. subcollections (the default section opens here)
//! 3. galleries (every counter shows `01 / NN`)
//! 4. smooth scroll for anchors
//! 5. hero parallax (the pan distance is captured here)
//!
//! After that the page only reacts: the host calls one `on_*` handler per
//! event, passing the surface to act on. All state shared between handlers
//! lives in [`UiState`].

use crate::accordion::{Accordion, SectionSpec, Toggle};
use crate::anchors::{AnchorOutcome, SmoothScrollRouter};
use crate::config::BehaviorConfig;
use crate::gallery::{Direction, GalleryController, GallerySpec};
use crate::keyboard::KeyboardRouter;
use crate::parallax::HeroParallax;
use crate::state::{GalleryId, SectionId, UiState};
use crate::surface::Surface;

/// Page structure discovered at load time.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub collections: Vec<SectionSpec>,
    pub subcollections: Vec<SectionSpec>,
    /// Every `.gallery`, in document order; [`GalleryId`] indexes this.
    pub galleries: Vec<GallerySpec>,
    pub has_hero: bool,
    /// Window inner height at load time.
    pub viewport_height: f64,
}

/// Counts of what got wired, for logging and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupSummary {
    pub sections: usize,
    pub galleries: usize,
    pub skipped_galleries: usize,
    pub parallax: bool,
}

/// All behavior for one page view.
#[derive(Debug)]
pub struct Page {
    config: BehaviorConfig,
    accordion: Accordion,
    galleries: Vec<Option<GalleryController>>,
    anchors: SmoothScrollRouter,
    keyboard: KeyboardRouter,
    parallax: Option<HeroParallax>,
    state: UiState,
}

impl Page {
    pub fn setup<S: Surface + ?Sized>(
        layout: &PageLayout,
        config: &BehaviorConfig,
        surface: &mut S,
    ) -> Self {
        let mut state = UiState::default();

        let accordion = Accordion::new(&layout.collections, &layout.subcollections);
        accordion.initialize(&mut state, config.accordion.open_on_load, surface);

        let galleries: Vec<Option<GalleryController>> = layout
            .galleries
            .iter()
            .enumerate()
            .map(|(i, spec)| GalleryController::wire(GalleryId(i), spec, &config.gallery))
            .collect();
        for gallery in galleries.iter().flatten() {
            gallery.set_counter(surface, 0);
        }

        let anchors = SmoothScrollRouter::new(&config.anchors);

        let parallax = (layout.has_hero && config.parallax.enabled)
            .then(|| HeroParallax::new(layout.viewport_height, &config.parallax));

        let page = Self {
            config: config.clone(),
            accordion,
            galleries,
            anchors,
            keyboard: KeyboardRouter::new(&config.keyboard),
            parallax,
            state,
        };
        let summary = page.summary();
        tracing::info!(
            sections = summary.sections,
            galleries = summary.galleries,
            skipped_galleries = summary.skipped_galleries,
            parallax = summary.parallax,
            "page wired"
        );
        page
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn summary(&self) -> SetupSummary {
        let wired = self.galleries.iter().flatten().count();
        SetupSummary {
            sections: self.accordion.sections().count(),
            galleries: wired,
            skipped_galleries: self.galleries.len() - wired,
            parallax: self.parallax.is_some(),
        }
    }

    /// Sections whose header gets a click listener.
    pub fn interactive_sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.accordion.sections()
    }

    /// Galleries that get button and scroll listeners.
    pub fn wired_galleries(&self) -> impl Iterator<Item = &GalleryController> + '_ {
        self.galleries.iter().flatten()
    }

    pub fn gallery(&self, id: GalleryId) -> Option<&GalleryController> {
        self.galleries.get(id.0).and_then(Option::as_ref)
    }

    pub fn anchors_enabled(&self) -> bool {
        self.anchors.enabled()
    }

    pub fn keyboard_enabled(&self) -> bool {
        self.config.keyboard.enabled
    }

    pub fn has_parallax(&self) -> bool {
        self.parallax.is_some()
    }

    /// Header click on a collection or subcollection.
    pub fn on_header_click<S: Surface + ?Sized>(&mut self, id: SectionId, surface: &mut S) -> Toggle {
        let toggle = self.accordion.toggle(&mut self.state, id, surface);
        if let Toggle::Opened(opened) = toggle {
            let nested = self.accordion.gallery_of(opened).and_then(|g| self.gallery(g));
            if let Some(gallery) = nested {
                gallery.reset(surface);
            }
        }
        toggle
    }

    /// Prev/next button press.
    pub fn on_gallery_control<S: Surface + ?Sized>(
        &mut self,
        id: GalleryId,
        direction: Direction,
        surface: &mut S,
    ) -> bool {
        match self.gallery(id) {
            Some(gallery) => gallery.navigate(surface, direction),
            None => false,
        }
    }

    /// Scroll event from a gallery track.
    pub fn on_track_scroll<S: Surface + ?Sized>(&mut self, id: GalleryId, surface: &mut S) {
        if let Some(gallery) = self.gallery(id) {
            gallery.sync_counter(surface);
        }
    }

    /// Click on a link whose `href` starts with `#`.
    pub fn on_anchor_click<S: Surface + ?Sized>(
        &mut self,
        href: &str,
        surface: &mut S,
    ) -> AnchorOutcome {
        self.anchors.on_click(href, surface)
    }

    /// Global keydown. Returns `true` when a gallery was moved.
    pub fn on_key<S: Surface + ?Sized>(&mut self, key: &str, surface: &mut S) -> bool {
        let Some(direction) = self.keyboard.direction(key) else {
            return false;
        };
        let Some(gallery) = self
            .state
            .open_subcollection()
            .and_then(|id| self.accordion.gallery_of(id))
            .and_then(|g| self.gallery(g))
        else {
            return false;
        };
        gallery.scroll_by_slide(surface, direction);
        true
    }

    /// Window scroll event.
    pub fn on_window_scroll<S: Surface + ?Sized>(&mut self, scroll_y: f64, surface: &mut S) {
        self.state.scroll_y = scroll_y;
        if let Some(parallax) = &self.parallax {
            surface.apply_parallax(&parallax.frame(scroll_y));
        }
    }
}
