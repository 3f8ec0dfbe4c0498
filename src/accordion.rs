//! Collection and subcollection accordion.
//!
//! Collections and subcollections form one exclusive accordion: opening any
//! section closes every other open section in both groups, so at most one
//! section is expanded at a time. Clicking the open section collapses it and
//! leaves nothing open.
//!
//! ```text
//!            click (closed)                   click (open)
//!  Closed ───────────────────▶ Open ─────────────────────────▶ Closed
//!            closes all others,               nothing replaces it
//!            resets nested gallery
//! ```
//!
//! Only sections with an interactive header respond to clicks. A collection
//! whose header is marked `collection-header--main` is a static title, and a
//! section without any header is skipped; neither gets a click handler. Both
//! are still swept when a section opens, so an `is-open` flag shipped in
//! their markup is cleared like any other.

use crate::config::OpenOnLoad;
use crate::state::{GalleryId, SectionId, SectionKind, UiState};
use crate::surface::Surface;

/// What kind of header a section carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// A clickable header.
    Interactive,
    /// A static `collection-header--main` title.
    Main,
    /// No header element.
    Missing,
}

/// Structure of one section as found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub header: HeaderKind,
    /// The first `.gallery` inside the section.
    pub gallery: Option<GalleryId>,
}

impl SectionSpec {
    pub fn interactive(gallery: Option<GalleryId>) -> Self {
        Self {
            header: HeaderKind::Interactive,
            gallery,
        }
    }
}

/// Result of a header click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The section was closed and is now the open one.
    Opened(SectionId),
    /// The section was open and is now closed.
    Closed(SectionId),
    /// The section isn't managed by the accordion.
    Ignored,
}

#[derive(Debug, Clone)]
struct Managed {
    id: SectionId,
    gallery: Option<GalleryId>,
}

/// The exclusive accordion over every section on the page.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    /// Sections with interactive headers.
    sections: Vec<Managed>,
    /// Every discovered section, managed or not. Swept on open.
    members: Vec<SectionId>,
}

impl Accordion {
    /// Collect all sections, collections first, each group in document
    /// order. Those with interactive headers are managed.
    pub fn new(collections: &[SectionSpec], subcollections: &[SectionSpec]) -> Self {
        let groups = [
            (SectionKind::Collection, collections),
            (SectionKind::Subcollection, subcollections),
        ];
        let mut sections = Vec::new();
        let mut members = Vec::new();
        for (kind, specs) in groups {
            for (index, spec) in specs.iter().enumerate() {
                let id = SectionId { kind, index };
                members.push(id);
                if spec.header == HeaderKind::Interactive {
                    sections.push(Managed {
                        id,
                        gallery: spec.gallery,
                    });
                }
            }
        }
        Self { sections, members }
    }

    /// Every section, managed or not, collections first.
    pub fn members(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.members.iter().copied()
    }

    /// Drop `is-open` from every section in both groups that carries it.
    pub fn close_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        for id in self.members() {
            if surface.is_section_open(id) {
                surface.set_section_open(id, false);
            }
        }
    }

    pub fn is_managed(&self, id: SectionId) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// Managed sections, collections first.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|s| s.id)
    }

    /// The gallery nested in a managed section.
    pub fn gallery_of(&self, id: SectionId) -> Option<GalleryId> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.gallery)
    }

    /// The section that starts open.
    pub fn default_open(&self, policy: OpenOnLoad) -> Option<SectionId> {
        let kind = match policy {
            OpenOnLoad::FirstSubcollection => SectionKind::Subcollection,
            OpenOnLoad::FirstCollection => SectionKind::Collection,
            OpenOnLoad::None => return None,
        };
        self.sections().find(|id| id.kind == kind)
    }

    /// Put every section in its initial state: the default one open, all
    /// others closed, whatever the markup shipped with.
    pub fn initialize<S: Surface + ?Sized>(
        &self,
        state: &mut UiState,
        policy: OpenOnLoad,
        surface: &mut S,
    ) {
        let open = self.default_open(policy);
        self.close_all(surface);
        if let Some(id) = open {
            surface.set_section_open(id, true);
        }
        state.open = open;
        tracing::debug!(?open, "accordion initialized");
    }

    /// Apply a header click. The caller resets the nested gallery on
    /// [`Toggle::Opened`].
    pub fn toggle<S: Surface + ?Sized>(
        &self,
        state: &mut UiState,
        id: SectionId,
        surface: &mut S,
    ) -> Toggle {
        if !self.is_managed(id) {
            return Toggle::Ignored;
        }
        let opening = !state.is_open(id);
        self.close_all(surface);
        state.open = None;
        if opening {
            surface.set_section_open(id, true);
            state.open = Some(id);
            tracing::debug!(%id, "section opened");
            Toggle::Opened(id)
        } else {
            tracing::debug!(%id, "section closed");
            Toggle::Closed(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingSurface;

    fn main_header() -> SectionSpec {
        SectionSpec {
            header: HeaderKind::Main,
            gallery: None,
        }
    }

    fn accordion() -> Accordion {
        Accordion::new(
            &[
                main_header(),
                SectionSpec::interactive(Some(GalleryId(0))),
                SectionSpec::interactive(None),
            ],
            &[
                SectionSpec::interactive(Some(GalleryId(1))),
                SectionSpec::interactive(Some(GalleryId(2))),
                SectionSpec {
                    header: HeaderKind::Missing,
                    gallery: Some(GalleryId(3)),
                },
            ],
        )
    }

    #[test]
    fn only_interactive_sections_are_managed() {
        let acc = accordion();
        let managed: Vec<SectionId> = acc.sections().collect();
        assert_eq!(
            managed,
            vec![
                SectionId::collection(1),
                SectionId::collection(2),
                SectionId::subcollection(0),
                SectionId::subcollection(1),
            ]
        );
        assert!(!acc.is_managed(SectionId::collection(0)));
        assert!(!acc.is_managed(SectionId::subcollection(2)));
    }

    #[test]
    fn default_open_policies() {
        let acc = accordion();
        assert_eq!(
            acc.default_open(OpenOnLoad::FirstSubcollection),
            Some(SectionId::subcollection(0))
        );
        assert_eq!(
            acc.default_open(OpenOnLoad::FirstCollection),
            Some(SectionId::collection(1))
        );
        assert_eq!(acc.default_open(OpenOnLoad::None), None);
    }

    #[test]
    fn default_open_without_subcollections() {
        let acc = Accordion::new(&[SectionSpec::interactive(None)], &[]);
        assert_eq!(acc.default_open(OpenOnLoad::FirstSubcollection), None);
    }

    #[test]
    fn initialize_opens_default_and_closes_the_rest() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        surface.mark_open(SectionId::collection(2));

        acc.initialize(&mut state, OpenOnLoad::FirstSubcollection, &mut surface);

        assert_eq!(state.open, Some(SectionId::subcollection(0)));
        assert_eq!(surface.open_sections(), vec![SectionId::subcollection(0)]);
    }

    #[test]
    fn opening_closes_the_other_group() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        acc.initialize(&mut state, OpenOnLoad::FirstSubcollection, &mut surface);

        let toggle = acc.toggle(&mut state, SectionId::collection(1), &mut surface);

        assert_eq!(toggle, Toggle::Opened(SectionId::collection(1)));
        assert_eq!(surface.open_sections(), vec![SectionId::collection(1)]);
    }

    #[test]
    fn clicking_open_section_closes_it() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        acc.initialize(&mut state, OpenOnLoad::FirstSubcollection, &mut surface);

        let toggle = acc.toggle(&mut state, SectionId::subcollection(0), &mut surface);

        assert_eq!(toggle, Toggle::Closed(SectionId::subcollection(0)));
        assert_eq!(state.open, None);
        assert!(surface.open_sections().is_empty());
    }

    #[test]
    fn main_header_is_never_toggled() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();

        let toggle = acc.toggle(&mut state, SectionId::collection(0), &mut surface);

        assert_eq!(toggle, Toggle::Ignored);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn at_most_one_open_after_any_click_sequence() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        acc.initialize(&mut state, OpenOnLoad::FirstSubcollection, &mut surface);

        let clicks = [
            SectionId::collection(1),
            SectionId::subcollection(1),
            SectionId::subcollection(1),
            SectionId::collection(0),
            SectionId::collection(2),
            SectionId::subcollection(0),
            SectionId::collection(1),
            SectionId::subcollection(2),
            SectionId::collection(1),
        ];
        for id in clicks {
            acc.toggle(&mut state, id, &mut surface);
            let open = surface.open_sections();
            assert!(open.len() <= 1, "after clicking {id}: {open:?}");
            assert_eq!(open.first().copied(), state.open);
        }
    }

    #[test]
    fn members_include_unmanaged_sections() {
        let acc = accordion();
        assert_eq!(acc.members().count(), 6);
        assert_eq!(acc.sections().count(), 4);
    }

    #[test]
    fn initialize_clears_flags_on_unmanaged_sections() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        surface.mark_open(SectionId::collection(0));
        surface.mark_open(SectionId::subcollection(2));

        acc.initialize(&mut state, OpenOnLoad::FirstSubcollection, &mut surface);

        assert_eq!(surface.open_sections(), vec![SectionId::subcollection(0)]);
    }

    #[test]
    fn opening_closes_a_preopened_main_collection() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        acc.initialize(&mut state, OpenOnLoad::None, &mut surface);
        // Flag set after load, outside the accordion
        surface.mark_open(SectionId::collection(0));

        let toggle = acc.toggle(&mut state, SectionId::collection(1), &mut surface);

        assert_eq!(toggle, Toggle::Opened(SectionId::collection(1)));
        assert_eq!(surface.open_sections(), vec![SectionId::collection(1)]);
    }

    #[test]
    fn collapsing_also_sweeps_stray_flags() {
        let acc = accordion();
        let mut state = UiState::default();
        let mut surface = RecordingSurface::new();
        acc.initialize(&mut state, OpenOnLoad::FirstSubcollection, &mut surface);
        surface.mark_open(SectionId::subcollection(2));

        let toggle = acc.toggle(&mut state, SectionId::subcollection(0), &mut surface);

        assert_eq!(toggle, Toggle::Closed(SectionId::subcollection(0)));
        assert!(surface.open_sections().is_empty());
    }

    #[test]
    fn gallery_of_managed_section() {
        let acc = accordion();
        assert_eq!(acc.gallery_of(SectionId::subcollection(1)), Some(GalleryId(2)));
        assert_eq!(acc.gallery_of(SectionId::collection(2)), None);
        assert_eq!(acc.gallery_of(SectionId::subcollection(2)), None);
    }
}
