//! Shared UI state.
//!
//! The accordion writes which section is open; the window scroll handler
//! writes the last observed offset. The keyboard router reads the open
//! section from here instead of querying the page for `.is-open`.

use std::fmt;

/// Top-level or nested expandable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Collection,
    Subcollection,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Collection => f.write_str("collection"),
            SectionKind::Subcollection => f.write_str("subcollection"),
        }
    }
}

/// A section, identified by its kind and its position among sections of
/// that kind in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId {
    pub kind: SectionKind,
    pub index: usize,
}

impl SectionId {
    pub fn collection(index: usize) -> Self {
        Self {
            kind: SectionKind::Collection,
            index,
        }
    }

    pub fn subcollection(index: usize) -> Self {
        Self {
            kind: SectionKind::Subcollection,
            index,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.index)
    }
}

/// A `.gallery` element, by position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GalleryId(pub usize);

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gallery #{}", self.0)
    }
}

/// Transient state for one page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// The single expanded section, if any.
    pub open: Option<SectionId>,
    /// Window vertical scroll offset from the latest scroll event.
    pub scroll_y: f64,
}

impl UiState {
    pub fn is_open(&self, id: SectionId) -> bool {
        self.open == Some(id)
    }

    /// The open section, if it is a subcollection.
    pub fn open_subcollection(&self) -> Option<SectionId> {
        self.open.filter(|id| id.kind == SectionKind::Subcollection)
    }
}
