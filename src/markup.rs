//! Structural contract with the pre-rendered page.
//!
//! The behavior layer never creates elements. It finds them by class name,
//! flips state flags on them, and writes a couple of inline style properties.
//! Every name the layer depends on lives here so the contract with the
//! stylesheet and the markup can be read in one place.
//!
//! ```text
//! .collection                       .subcollection
//! ├── .collection-header            ├── .subcollection-header
//! │   (or .collection-header--main) └── .gallery
//! └── .gallery                          ├── .gallery-track
//!     ├── .gallery-track                │   └── .gallery-slide ×N
//!     │   └── .gallery-slide ×N         ├── .gallery-prev / .gallery-next
//!     ├── .gallery-prev / .gallery-next └── .gallery-counter
//!     └── .gallery-counter
//!
//! .hero   .nav-vertical   .header
//! ```

pub const COLLECTION: &str = "collection";
pub const COLLECTION_HEADER: &str = "collection-header";
/// Marks a collection header that is a static title, not a toggle.
pub const COLLECTION_HEADER_MAIN: &str = "collection-header--main";
pub const SUBCOLLECTION: &str = "subcollection";
pub const SUBCOLLECTION_HEADER: &str = "subcollection-header";

pub const GALLERY: &str = "gallery";
pub const GALLERY_TRACK: &str = "gallery-track";
pub const GALLERY_PREV: &str = "gallery-prev";
pub const GALLERY_NEXT: &str = "gallery-next";
pub const GALLERY_SLIDE: &str = "gallery-slide";
pub const GALLERY_COUNTER: &str = "gallery-counter";

pub const HERO: &str = "hero";
pub const NAV_VERTICAL: &str = "nav-vertical";
pub const HEADER: &str = "header";

/// Set on an expanded collection or subcollection.
pub const IS_OPEN: &str = "is-open";
/// Set on the header chrome once the hero has scrolled out of view.
pub const IS_VISIBLE: &str = "is-visible";

/// Inline style property driven by the hero parallax.
pub const BACKGROUND_POSITION: &str = "background-position";
/// Inline style property driven on the vertical nav.
pub const OPACITY: &str = "opacity";

/// Selector for in-page anchor links.
pub const ANCHOR_LINKS: &str = r##"a[href^="#"]"##;

/// Turn a class name into a class selector.
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

/// Selector for a collection header that can be clicked.
pub fn interactive_collection_header() -> String {
    format!(".{COLLECTION_HEADER}:not(.{COLLECTION_HEADER_MAIN})")
}
