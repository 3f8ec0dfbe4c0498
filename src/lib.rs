//! # GRETE UI
//!
//! Interactive behavior for the GRETE marketing site. The site is rendered
//! ahead of time; this crate attaches behavior to it:
//!
//! - **Accordion**: collections and subcollections expand on header click,
//!   one at a time.
//! - **Galleries**: horizontally scrolling carousels with prev/next buttons,
//!   a `"01 / 07"` counter, and arrow-key navigation for the open
//!   subcollection.
//! - **Anchors**: in-page `#fragment` links scroll smoothly.
//! - **Hero parallax**: the hero background pans as the page scrolls, the
//!   vertical nav fades out, and the header appears once the hero is gone.
//!
//! # Architecture: Core + Surface
//!
//! ```text
//!   browser events ──▶ dom (wasm32) ──▶ Page::on_* ──▶ controllers
//!                          ▲                               │
//!                          └──────── Surface trait ◀───────┘
//! ```
//!
//! The controllers never touch the DOM directly. Every read (slide width,
//! track gap, scroll offset) and write (class flags, counters, scrolls,
//! inline styles) goes through the [`surface::Surface`] trait. The browser
//! binding implements it over `web-sys`; tests implement it with a recording
//! double. The whole behavior layer is therefore tested natively, without a
//! browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Setup in fixed order and one handler per event kind |
//! | [`accordion`] | Exclusive open/close state machine over all sections |
//! | [`gallery`] | Slide stepping, scroll → index, counter sync, reset |
//! | [`counter`] | `"DD / DD"` label formatting |
//! | [`keyboard`] | Arrow keys → direction |
//! | [`anchors`] | `#fragment` links → smooth scroll |
//! | [`parallax`] | Scroll offset → hero frame |
//! | [`state`] | Shared UI state and element identifiers |
//! | [`surface`] | The trait between controllers and the page |
//! | [`markup`] | Class names and flags the markup must provide |
//! | [`config`] | `grete-ui.toml` loading, validation, merging |
//! | [`embed`] | Config → JSON `<script>` element for the page |
//! | [`output`] | CLI report formatting |
//! | `dom` | `web-sys` surface, discovery, listeners (wasm32 only) |
//!
//! # Design Decisions
//!
//! ## One Exclusive Accordion
//!
//! Collections and subcollections share a single accordion. Opening any
//! section closes every open one, whichever group it belongs to, so the page
//! never shows two expanded sections. A `collection-header--main` header is
//! a static title: it can't be clicked open, but its section is still
//! closed when another one opens.
//!
//! ## Explicit UI State
//!
//! Which section is open lives in [`state::UiState`], not only in the
//! `is-open` class. The keyboard router reads it from there, so it never has
//! to query the page to find its gallery.
//!
//! ## One Step Size
//!
//! Buttons and arrow keys step by the same distance: first slide width plus
//! the track's CSS gap, with a configurable fallback gap. It is measured on
//! every step, never cached.
//!
//! ## Fire-and-Forget Scrolling
//!
//! Animated scrolls are handed to the browser and not tracked. A second
//! press during an animation starts a new relative scroll from wherever the
//! track currently is.

pub mod accordion;
pub mod anchors;
pub mod config;
pub mod counter;
pub mod embed;
pub mod gallery;
pub mod keyboard;
pub mod markup;
pub mod output;
pub mod page;
pub mod parallax;
pub mod state;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::BehaviorConfig;
pub use page::{Page, PageLayout};
pub use surface::Surface;

#[cfg(test)]
pub(crate) mod test_helpers;
