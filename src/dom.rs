//! Browser binding (wasm32 only).
//!
//! [`start`] is the wasm entrypoint. Once the document is parsed it:
//!
//! 1. reads the embedded config (`#grete-ui-config`), falling back to
//!    defaults when it is missing or invalid;
//! 2. discovers the page structure into a [`PageLayout`] and keeps handles
//!    to the elements in a [`DomSurface`];
//! 3. runs [`Page::setup`];
//! 4. registers one listener per header, gallery button, gallery track,
//!    anchor link, plus the global keydown and window scroll listeners.
//!
//! Listeners live for the page's lifetime (`forget`). They share the page
//! and surface through one `Rc<RefCell<_>>`; an event that arrives while
//! another handler holds the borrow is dropped with a warning.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::accordion::{HeaderKind, SectionSpec};
use crate::anchors::AnchorOutcome;
use crate::config::{BehaviorConfig, ScrollMotion};
use crate::embed::CONFIG_ELEMENT_ID;
use crate::gallery::{Direction, GallerySpec};
use crate::markup::{self, class_selector};
use crate::page::{Page, PageLayout};
use crate::parallax::ParallaxFrame;
use crate::state::{GalleryId, SectionId, SectionKind};
use crate::surface::Surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| mount(window, document))
            .forget();
    } else {
        mount(window, document);
    }
    Ok(())
}

// ============================================================================
// Element lookup
// ============================================================================

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn query_class(root: &Element, class: &str) -> Option<Element> {
    query(root, &class_selector(class))
}

fn query_html(root: &Element, class: &str) -> Option<HtmlElement> {
    query_class(root, class).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn document_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn document_first(document: &Document, class: &str) -> Option<Element> {
    document
        .query_selector(&class_selector(class))
        .ok()
        .flatten()
}

fn scroll_behavior(motion: ScrollMotion) -> ScrollBehavior {
    match motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Instant,
    }
}

fn set_flag(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

// ============================================================================
// Discovery
// ============================================================================

struct GalleryNodes {
    root: Element,
    track: Option<HtmlElement>,
    first_slide: Option<HtmlElement>,
    counter: Option<Element>,
    prev: Option<Element>,
    next: Option<Element>,
}

struct SectionNodes {
    root: Element,
    /// Clickable header; `None` for main or missing headers.
    header: Option<Element>,
}

/// [`Surface`] over the live document.
pub struct DomSurface {
    window: Window,
    document: Document,
    collections: Vec<SectionNodes>,
    subcollections: Vec<SectionNodes>,
    galleries: Vec<GalleryNodes>,
    hero: Option<HtmlElement>,
    nav: Option<HtmlElement>,
    header: Option<Element>,
}

impl DomSurface {
    fn sections(&self, kind: SectionKind) -> &[SectionNodes] {
        match kind {
            SectionKind::Collection => &self.collections,
            SectionKind::Subcollection => &self.subcollections,
        }
    }

    fn section(&self, id: SectionId) -> Option<&SectionNodes> {
        self.sections(id.kind).get(id.index)
    }

    fn gallery(&self, id: GalleryId) -> Option<&GalleryNodes> {
        self.galleries.get(id.0)
    }

    fn track(&self, id: GalleryId) -> Option<&HtmlElement> {
        self.gallery(id).and_then(|g| g.track.as_ref())
    }
}

fn discover_gallery(root: Element) -> (GallerySpec, GalleryNodes) {
    let slides = root
        .query_selector_all(&class_selector(markup::GALLERY_SLIDE))
        .map(elements)
        .unwrap_or_default();
    let nodes = GalleryNodes {
        track: query_html(&root, markup::GALLERY_TRACK),
        first_slide: slides
            .first()
            .and_then(|s| s.clone().dyn_into::<HtmlElement>().ok()),
        counter: query_class(&root, markup::GALLERY_COUNTER),
        prev: query_class(&root, markup::GALLERY_PREV),
        next: query_class(&root, markup::GALLERY_NEXT),
        root,
    };
    let spec = GallerySpec {
        has_track: nodes.track.is_some(),
        slides: slides.len(),
        has_counter: nodes.counter.is_some(),
        has_prev: nodes.prev.is_some(),
        has_next: nodes.next.is_some(),
    };
    (spec, nodes)
}

fn discover_section(
    root: Element,
    kind: SectionKind,
    galleries: &[GalleryNodes],
) -> (SectionSpec, SectionNodes) {
    let (header, kind_of_header) = match kind {
        SectionKind::Collection => match query(&root, &markup::interactive_collection_header()) {
            Some(h) => (Some(h), HeaderKind::Interactive),
            None if query_class(&root, markup::COLLECTION_HEADER).is_some() => {
                (None, HeaderKind::Main)
            }
            None => (None, HeaderKind::Missing),
        },
        SectionKind::Subcollection => match query_class(&root, markup::SUBCOLLECTION_HEADER) {
            Some(h) => (Some(h), HeaderKind::Interactive),
            None => (None, HeaderKind::Missing),
        },
    };
    let gallery = query_class(&root, markup::GALLERY)
        .and_then(|g| galleries.iter().position(|nodes| nodes.root == g))
        .map(GalleryId);
    let spec = SectionSpec {
        header: kind_of_header,
        gallery,
    };
    (spec, SectionNodes { root, header })
}

/// Walk the document once and describe it.
pub fn discover(window: Window, document: Document) -> (PageLayout, DomSurface) {
    let (gallery_specs, galleries): (Vec<_>, Vec<_>) =
        document_all(&document, &class_selector(markup::GALLERY))
            .into_iter()
            .map(discover_gallery)
            .unzip();

    let (collection_specs, collections): (Vec<_>, Vec<_>) =
        document_all(&document, &class_selector(markup::COLLECTION))
            .into_iter()
            .map(|el| discover_section(el, SectionKind::Collection, &galleries))
            .unzip();
    let (subcollection_specs, subcollections): (Vec<_>, Vec<_>) =
        document_all(&document, &class_selector(markup::SUBCOLLECTION))
            .into_iter()
            .map(|el| discover_section(el, SectionKind::Subcollection, &galleries))
            .unzip();

    let hero = document_first(&document, markup::HERO)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let nav = document_first(&document, markup::NAV_VERTICAL)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let header = document_first(&document, markup::HEADER);

    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let layout = PageLayout {
        collections: collection_specs,
        subcollections: subcollection_specs,
        galleries: gallery_specs,
        has_hero: hero.is_some(),
        viewport_height,
    };
    let surface = DomSurface {
        window,
        document,
        collections,
        subcollections,
        galleries,
        hero,
        nav,
        header,
    };
    (layout, surface)
}

impl Surface for DomSurface {
    fn set_section_open(&mut self, section: SectionId, open: bool) {
        if let Some(nodes) = self.section(section) {
            set_flag(&nodes.root, markup::IS_OPEN, open);
        }
    }

    fn is_section_open(&self, section: SectionId) -> bool {
        self.section(section)
            .is_some_and(|nodes| nodes.root.class_list().contains(markup::IS_OPEN))
    }

    fn first_slide_width(&self, gallery: GalleryId) -> f64 {
        self.gallery(gallery)
            .and_then(|g| g.first_slide.as_ref())
            .map(|slide| f64::from(slide.offset_width()))
            .unwrap_or(0.0)
    }

    fn track_gap(&self, gallery: GalleryId) -> Option<String> {
        let track = self.track(gallery)?;
        self.window
            .get_computed_style(track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("gap").ok())
    }

    fn track_scroll_left(&self, gallery: GalleryId) -> f64 {
        self.track(gallery)
            .map(|t| f64::from(t.scroll_left()))
            .unwrap_or(0.0)
    }

    fn set_track_scroll_left(&mut self, gallery: GalleryId, offset: f64) {
        if let Some(track) = self.track(gallery) {
            track.set_scroll_left(offset.round() as i32);
        }
    }

    fn scroll_track_by(&mut self, gallery: GalleryId, delta: f64, motion: ScrollMotion) {
        if let Some(track) = self.track(gallery) {
            let options = ScrollToOptions::new();
            options.set_left(delta);
            options.set_behavior(scroll_behavior(motion));
            track.scroll_by_with_scroll_to_options(&options);
        }
    }

    fn set_counter_text(&mut self, gallery: GalleryId, text: &str) {
        if let Some(counter) = self.gallery(gallery).and_then(|g| g.counter.as_ref()) {
            counter.set_text_content(Some(text));
        }
    }

    fn scroll_to_anchor(&mut self, id: &str, motion: ScrollMotion) -> bool {
        let Some(target) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(scroll_behavior(motion));
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn apply_parallax(&mut self, frame: &ParallaxFrame) {
        if let (Some(hero), Some(position)) = (&self.hero, frame.background_position()) {
            let _ = hero
                .style()
                .set_property(markup::BACKGROUND_POSITION, &position);
        }
        if let Some(nav) = &self.nav {
            let _ = nav.style().set_property(markup::OPACITY, &frame.opacity_css());
        }
        if let Some(header) = &self.header {
            set_flag(header, markup::IS_VISIBLE, frame.header_visible);
        }
    }
}

// ============================================================================
// Listener wiring
// ============================================================================

struct App {
    page: Page,
    surface: DomSurface,
}

type Shared = Rc<RefCell<App>>;

fn with_app<R>(app: &Shared, f: impl FnOnce(&mut Page, &mut DomSurface) -> R) -> Option<R> {
    match app.try_borrow_mut() {
        Ok(mut guard) => {
            let App { page, surface } = &mut *guard;
            Some(f(page, surface))
        }
        Err(_) => {
            tracing::warn!("event dropped: page state busy");
            None
        }
    }
}

fn read_config(document: &Document) -> BehaviorConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return BehaviorConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    match BehaviorConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid embedded config, using defaults");
            BehaviorConfig::default()
        }
    }
}

fn mount(window: Window, document: Document) {
    let config = read_config(&document);
    let (layout, mut surface) = discover(window.clone(), document.clone());
    let page = Page::setup(&layout, &config, &mut surface);
    let app: Shared = Rc::new(RefCell::new(App { page, surface }));

    wire_sections(&app);
    wire_galleries(&app);
    wire_anchors(&app, &document);
    wire_keyboard(&app, &document);
    wire_window_scroll(&app, &window);
}

fn wire_sections(app: &Shared) {
    let headers: Vec<(SectionId, Element)> = {
        let app = app.borrow();
        app.page
            .interactive_sections()
            .filter_map(|id| {
                let header = app.surface.section(id)?.header.clone()?;
                Some((id, header))
            })
            .collect()
    };
    for (id, header) in headers {
        let app = app.clone();
        EventListener::new(&header, "click", move |_| {
            with_app(&app, |page, surface| page.on_header_click(id, surface));
        })
        .forget();
    }
}

fn wire_galleries(app: &Shared) {
    let targets: Vec<(GalleryId, Option<Element>, Option<Element>, HtmlElement)> = {
        let app = app.borrow();
        app.page
            .wired_galleries()
            .filter_map(|gallery| {
                let nodes = app.surface.gallery(gallery.id())?;
                let track = nodes.track.clone()?;
                Some((gallery.id(), nodes.prev.clone(), nodes.next.clone(), track))
            })
            .collect()
    };
    for (id, prev, next, track) in targets {
        for (direction, button) in [(Direction::Previous, prev), (Direction::Next, next)] {
            let Some(button) = button else {
                continue;
            };
            let app = app.clone();
            EventListener::new(&button, "click", move |_| {
                with_app(&app, |page, surface| {
                    page.on_gallery_control(id, direction, surface)
                });
            })
            .forget();
        }
        let app = app.clone();
        EventListener::new(&track, "scroll", move |_| {
            with_app(&app, |page, surface| page.on_track_scroll(id, surface));
        })
        .forget();
    }
}

fn wire_anchors(app: &Shared, document: &Document) {
    if !app.borrow().page.anchors_enabled() {
        return;
    }
    for anchor in document_all(document, markup::ANCHOR_LINKS) {
        let app = app.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let outcome = with_app(&app, |page, surface| page.on_anchor_click(&href, surface));
                if outcome == Some(AnchorOutcome::Scrolled) {
                    event.prevent_default();
                }
            },
        )
        .forget();
    }
}

fn wire_keyboard(app: &Shared, document: &Document) {
    if !app.borrow().page.keyboard_enabled() {
        return;
    }
    let app = app.clone();
    EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        with_app(&app, |page, surface| page.on_key(&key, surface));
    })
    .forget();
}

fn wire_window_scroll(app: &Shared, window: &Window) {
    let app = app.clone();
    let source = window.clone();
    EventListener::new(window, "scroll", move |_| {
        let scroll_y = source.scroll_y().unwrap_or(0.0);
        with_app(&app, |page, surface| page.on_window_scroll(scroll_y, surface));
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = r##"
        <header class="header"></header>
        <section class="collection is-open" id="c-main">
            <h1 class="collection-header collection-header--main">GRETE</h1>
        </section>
        <section class="collection" id="c-spring">
            <h2 class="collection-header">Spring</h2>
            <div class="subcollection" id="s-runway">
                <h3 class="subcollection-header">Runway</h3>
                <div class="gallery">
                    <div class="gallery-track">
                        <div class="gallery-slide"></div>
                        <div class="gallery-slide"></div>
                    </div>
                    <span class="gallery-counter" id="runway-counter"></span>
                    <button class="gallery-prev"></button>
                    <button class="gallery-next"></button>
                </div>
            </div>
        </section>
        <section class="collection"></section>
        <a id="to-lookbook" href="#lookbook">Lookbook</a>
        <a id="to-missing" href="#missing">Missing</a>
        <div id="lookbook"></div>
    "##;

    fn load(html: &str) -> (Window, Document) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        document.body().unwrap().set_inner_html(html);
        (window, document)
    }

    fn by_id(document: &Document, id: &str) -> Element {
        document.get_element_by_id(id).unwrap()
    }

    fn click(target: &Element) -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("click", &init).unwrap();
        target.dispatch_event(&event).unwrap();
        event
    }

    fn is_open(document: &Document, id: &str) -> bool {
        by_id(document, id).class_list().contains(markup::IS_OPEN)
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    #[wasm_bindgen_test]
    fn headers_are_classified() {
        let (window, document) = load(PAGE);
        let (layout, _) = discover(window, document);

        let headers: Vec<HeaderKind> = layout.collections.iter().map(|s| s.header).collect();
        assert_eq!(
            headers,
            vec![HeaderKind::Main, HeaderKind::Interactive, HeaderKind::Missing]
        );
        assert_eq!(layout.subcollections[0].header, HeaderKind::Interactive);
    }

    #[wasm_bindgen_test]
    fn collection_maps_to_gallery_of_its_subcollection() {
        let (window, document) = load(PAGE);
        let (layout, _) = discover(window, document);

        assert_eq!(layout.galleries, vec![GallerySpec::full(2)]);
        assert_eq!(layout.collections[0].gallery, None);
        assert_eq!(layout.collections[1].gallery, Some(GalleryId(0)));
        assert_eq!(layout.subcollections[0].gallery, Some(GalleryId(0)));
    }

    // =========================================================================
    // Config
    // =========================================================================

    #[wasm_bindgen_test]
    fn embedded_config_is_read() {
        let (_, document) = load(
            r#"<script type="application/json" id="grete-ui-config">{"keyboard":{"enabled":false}}</script>"#,
        );
        assert!(!read_config(&document).keyboard.enabled);
    }

    #[wasm_bindgen_test]
    fn invalid_or_missing_config_falls_back_to_defaults() {
        let (_, document) =
            load(r#"<script type="application/json" id="grete-ui-config">{"keyboard":</script>"#);
        assert_eq!(read_config(&document), BehaviorConfig::default());

        let (_, document) = load("<main></main>");
        assert_eq!(read_config(&document), BehaviorConfig::default());
    }

    // =========================================================================
    // Mounted page
    // =========================================================================

    #[wasm_bindgen_test]
    fn mount_applies_initial_state() {
        let (window, document) = load(PAGE);
        mount(window, document.clone());

        assert!(is_open(&document, "s-runway"));
        assert!(!is_open(&document, "c-main"));
        assert_eq!(
            by_id(&document, "runway-counter").text_content().as_deref(),
            Some("01 / 02")
        );
    }

    #[wasm_bindgen_test]
    fn header_click_opens_collection_and_closes_the_rest() {
        let (window, document) = load(PAGE);
        mount(window, document.clone());
        // Set again after load; the next open must still clear it
        let _ = by_id(&document, "c-main").class_list().add_1(markup::IS_OPEN);

        let header = query_class(&by_id(&document, "c-spring"), markup::COLLECTION_HEADER).unwrap();
        click(&header);

        assert!(is_open(&document, "c-spring"));
        assert!(!is_open(&document, "s-runway"));
        assert!(!is_open(&document, "c-main"));
    }

    #[wasm_bindgen_test]
    fn main_header_click_does_nothing() {
        let (window, document) = load(PAGE);
        mount(window, document.clone());

        let header = query_class(&by_id(&document, "c-main"), markup::COLLECTION_HEADER).unwrap();
        click(&header);

        assert!(!is_open(&document, "c-main"));
        assert!(is_open(&document, "s-runway"));
    }

    #[wasm_bindgen_test]
    fn anchor_to_existing_target_prevents_navigation() {
        let (window, document) = load(PAGE);
        mount(window, document.clone());

        let event = click(&by_id(&document, "to-lookbook"));
        assert!(event.default_prevented());
    }

    #[wasm_bindgen_test]
    fn anchor_to_missing_target_keeps_default() {
        let (window, document) = load(PAGE);
        mount(window, document.clone());

        let event = click(&by_id(&document, "to-missing"));
        assert!(!event.default_prevented());
    }
}
