//! Thin web-sys helpers shared by the behaviors.
//!
//! Queries return owned element lists so callers can move them into event
//! closures. Geometry comes back as `motion` types.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MediaQueryList, NodeList, Storage, Window};

use motion::carousel::StripLayout;
use motion::geometry::Rect;
use motion::theme::PreferenceStore;

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// All HTML elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// All HTML elements under `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    Ok(html_elements(&root.query_selector_all(selector)?))
}

/// First HTML element in the document matching `selector`.
pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, DomError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Add or remove a class, logging (not failing) on a DOM exception.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("class {class}: {}", DomError::from(err));
    }
}

/// Set an inline style property, logging on failure.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("style {property}: {}", DomError::from(err));
    }
}

/// Evaluate a media query. Unsupported queries count as not matching.
pub fn media(window: &Window, query: &str) -> Option<MediaQueryList> {
    window.match_media(query).ok().flatten()
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    media(window, query).is_some_and(|mq| mq.matches())
}

/// `window.localStorage`, when the browser grants it.
///
/// Private browsing modes may deny storage; reads then see nothing and
/// writes are dropped, which leaves the theme in `system` mode.
#[derive(Debug)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("could not persist {key}: {}", DomError::from(err));
        }
    }
}

/// Live geometry of a carousel strip.
#[derive(Debug, Clone)]
pub struct StripElements {
    pub container: HtmlElement,
    pub items: Vec<HtmlElement>,
}

impl StripLayout for StripElements {
    fn container_rect(&self) -> Rect {
        rect_of(&self.container)
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        self.items.get(index).map(|item| rect_of(item))
    }

    fn container_offset(&self) -> f64 {
        f64::from(self.container.offset_left())
    }

    fn item_offset(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|item| f64::from(item.offset_left()))
    }

    fn content_width(&self) -> f64 {
        f64::from(self.container.scroll_width())
    }

    fn visible_width(&self) -> f64 {
        f64::from(self.container.client_width())
    }
}
