//! Page bootstrap: load configuration, mount every behavior, keep it alive.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs from the wasm start hook. If the document is still parsing it
//! defers to `DOMContentLoaded`; otherwise it mounts immediately. Behaviors
//! mount in a fixed order and independently: one that fails is logged and
//! the rest still run. The resulting [`Listeners`] live in a thread-local
//! for the life of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::behaviors;
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::dom;
use crate::error::DomError;
use crate::events::Listeners;

/// Handles every behavior needs while mounting.
pub struct Ctx {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
}

type MountFn = fn(&Ctx, &mut Listeners) -> Result<(), DomError>;

const STEPS: &[(&str, MountFn)] = &[
    ("theme", behaviors::theme::mount),
    ("ambient", behaviors::ambient::mount),
    ("layout", behaviors::layout::mount),
    ("anchors", behaviors::anchors::mount),
    ("navbar", behaviors::navbar::mount),
    ("reveal", behaviors::reveal::mount),
    ("lazy", behaviors::lazy::mount),
    ("carousel", behaviors::carousel::mount),
    ("ripple", behaviors::ripple::mount),
    ("keyboard", behaviors::keyboard::mount),
];

thread_local! {
    static PAGE: RefCell<Option<Listeners>> = const { RefCell::new(None) };
}

fn load_config(document: &Document) -> PageConfig {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => PageConfig::from_json_or_default(&raw),
        None => PageConfig::default(),
    }
}

fn mount(window: Window, document: Document) {
    let ctx = Ctx { config: Rc::new(load_config(&document)), window, document };
    let mut listeners = Listeners::default();
    for (name, step) in STEPS {
        match step(&ctx, &mut listeners) {
            Ok(()) => log::debug!("{name}: mounted"),
            Err(err) => log::warn!("{name}: {err}"),
        }
    }
    log::info!("landing page ready ({} listeners)", listeners.len());
    PAGE.with(|page| page.borrow_mut().replace(listeners));
}

/// Mount the page now, or once the DOM has finished parsing.
///
/// # Errors
///
/// Returns [`DomError`] when there is no window or document, or when the
/// `DOMContentLoaded` listener cannot be registered.
pub fn boot() -> Result<(), DomError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() != "loading" {
        mount(window, document);
        return Ok(());
    }
    let target = document.clone();
    let ready = Closure::once_into_js(move || mount(window, document));
    target.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
    Ok(())
}
