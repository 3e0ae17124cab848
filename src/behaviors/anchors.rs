//! Smooth scrolling for in-page fragment links.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use motion::anchor::{fragment_id, scroll_target};

use crate::dom;
use crate::error::DomError;
use crate::events::Listeners;
use crate::page::Ctx;

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let links = dom::query_all(&ctx.document, &ctx.config.selectors.anchors)?;
    for link in links {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let navbar_selector = ctx.config.selectors.navbar.clone();
        let gap = ctx.config.anchor_gap;
        let target = link.clone();
        listeners.listen(&target, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(section) = fragment_id(&href)
                .and_then(|id| document.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            // Measured per click: the navbar height changes with `scrolled`.
            let navbar_height = match dom::query_one(&document, &navbar_selector) {
                Ok(Some(navbar)) => f64::from(navbar.offset_height()),
                Ok(None) => 0.0,
                Err(err) => {
                    log::debug!("anchors: {err}");
                    0.0
                }
            };
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(f64::from(section.offset_top()), navbar_height, gap));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}
