//! Image preloading and the settled-resize mobile reset.

use web_sys::{Document, Window};

use motion::ambient::is_narrow;

use crate::dom;
use crate::error::DomError;
use crate::events::{Listeners, TimerSlot};
use crate::page::Ctx;

fn preload(document: &Document, sources: &[String]) -> Result<(), DomError> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    for href in sources {
        let link = document.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("as", "image")?;
        link.set_attribute("href", href)?;
        head.append_child(&link)?;
    }
    Ok(())
}

fn reset_mobile_images(window: &Window, document: &Document, selector: &str, breakpoint: f64) {
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(f64::INFINITY);
    if !is_narrow(width, breakpoint) {
        return;
    }
    match dom::query_all(document, selector) {
        Ok(images) => {
            for image in &images {
                dom::set_style(image, "transform", "translateZ(0)");
                dom::set_style(image, "will-change", "auto");
            }
        }
        Err(err) => log::debug!("layout: {err}"),
    }
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    preload(&ctx.document, &ctx.config.preload_images)?;

    let timer = TimerSlot::default();
    let window = ctx.window.clone();
    let document = ctx.document.clone();
    let selector = ctx.config.selectors.mobile_reset_images.clone();
    let breakpoint = ctx.config.mobile_breakpoint;
    let debounce_ms = ctx.config.resize_debounce_ms;
    listeners.listen(&ctx.window, "resize", move |_| {
        let window = window.clone();
        let document = document.clone();
        let selector = selector.clone();
        timer.arm(debounce_ms, move || reset_mobile_images(&window, &document, &selector, breakpoint));
    })
}
