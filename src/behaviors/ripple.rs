//! Click ripples on primary call-to-action controls.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use motion::ripple::RippleSpec;

use crate::dom;
use crate::error::DomError;
use crate::events::{self, Listeners};
use crate::page::Ctx;

fn spawn(document: &Document, control: &HtmlElement, spec: RippleSpec, lifetime_ms: u32) -> Result<(), DomError> {
    let ripple = document.create_element("span")?;
    ripple.set_attribute("style", &spec.style(lifetime_ms))?;
    dom::set_style(control, "position", "relative");
    dom::set_style(control, "overflow", "hidden");
    control.append_child(&ripple)?;
    events::after(lifetime_ms, move || ripple.remove());
    Ok(())
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let controls = dom::query_all(&ctx.document, &ctx.config.selectors.ripple_controls)?;
    let lifetime_ms = ctx.config.ripple_lifetime_ms;
    for control in controls {
        let document = ctx.document.clone();
        let target = control.clone();
        listeners.listen(&target, "click", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let spec = RippleSpec::at(
                dom::rect_of(&control),
                f64::from(mouse.client_x()),
                f64::from(mouse.client_y()),
            );
            if let Err(err) = spawn(&document, &control, spec, lifetime_ms) {
                log::debug!("ripple: {err}");
            }
        })?;
    }
    Ok(())
}
