//! Media preferences, feature-card labels, and the shortcut demo pulse.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use motion::ambient::{AmbientAction, AmbientPreferences, feature_label, pulse_delay_ms};

use crate::dom;
use crate::error::DomError;
use crate::events::{self, Listeners};
use crate::page::Ctx;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: high)";
const PULSE_ANIMATION: &str = "pulse 2s ease-in-out infinite";

pub fn mount(ctx: &Ctx, _listeners: &mut Listeners) -> Result<(), DomError> {
    let selectors = &ctx.config.selectors;

    let preferences = AmbientPreferences {
        prefers_dark: dom::media_matches(&ctx.window, DARK_QUERY),
        reduced_motion: dom::media_matches(&ctx.window, REDUCED_MOTION_QUERY),
        high_contrast: dom::media_matches(&ctx.window, HIGH_CONTRAST_QUERY),
    };
    log::debug!("ambient: {preferences:?}");
    for action in preferences.actions() {
        match action {
            AmbientAction::SetRootProperty { name, value } => {
                let root = ctx
                    .document
                    .document_element()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    .ok_or(DomError::NoDocument)?;
                dom::set_style(&root, name, value);
            }
            AmbientAction::AddBodyClass(class) => {
                let body = ctx.document.body().ok_or(DomError::NoDocument)?;
                dom::set_class(&body, class, true);
            }
        }
    }

    for (index, card) in dom::query_all(&ctx.document, &selectors.feature_cards)?.iter().enumerate() {
        card.set_attribute("aria-label", &feature_label(index))?;
    }

    for (step, row) in dom::query_all(&ctx.document, &selectors.demo_steps)?.iter().enumerate() {
        let keys = dom::query_within(row, &selectors.demo_keys)?;
        if keys.is_empty() {
            continue;
        }
        events::after(pulse_delay_ms(step), move || {
            for key in &keys {
                dom::set_style(key, "animation", PULSE_ANIMATION);
            }
        });
    }
    Ok(())
}
