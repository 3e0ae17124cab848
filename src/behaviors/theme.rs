//! Theme toggles, the persisted preference, and OS appearance changes.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use motion::theme::{ThemeAction, ThemeController, ThemeMode};

use crate::dom::{self, LocalStorage};
use crate::error::DomError;
use crate::events::Listeners;
use crate::page::Ctx;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const THEME_ATTRIBUTE: &str = "data-theme";
const APPEARANCE_ATTRIBUTE: &str = "data-appearance";
const ACTIVE_CLASS: &str = "active";

struct ThemeSurface {
    body: HtmlElement,
    toggles: Vec<HtmlElement>,
}

impl ThemeSurface {
    fn apply(&self, actions: &[ThemeAction]) {
        for action in actions {
            match action {
                ThemeAction::Apply { attribute, appearance } => {
                    let result = match attribute {
                        Some(value) => self.body.set_attribute(THEME_ATTRIBUTE, value),
                        None => self.body.remove_attribute(THEME_ATTRIBUTE),
                    };
                    if let Err(err) = result
                        .and_then(|()| self.body.set_attribute(APPEARANCE_ATTRIBUTE, appearance.as_str()))
                    {
                        log::debug!("theme: {}", DomError::from(err));
                    }
                }
                ThemeAction::SetToggleActive { index, active } => {
                    if let Some(toggle) = self.toggles.get(*index) {
                        dom::set_class(toggle, ACTIVE_CLASS, *active);
                    }
                }
            }
        }
    }
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let selectors = &ctx.config.selectors;
    let body = ctx.document.body().ok_or(DomError::NoDocument)?;
    let toggles = dom::query_all(&ctx.document, &selectors.theme_toggles)?;
    let modes = toggles
        .iter()
        .map(|toggle| {
            toggle
                .get_attribute(&selectors.theme_mode_attribute)
                .and_then(|raw| ThemeMode::from_attribute(&raw))
        })
        .collect::<Vec<_>>();

    let system = dom::media(&ctx.window, DARK_QUERY);
    let prefers_dark = system.as_ref().is_some_and(web_sys::MediaQueryList::matches);

    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalStorage::open(&ctx.window),
        ctx.config.storage_key.clone(),
        modes,
        prefers_dark,
    )));
    let surface = Rc::new(ThemeSurface { body, toggles });

    let initial = controller.borrow_mut().initialize();
    surface.apply(&initial);

    for (index, toggle) in surface.toggles.iter().enumerate() {
        let controller = Rc::clone(&controller);
        let surface_for_click = Rc::clone(&surface);
        listeners.listen(toggle, "click", move |_| {
            let actions = controller.borrow_mut().on_toggle_click(index);
            surface_for_click.apply(&actions);
        })?;
    }

    if let Some(system) = system {
        let query = system.clone();
        listeners.listen(&system, "change", move |_| {
            let actions = controller.borrow_mut().on_system_appearance_change(query.matches());
            surface.apply(&actions);
        })?;
    }
    Ok(())
}
