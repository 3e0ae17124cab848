//! Keyboard mode, arrow-key focus stepping, and Escape-to-close.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use motion::keyboard::{FocusStep, KeyAction, KeyboardNav, step_focus};

use crate::dom;
use crate::error::DomError;
use crate::events::Listeners;
use crate::page::Ctx;

const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";
const ACTIVE_CLASS: &str = "active";

struct KeyboardScope {
    document: Document,
    body: HtmlElement,
    focusable: String,
    modals: String,
}

impl KeyboardScope {
    fn apply(&self, actions: Vec<KeyAction>, event: &Event) -> Result<(), DomError> {
        for action in actions {
            match action {
                KeyAction::SetKeyboardMode(on) => dom::set_class(&self.body, KEYBOARD_NAV_CLASS, on),
                KeyAction::StepFocus(step) => self.step(step, event)?,
                KeyAction::CloseModals => {
                    for modal in dom::query_all(&self.document, &self.modals)? {
                        dom::set_class(&modal, ACTIVE_CLASS, false);
                    }
                }
            }
        }
        Ok(())
    }

    fn step(&self, step: FocusStep, event: &Event) -> Result<(), DomError> {
        let focusable = dom::query_all(&self.document, &self.focusable)?;
        let current = self
            .document
            .active_element()
            .and_then(|active| focusable.iter().position(|el| **el == active));
        if let Some(next) = step_focus(step, current, focusable.len()) {
            event.prevent_default();
            focusable[next].focus()?;
        }
        Ok(())
    }
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let selectors = &ctx.config.selectors;
    let scope = Rc::new(KeyboardScope {
        document: ctx.document.clone(),
        body: ctx.document.body().ok_or(DomError::NoDocument)?,
        focusable: selectors.focusable.clone(),
        modals: selectors.modals.clone(),
    });
    let nav = Rc::new(RefCell::new(KeyboardNav::new()));

    let key_scope = Rc::clone(&scope);
    let key_nav = Rc::clone(&nav);
    listeners.listen(&ctx.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let actions = key_nav.borrow_mut().on_key_down(&key);
        if let Err(err) = key_scope.apply(actions, &event) {
            log::debug!("keyboard: {err}");
        }
    })?;

    listeners.listen(&ctx.document, "mousedown", move |event| {
        let actions = nav.borrow_mut().on_mouse_down();
        if let Err(err) = scope.apply(actions, &event) {
            log::debug!("keyboard: {err}");
        }
    })
}
