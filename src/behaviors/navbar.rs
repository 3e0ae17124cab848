//! Sticky navbar: toggles `scrolled` once per frame while the window scrolls.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, Window};

use motion::navbar::NavbarState;

use crate::dom;
use crate::error::DomError;
use crate::events::{self, Listeners};
use crate::page::Ctx;

const SCROLLED_CLASS: &str = "scrolled";

fn update(window: &Window, navbar: &HtmlElement, state: &RefCell<NavbarState>) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let scrolled = state.borrow_mut().on_frame(offset);
    dom::set_class(navbar, SCROLLED_CLASS, scrolled);
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let Some(navbar) = dom::query_one(&ctx.document, &ctx.config.selectors.navbar)? else {
        log::debug!("navbar: not found");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(NavbarState::new(ctx.config.navbar_scrolled_offset)));
    let window = ctx.window.clone();

    listeners.listen_passive(&ctx.window, "scroll", move |_| {
        if !state.borrow_mut().on_scroll() {
            return;
        }
        let frame_window = window.clone();
        let frame_navbar = navbar.clone();
        let frame_state = Rc::clone(&state);
        let scheduled = events::request_frame(&window, move || update(&frame_window, &frame_navbar, &frame_state));
        if let Err(err) = scheduled {
            // No frame available; update synchronously instead.
            log::debug!("navbar: {err}");
            update(&window, &navbar, &state);
        }
    })
}
