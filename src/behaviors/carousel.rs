//! Carousel strips: indicator clicks, settle-on-scroll, overflow-aware dots.
//!
//! Each configured strip gets its own `motion::carousel::Carousel`. Strips
//! are independent; one with missing markup is skipped without affecting
//! the others.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use motion::carousel::{Carousel, CarouselAction};

use crate::config::CarouselMarkup;
use crate::dom::{self, StripElements};
use crate::error::DomError;
use crate::events::{Listeners, TimerSlot};
use crate::page::Ctx;

const ACTIVE_CLASS: &str = "active";

struct StripView {
    layout: StripElements,
    indicators: Vec<HtmlElement>,
    row: Option<HtmlElement>,
}

impl StripView {
    fn apply(&self, actions: &[CarouselAction]) {
        for action in actions {
            match action {
                CarouselAction::ScrollTo { left } => {
                    let options = ScrollToOptions::new();
                    options.set_left(*left);
                    options.set_behavior(ScrollBehavior::Smooth);
                    self.layout.container.scroll_to_with_scroll_to_options(&options);
                }
                CarouselAction::SyncIndicators { active } => {
                    for (index, indicator) in self.indicators.iter().enumerate() {
                        dom::set_class(indicator, ACTIVE_CLASS, index == *active);
                    }
                }
                CarouselAction::ShowIndicators(show) => {
                    if let Some(row) = &self.row {
                        dom::set_style(row, "display", if *show { "flex" } else { "none" });
                    }
                }
            }
        }
    }
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    for markup in &ctx.config.carousels {
        if let Err(err) = mount_strip(ctx, listeners, markup) {
            log::warn!("carousel {}: {err}", markup.name);
        }
    }
    Ok(())
}

fn mount_strip(ctx: &Ctx, listeners: &mut Listeners, markup: &CarouselMarkup) -> Result<(), DomError> {
    let name = markup.name.clone();
    let Some(container) = dom::query_one(&ctx.document, &markup.container)? else {
        log::debug!("carousel {name}: no container");
        return Ok(());
    };
    let items = dom::query_all(&ctx.document, &markup.items)?;
    let indicators = dom::query_all(&ctx.document, &markup.indicators)?;
    let Some(carousel) = Carousel::builder()
        .items(items.len())
        .indicators(indicators.len())
        .overflow_aware(markup.overflow_aware)
        .build()
    else {
        return Ok(());
    };
    let row = match &markup.indicator_row {
        Some(selector) => dom::query_one(&ctx.document, selector)?,
        None => None,
    };

    let tracked = carousel.len();
    let view = Rc::new(StripView { layout: StripElements { container, items }, indicators, row });
    let state = Rc::new(RefCell::new(carousel));

    let initial = state.borrow_mut().mount(&view.layout);
    view.apply(&initial);

    for (index, indicator) in view.indicators.iter().enumerate() {
        let state = Rc::clone(&state);
        let click_view = Rc::clone(&view);
        let name = name.clone();
        listeners.listen(indicator, "click", move |_| {
            let result = state.borrow_mut().activate(index, &click_view.layout);
            match result {
                Ok(actions) => click_view.apply(&actions),
                Err(err) => log::debug!("carousel {name}: {err}"),
            }
        })?;
    }

    let settle_ms = ctx.config.carousel_settle_ms;
    let timer = TimerSlot::default();
    let scroll_state = Rc::clone(&state);
    let scroll_view = Rc::clone(&view);
    listeners.listen_passive(&view.layout.container, "scroll", move |_| {
        let token = scroll_state.borrow_mut().on_scroll();
        let state = Rc::clone(&scroll_state);
        let view = Rc::clone(&scroll_view);
        timer.arm(settle_ms, move || {
            let actions = state.borrow_mut().on_settle(token, &view.layout);
            view.apply(&actions);
        });
    })?;

    if markup.overflow_aware {
        let resize_view = Rc::clone(&view);
        listeners.listen(&ctx.window, "resize", move |_| {
            let actions = state.borrow().on_resize(&resize_view.layout);
            resize_view.apply(&actions);
        })?;
    }

    log::debug!("carousel {name}: tracking {tracked} items");
    Ok(())
}
