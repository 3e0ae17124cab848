//! Event subscription and deferred-callback plumbing.
//!
//! ARCHITECTURE
//! ============
//! Behaviors register DOM listeners and intersection observers through
//! [`Listeners`], which owns every JS closure for the life of the page.
//! Frame callbacks are one-shot closures handed straight to the browser.
//! Timers are `gloo_timers` timeouts: dropping a pending one cancels it,
//! so a debounce restart is just a replacement.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::error::DomError;

type EventClosure = Closure<dyn FnMut(Event)>;
type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owner of every listener and observer closure registered by the page.
#[derive(Default)]
pub struct Listeners {
    events: Vec<EventClosure>,
    observers: Vec<(IntersectionObserver, ObserverClosure)>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("events", &self.events.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Listeners {
    /// Subscribe `handler` to `event` on `target`.
    pub fn listen<F>(&mut self, target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.events.push(closure);
        Ok(())
    }

    /// Like [`Listeners::listen`], but marks the listener passive so the
    /// browser never waits on it before scrolling.
    pub fn listen_passive<F>(&mut self, target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.events.push(closure);
        Ok(())
    }

    /// Observe `targets` for viewport intersection.
    ///
    /// `on_entry` receives the index of the target in `targets`, whether it
    /// is intersecting, and the observer (for unobserving).
    pub fn observe<F>(
        &mut self,
        targets: &[Element],
        root_margin: &str,
        thresholds: &[f64],
        mut on_entry: F,
    ) -> Result<(), DomError>
    where
        F: FnMut(usize, bool, &IntersectionObserver) + 'static,
    {
        if targets.is_empty() {
            return Ok(());
        }
        let lookup = targets.to_vec();
        let closure = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if let Some(index) = lookup.iter().position(|el| *el == target) {
                    on_entry(index, entry.is_intersecting(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        if !thresholds.is_empty() {
            let list = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect::<Array>();
            init.set_threshold(&list);
        }
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }
        self.observers.push((observer, closure));
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len() + self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run `callback` on the next animation frame.
pub fn request_frame<F>(window: &Window, callback: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(move |_ts: f64| callback());
    window.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

/// Run `callback` after `millis` without keeping a handle.
pub fn after<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, callback).forget();
}

/// A restartable timer slot; arming it again cancels the previous timeout.
#[derive(Clone, Default)]
pub struct TimerSlot {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl TimerSlot {
    pub fn arm<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(millis, callback);
        // Replacing drops (and so cancels) the previous timeout.
        self.pending.borrow_mut().replace(timeout);
    }
}
