//! Landing page interaction layer.
//!
//! The state machines live in the `motion` crate; this crate binds them to
//! the browser. Configuration parsing and errors build everywhere so they
//! can be tested natively. The DOM bridge compiles with the `hydrate`
//! feature, which the wasm build enables.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Timings, thresholds, and selectors with JSON overrides |
//! | [`error`] | Errors raised while wiring behaviors |
//! | `dom` | web-sys query, class, style, and storage helpers |
//! | `events` | Listener ownership, frames, and timers |
//! | `behaviors` | One module per page behavior |
//! | `page` | Bootstrap and mount order |

pub mod config;
pub mod error;

#[cfg(feature = "hydrate")]
pub mod behaviors;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod events;
#[cfg(feature = "hydrate")]
pub mod page;

/// Wasm entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    if let Err(err) = page::boot() {
        log::error!("landing page failed to boot: {err}");
    }
}
