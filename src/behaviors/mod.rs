//! Page behaviors: each wires one `motion` component to the live DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every behavior exposes `mount(ctx, listeners)`. Mounting reads the markup
//! the behavior needs, builds the `motion` state machine, applies its initial
//! actions, and registers listeners that feed DOM signals back into it.
//! Missing markup disables a behavior quietly; DOM exceptions are returned
//! so the page can log them and carry on with the others.

pub mod ambient;
pub mod anchors;
pub mod carousel;
pub mod keyboard;
pub mod layout;
pub mod lazy;
pub mod navbar;
pub mod reveal;
pub mod ripple;
pub mod theme;
