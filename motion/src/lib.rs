//! Interaction state machines for the landing page.
//!
//! This crate holds every piece of landing-page behavior that does not need a
//! browser: theme selection, reveal-on-scroll bookkeeping, navbar scroll
//! state, carousel index tracking, ripple geometry, keyboard focus stepping,
//! and lazy image swaps. Components are plain values constructed with their
//! collaborators injected, and they answer DOM signals with *actions* that
//! the host (the `landing` crate) applies to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark/system theme controller and the preference store seam |
//! | [`reveal`] | One-shot reveal animator driven by visibility events |
//! | [`navbar`] | Frame-coalesced "scrolled" navbar flag |
//! | [`carousel`] | Scroll-synced index tracker shared by every carousel strip |
//! | [`ripple`] | Ripple overlay geometry for primary controls |
//! | [`anchor`] | Fragment links and navbar-compensated scroll targets |
//! | [`keyboard`] | Keyboard mode and arrow-key focus stepping |
//! | [`lazy`] | Deferred image source swaps |
//! | [`ambient`] | Reduced-motion / high-contrast adjustments and labels |
//! | [`schedule`] | Frame gate and debounce tokens |
//! | [`geometry`] | Viewport rectangles |
//! | [`consts`] | Shared timing and layout constants |

pub mod ambient;
pub mod anchor;
pub mod carousel;
pub mod consts;
pub mod geometry;
pub mod keyboard;
pub mod lazy;
pub mod navbar;
pub mod reveal;
pub mod ripple;
pub mod schedule;
pub mod theme;
