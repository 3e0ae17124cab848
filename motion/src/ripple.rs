//! Ripple overlay geometry for primary controls.
//!
//! The overlay is a circle whose diameter is the control's larger side,
//! centered on the click point, in the control's own coordinate space. The
//! host removes it after [`RIPPLE_LIFETIME_MS`] whether or not the CSS
//! animation finished.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

pub use crate::consts::RIPPLE_LIFETIME_MS;
use crate::geometry::Rect;

/// Placement of a ripple overlay relative to the control's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleSpec {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleSpec {
    /// Ripple for a click at client coordinates `(client_x, client_y)` on a
    /// control whose bounding rectangle is `control`.
    #[must_use]
    pub fn at(control: Rect, client_x: f64, client_y: f64) -> Self {
        let size = control.max_side();
        let half = size / 2.0;
        Self { size, left: client_x - control.left - half, top: client_y - control.top - half }
    }

    /// Inline style for the overlay element.
    #[must_use]
    pub fn style(&self, lifetime_ms: u32) -> String {
        format!(
            "position: absolute; border-radius: 50%; width: {size}px; height: {size}px; \
             left: {left}px; top: {top}px; background: rgba(255, 255, 255, 0.3); \
             transform: scale(0); animation: ripple {secs}s ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
            secs = f64::from(lifetime_ms) / 1000.0,
        )
    }
}
