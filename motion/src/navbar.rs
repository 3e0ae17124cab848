//! Sticky navbar "scrolled" flag, coalesced to one update per frame.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::consts::NAVBAR_SCROLLED_OFFSET_PX;
use crate::schedule::FrameGate;

#[derive(Debug)]
pub struct NavbarState {
    threshold: f64,
    scrolled: bool,
    gate: FrameGate,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(NAVBAR_SCROLLED_OFFSET_PX)
    }
}

impl NavbarState {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, scrolled: false, gate: FrameGate::new() }
    }

    /// Handle a scroll signal. Returns `true` when the host must request a frame.
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Run the frame update with the offset read *now*, not at signal time.
    /// Returns the new flag.
    pub fn on_frame(&mut self, offset: f64) -> bool {
        self.gate.release();
        self.scrolled = offset > self.threshold;
        self.scrolled
    }

    /// The host could not schedule a frame; allow the next signal to retry.
    pub fn frame_failed(&mut self) {
        self.gate.release();
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.gate.is_pending()
    }
}
