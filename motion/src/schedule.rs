//! Coalescing primitives for frame- and timer-deferred work.
//!
//! The host owns the actual `requestAnimationFrame` handles and timers.
//! These types only decide whether a new one is needed and whether a
//! callback that fired is still the current one.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Ensures at most one animation-frame callback is pending per signal.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a frame as requested.
    ///
    /// Returns `true` when the caller must schedule a frame, `false` when
    /// one is already pending and will pick up the latest state.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clear the pending flag. Call at the start of the frame callback, or
    /// when scheduling the frame failed.
    pub fn release(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Identifies one arming of a [`Debounce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleToken(u64);

/// Restart-on-signal debounce bookkeeping.
///
/// Every [`Debounce::restart`] supersedes the previous token, so a timer
/// that was not cancelled in time fires into a no-op.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: u64,
    armed: Option<u64>,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the debounce and return the token the timer must carry.
    pub fn restart(&mut self) -> SettleToken {
        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(self.generation);
        SettleToken(self.generation)
    }

    /// Consume the token if it is the live one.
    ///
    /// Returns `true` exactly once per arming, and only for the latest token.
    pub fn fire(&mut self, token: SettleToken) -> bool {
        if self.armed == Some(token.0) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
