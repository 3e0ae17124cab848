//! Ambient user preferences and small page-wide adjustments.
//!
//! Covers the reduced-motion and high-contrast media preferences, the
//! feature-card labels, the staggered shortcut-demo pulse, and the
//! narrow-viewport check that runs after resizing settles.

#[cfg(test)]
#[path = "ambient_test.rs"]
mod ambient_test;

use crate::consts::{DEMO_PULSE_BASE_MS, DEMO_PULSE_STEP_MS};

/// Custom property shortened under reduced motion.
pub const ANIMATION_DURATION_PROPERTY: &str = "--animation-duration";

/// Value of [`ANIMATION_DURATION_PROPERTY`] under reduced motion.
pub const REDUCED_ANIMATION_DURATION: &str = "0.01s";

/// Body class applied under a high-contrast preference.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

/// Snapshot of the media preferences read at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientPreferences {
    pub prefers_dark: bool,
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbientAction {
    /// Set a custom property on the root element.
    SetRootProperty { name: &'static str, value: &'static str },
    /// Add a class to the body.
    AddBodyClass(&'static str),
}

impl AmbientPreferences {
    /// Page adjustments implied by these preferences.
    #[must_use]
    pub fn actions(&self) -> Vec<AmbientAction> {
        let mut actions = Vec::new();
        if self.reduced_motion {
            actions.push(AmbientAction::SetRootProperty {
                name: ANIMATION_DURATION_PROPERTY,
                value: REDUCED_ANIMATION_DURATION,
            });
        }
        if self.high_contrast {
            actions.push(AmbientAction::AddBodyClass(HIGH_CONTRAST_CLASS));
        }
        actions
    }
}

/// Accessible label for the feature card at zero-based `index`.
#[must_use]
pub fn feature_label(index: usize) -> String {
    format!("Feature {}", index + 1)
}

/// Delay before the keys of demo step `step` start pulsing.
#[must_use]
pub fn pulse_delay_ms(step: usize) -> u32 {
    let step = u32::try_from(step).unwrap_or(u32::MAX);
    DEMO_PULSE_BASE_MS.saturating_add(step.saturating_mul(DEMO_PULSE_STEP_MS))
}

/// Whether a settled viewport width counts as mobile.
#[must_use]
pub fn is_narrow(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width < breakpoint
}
