//! Page configuration: timings, thresholds, and the markup contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every number and selector the interaction layer uses has a default here.
//! A page may override any of them with a JSON blob in
//! `<script type="application/json" id="landing-config">`; fields it omits
//! keep their defaults. Unknown fields are rejected so typos surface in the
//! console instead of silently doing nothing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use motion::consts::{
    ANCHOR_GAP_PX, CAROUSEL_SETTLE_MS, LAZY_ROOT_MARGIN, MOBILE_BREAKPOINT_PX, NAVBAR_SCROLLED_OFFSET_PX,
    RESIZE_DEBOUNCE_MS, REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLDS, RIPPLE_LIFETIME_MS,
    WORKFLOW_REAPPLY_MS,
};
use motion::reveal::ObserverOptions;
use motion::theme::THEME_STORAGE_KEY;

/// Id of the optional configuration element.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Full configuration for one page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub storage_key: String,
    pub navbar_scrolled_offset: f64,
    pub carousel_settle_ms: u32,
    pub ripple_lifetime_ms: u32,
    pub reveal_root_margin: String,
    pub reveal_thresholds: Vec<f64>,
    pub reveal_stagger_ms: u32,
    pub workflow_reapply_ms: u32,
    pub lazy_root_margin: String,
    pub resize_debounce_ms: u32,
    pub mobile_breakpoint: f64,
    pub anchor_gap: f64,
    pub preload_images: Vec<String>,
    pub selectors: Selectors,
    pub carousels: Vec<CarouselMarkup>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            navbar_scrolled_offset: NAVBAR_SCROLLED_OFFSET_PX,
            carousel_settle_ms: CAROUSEL_SETTLE_MS,
            ripple_lifetime_ms: RIPPLE_LIFETIME_MS,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            reveal_thresholds: REVEAL_THRESHOLDS.to_vec(),
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            workflow_reapply_ms: WORKFLOW_REAPPLY_MS,
            lazy_root_margin: LAZY_ROOT_MARGIN.to_owned(),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            anchor_gap: ANCHOR_GAP_PX,
            preload_images: vec!["main-app-interface.png".to_owned(), "quick-launcher-menu.png".to_owned()],
            selectors: Selectors::default(),
            carousels: vec![CarouselMarkup::horizontal(), CarouselMarkup::combined()],
        }
    }
}

impl PageConfig {
    /// Parse a JSON override blob on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON, wrong field types,
    /// or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`PageConfig::from_json`], but logs and falls back to defaults.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            Self::default()
        })
    }

    /// Observer options for the reveal animator.
    #[must_use]
    pub fn reveal_options(&self) -> ObserverOptions {
        ObserverOptions { root_margin: self.reveal_root_margin.clone(), thresholds: self.reveal_thresholds.clone() }
    }
}

/// CSS selectors and class names the page markup provides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub navbar: String,
    pub anchors: String,
    pub theme_toggles: String,
    pub theme_mode_attribute: String,
    pub reveal_targets: String,
    pub reveal_children: String,
    pub workflow_step_class: String,
    pub step_icon: String,
    pub lazy_images: String,
    pub lazy_source_attribute: String,
    pub ripple_controls: String,
    pub demo_steps: String,
    pub demo_keys: String,
    pub feature_cards: String,
    pub focusable: String,
    pub modals: String,
    pub mobile_reset_images: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            theme_toggles: ".theme-option".to_owned(),
            theme_mode_attribute: "data-theme".to_owned(),
            reveal_targets: ".feature-card, .workflow-step, .hero-content, .download-content".to_owned(),
            reveal_children: ".feature-title, .feature-description, .step-title, .step-description".to_owned(),
            workflow_step_class: "workflow-step".to_owned(),
            step_icon: ".step-icon".to_owned(),
            lazy_images: "img[data-src]".to_owned(),
            lazy_source_attribute: "data-src".to_owned(),
            ripple_controls: ".hero-button, .download-button, .nav-cta".to_owned(),
            demo_steps: ".demo-step".to_owned(),
            demo_keys: ".demo-key".to_owned(),
            feature_cards: ".feature-card".to_owned(),
            focusable: "a, button, [tabindex]:not([tabindex=\"-1\"])".to_owned(),
            modals: ".modal-like".to_owned(),
            mobile_reset_images: ".hero-widget-image, .feature-image".to_owned(),
        }
    }
}

/// Markup for one carousel strip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselMarkup {
    pub name: String,
    pub container: String,
    pub items: String,
    pub indicators: String,
    #[serde(default)]
    pub indicator_row: Option<String>,
    #[serde(default)]
    pub overflow_aware: bool,
}

impl CarouselMarkup {
    /// The horizontal feature strip; hides its dots when nothing overflows.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            name: "horizontal".to_owned(),
            container: ".horizontal-carousel-container".to_owned(),
            items: ".horizontal-carousel-item".to_owned(),
            indicators: ".horizontal-dot".to_owned(),
            indicator_row: Some(".horizontal-carousel-dots".to_owned()),
            overflow_aware: true,
        }
    }

    /// The combined screenshot strip.
    #[must_use]
    pub fn combined() -> Self {
        Self {
            name: "combined".to_owned(),
            container: ".combined-carousel-container".to_owned(),
            items: ".combined-carousel-item".to_owned(),
            indicators: ".combined-dot".to_owned(),
            indicator_row: None,
            overflow_aware: false,
        }
    }
}
