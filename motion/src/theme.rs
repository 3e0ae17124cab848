//! Light/dark/system theme selection.
//!
//! The controller reads the persisted preference at startup, applies it as a
//! display attribute, and keeps every theme toggle's active state in sync.
//! In `system` mode no attribute is set and the page follows the OS
//! appearance; the resolved appearance is still published so the host can
//! expose it.
//!
//! TRADE-OFFS
//! ==========
//! The store is re-read on every OS appearance change instead of trusting
//! the in-memory mode, so another tab writing the preference is honored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

/// Default preference key.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Persists a single named string value across sessions.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`], used when no browser storage exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// User-selected theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parse a toggle's mode attribute. Unknown values yield `None`.
    #[must_use]
    pub fn from_attribute(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Interpret a stored preference. Absent or unknown values mean `System`.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_attribute).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Value for the `data-theme` attribute; `None` means remove it.
    #[must_use]
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
            Self::System => None,
        }
    }
}

/// What the page actually looks like once `System` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Display changes for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// Set (`Some`) or remove (`None`) the theme attribute and publish the
    /// resolved appearance.
    Apply { attribute: Option<&'static str>, appearance: Appearance },
    /// Set the active state of the toggle at `index`.
    SetToggleActive { index: usize, active: bool },
}

/// Theme state machine with an injected preference store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    toggles: Vec<Option<ThemeMode>>,
    active: ThemeMode,
    system_dark: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Build a controller.
    ///
    /// `toggles` holds each toggle control's mode in document order; `None`
    /// marks a control whose mode attribute is missing or unknown.
    /// `system_dark` is the OS appearance at startup.
    pub fn new(store: S, key: impl Into<String>, toggles: Vec<Option<ThemeMode>>, system_dark: bool) -> Self {
        Self { store, key: key.into(), toggles, active: ThemeMode::System, system_dark }
    }

    /// Read the persisted preference and apply it without writing back.
    pub fn initialize(&mut self) -> Vec<ThemeAction> {
        let mode = self.stored_mode();
        log::debug!("theme: initial mode {}", mode.as_str());
        self.apply(mode)
    }

    /// Persist and apply an explicit user selection.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Vec<ThemeAction> {
        self.store.set(&self.key, mode.as_str());
        self.apply(mode)
    }

    /// Handle a click on the toggle at `index`. Inert toggles do nothing.
    pub fn on_toggle_click(&mut self, index: usize) -> Vec<ThemeAction> {
        match self.toggles.get(index).copied().flatten() {
            Some(mode) => self.set_theme(mode),
            None => Vec::new(),
        }
    }

    /// Handle an OS appearance change.
    ///
    /// Re-applies display state only while the persisted preference is
    /// `system` (or absent). Never writes the store.
    pub fn on_system_appearance_change(&mut self, prefers_dark: bool) -> Vec<ThemeAction> {
        self.system_dark = prefers_dark;
        if self.stored_mode() == ThemeMode::System {
            self.apply(ThemeMode::System)
        } else {
            Vec::new()
        }
    }

    /// The persisted preference, defaulting to `System`.
    #[must_use]
    pub fn stored_mode(&self) -> ThemeMode {
        ThemeMode::from_stored(self.store.get(&self.key).as_deref())
    }

    /// The mode currently applied to the page.
    #[must_use]
    pub fn active(&self) -> ThemeMode {
        self.active
    }

    /// The appearance the active mode resolves to.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        match self.active {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System if self.system_dark => Appearance::Dark,
            ThemeMode::System => Appearance::Light,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn apply(&mut self, mode: ThemeMode) -> Vec<ThemeAction> {
        self.active = mode;
        let mut actions = Vec::with_capacity(self.toggles.len() + 1);
        actions.push(ThemeAction::Apply { attribute: mode.attribute(), appearance: self.appearance() });
        actions.extend(
            self.toggles
                .iter()
                .enumerate()
                .map(|(index, toggle)| ThemeAction::SetToggleActive { index, active: *toggle == Some(mode) }),
        );
        actions
    }
}
