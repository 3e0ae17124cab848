use super::*;

fn toggles() -> Vec<Option<ThemeMode>> {
    vec![Some(ThemeMode::Light), Some(ThemeMode::Dark), Some(ThemeMode::System)]
}

fn controller(store: MemoryStore, system_dark: bool) -> ThemeController<MemoryStore> {
    ThemeController::new(store, THEME_STORAGE_KEY, toggles(), system_dark)
}

fn active_toggles(actions: &[ThemeAction]) -> Vec<usize> {
    actions
        .iter()
        .filter_map(|action| match action {
            ThemeAction::SetToggleActive { index, active: true } => Some(*index),
            _ => None,
        })
        .collect()
}

fn applied(actions: &[ThemeAction]) -> Option<(Option<&'static str>, Appearance)> {
    actions.iter().find_map(|action| match action {
        ThemeAction::Apply { attribute, appearance } => Some((*attribute, *appearance)),
        ThemeAction::SetToggleActive { .. } => None,
    })
}

// =============================================================
// ThemeMode parsing
// =============================================================

#[test]
fn from_attribute_accepts_known_modes() {
    assert_eq!(ThemeMode::from_attribute("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::from_attribute("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::from_attribute("system"), Some(ThemeMode::System));
}

#[test]
fn from_attribute_rejects_unknown() {
    assert_eq!(ThemeMode::from_attribute("Dark"), None);
    assert_eq!(ThemeMode::from_attribute(""), None);
}

#[test]
fn from_stored_defaults_to_system() {
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::System);
    assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::System);
    assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
}

#[test]
fn system_mode_has_no_attribute() {
    assert_eq!(ThemeMode::System.attribute(), None);
    assert_eq!(ThemeMode::Light.attribute(), Some("light"));
}

// =============================================================
// Controller
// =============================================================

#[test]
fn initialize_without_preference_applies_system() {
    let mut theme = controller(MemoryStore::new(), false);
    let actions = theme.initialize();
    assert_eq!(theme.active(), ThemeMode::System);
    assert_eq!(applied(&actions), Some((None, Appearance::Light)));
    assert_eq!(active_toggles(&actions), vec![2]);
}

#[test]
fn initialize_does_not_write_store() {
    let mut theme = controller(MemoryStore::new(), false);
    theme.initialize();
    assert_eq!(theme.store().get(THEME_STORAGE_KEY), None);
}

#[test]
fn initialize_with_garbage_preference_falls_back_to_system() {
    let mut store = MemoryStore::new();
    store.set(THEME_STORAGE_KEY, "neon");
    let mut theme = controller(store, true);
    let actions = theme.initialize();
    assert_eq!(theme.active(), ThemeMode::System);
    assert_eq!(applied(&actions), Some((None, Appearance::Dark)));
}

#[test]
fn set_theme_persists_and_syncs_toggles() {
    let mut theme = controller(MemoryStore::new(), false);
    theme.initialize();
    let actions = theme.set_theme(ThemeMode::Dark);
    assert_eq!(theme.store().get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(applied(&actions), Some((Some("dark"), Appearance::Dark)));
    assert_eq!(active_toggles(&actions), vec![1]);
    assert_eq!(actions.len(), 4);
}

#[test]
fn dark_preference_survives_reload() {
    let mut theme = controller(MemoryStore::new(), false);
    theme.set_theme(ThemeMode::Dark);
    let store = theme.into_store();

    let mut reloaded = controller(store, false);
    reloaded.initialize();
    assert_eq!(reloaded.active(), ThemeMode::Dark);
}

#[test]
fn toggle_click_selects_its_mode() {
    let mut theme = controller(MemoryStore::new(), false);
    let actions = theme.on_toggle_click(0);
    assert_eq!(theme.active(), ThemeMode::Light);
    assert_eq!(active_toggles(&actions), vec![0]);
}

#[test]
fn inert_or_missing_toggle_is_ignored() {
    let mut theme = ThemeController::new(MemoryStore::new(), THEME_STORAGE_KEY, vec![None], false);
    assert!(theme.on_toggle_click(0).is_empty());
    assert!(theme.on_toggle_click(7).is_empty());
    assert_eq!(theme.store().get(THEME_STORAGE_KEY), None);
}

#[test]
fn inert_toggle_is_never_active() {
    let mut theme =
        ThemeController::new(MemoryStore::new(), THEME_STORAGE_KEY, vec![None, Some(ThemeMode::System)], false);
    let actions = theme.initialize();
    assert_eq!(active_toggles(&actions), vec![1]);
}

#[test]
fn system_change_in_system_mode_updates_display_not_store() {
    let mut theme = controller(MemoryStore::new(), false);
    theme.set_theme(ThemeMode::System);
    let actions = theme.on_system_appearance_change(true);
    assert_eq!(applied(&actions), Some((None, Appearance::Dark)));
    assert_eq!(theme.appearance(), Appearance::Dark);
    assert_eq!(theme.store().get(THEME_STORAGE_KEY).as_deref(), Some("system"));
}

#[test]
fn system_change_with_absent_preference_reapplies() {
    let mut theme = controller(MemoryStore::new(), false);
    theme.initialize();
    let actions = theme.on_system_appearance_change(true);
    assert!(!actions.is_empty());
    assert_eq!(theme.store().get(THEME_STORAGE_KEY), None);
}

#[test]
fn system_change_in_explicit_mode_is_ignored() {
    let mut theme = controller(MemoryStore::new(), false);
    theme.set_theme(ThemeMode::Light);
    assert!(theme.on_system_appearance_change(true).is_empty());
    assert_eq!(theme.appearance(), Appearance::Light);
}

#[test]
fn explicit_mode_appearance_ignores_os() {
    let mut theme = controller(MemoryStore::new(), true);
    theme.set_theme(ThemeMode::Light);
    assert_eq!(theme.appearance(), Appearance::Light);
}
