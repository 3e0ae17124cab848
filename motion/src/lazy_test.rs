use super::*;

#[test]
fn intersecting_image_loads_its_source() {
    let mut lazy = LazyImages::new();
    let hero = lazy.register("hero.png");
    assert_eq!(lazy.on_visibility(hero, true), Some(LazyAction::Load { image: hero, src: "hero.png".to_owned() }));
    assert_eq!(lazy.pending(), 0);
}

#[test]
fn image_loads_only_once() {
    let mut lazy = LazyImages::new();
    let hero = lazy.register("hero.png");
    assert!(lazy.on_visibility(hero, true).is_some());
    assert!(lazy.on_visibility(hero, true).is_none());
}

#[test]
fn non_intersecting_event_keeps_image_pending() {
    let mut lazy = LazyImages::new();
    let hero = lazy.register("hero.png");
    assert!(lazy.on_visibility(hero, false).is_none());
    assert_eq!(lazy.pending(), 1);
}

#[test]
fn unknown_image_is_ignored() {
    let mut lazy = LazyImages::new();
    let mut other = LazyImages::new();
    other.register("a.png");
    let foreign = other.register("b.png");
    assert!(lazy.on_visibility(foreign, true).is_none());
}

#[test]
fn images_load_independently() {
    let mut lazy = LazyImages::new();
    let a = lazy.register("a.png");
    let b = lazy.register("b.png");
    lazy.on_visibility(b, true);
    assert_eq!(lazy.pending(), 1);
    assert_eq!(lazy.on_visibility(a, true), Some(LazyAction::Load { image: a, src: "a.png".to_owned() }));
}
