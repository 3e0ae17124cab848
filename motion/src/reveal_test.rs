#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_options_shrink_viewport_and_graduate_thresholds() {
    let revealer = Revealer::default();
    assert_eq!(revealer.options().root_margin, "-10% 0px -10% 0px");
    assert_eq!(revealer.options().thresholds, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn registered_target_starts_unseen() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::Plain, 2);
    let target = revealer.target(id).cloned();
    assert!(target.is_some_and(|t| !t.animated && !t.visible));
    assert_eq!(revealer.len(), 1);
}

#[test]
fn first_intersection_reveals_target_and_staggers_children() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::Plain, 3);
    let actions = revealer.on_visibility(id, true);
    assert_eq!(
        actions,
        vec![
            RevealAction::MarkVisible { target: id },
            RevealAction::RevealChild { target: id, child: 0, delay_ms: 0 },
            RevealAction::RevealChild { target: id, child: 1, delay_ms: 100 },
            RevealAction::RevealChild { target: id, child: 2, delay_ms: 200 },
        ]
    );
    let target = revealer.target(id).cloned();
    assert!(target.is_some_and(|t| t.animated && t.visible));
}

#[test]
fn second_qualifying_event_is_noop() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::Plain, 1);
    assert!(!revealer.on_visibility(id, true).is_empty());
    assert!(revealer.on_visibility(id, true).is_empty());
}

#[test]
fn non_intersecting_event_does_not_reveal() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::Plain, 0);
    assert!(revealer.on_visibility(id, false).is_empty());
    let target = revealer.target(id).cloned();
    assert!(target.is_some_and(|t| !t.animated));
}

#[test]
fn leaving_viewport_never_unreveals() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::Plain, 0);
    revealer.on_visibility(id, true);
    revealer.on_visibility(id, false);
    let target = revealer.target(id).cloned();
    assert!(target.is_some_and(|t| t.visible));
}

#[test]
fn workflow_step_with_icon_schedules_reapply() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::WorkflowStep { has_icon: true }, 2);
    let actions = revealer.on_visibility(id, true);
    assert_eq!(actions.last(), Some(&RevealAction::ScheduleReapply { target: id, after_ms: 200 }));
    assert_eq!(revealer.reapply(id), vec![RevealAction::MarkVisible { target: id }]);
}

#[test]
fn workflow_step_without_icon_does_not_reapply() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::WorkflowStep { has_icon: false }, 2);
    let actions = revealer.on_visibility(id, true);
    assert!(!actions.iter().any(|a| matches!(a, RevealAction::ScheduleReapply { .. })));
}

#[test]
fn reapply_before_reveal_is_noop() {
    let mut revealer = Revealer::default();
    let id = revealer.register(RevealKind::WorkflowStep { has_icon: true }, 0);
    assert!(revealer.reapply(id).is_empty());
}

#[test]
fn custom_stagger_is_used() {
    let mut revealer = Revealer::new(ObserverOptions::default(), 250, 200);
    let id = revealer.register(RevealKind::Plain, 2);
    let actions = revealer.on_visibility(id, true);
    assert_eq!(actions[2], RevealAction::RevealChild { target: id, child: 1, delay_ms: 250 });
}

#[test]
fn targets_are_independent() {
    let mut revealer = Revealer::default();
    let a = revealer.register(RevealKind::Plain, 0);
    let b = revealer.register(RevealKind::Plain, 0);
    revealer.on_visibility(a, true);
    assert_eq!(revealer.on_visibility(b, true), vec![RevealAction::MarkVisible { target: b }]);
}
