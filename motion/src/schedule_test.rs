use super::*;

// =============================================================
// FrameGate
// =============================================================

#[test]
fn frame_gate_first_request_schedules() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    assert!(gate.is_pending());
}

#[test]
fn frame_gate_collapses_requests_until_released() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    gate.release();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

#[test]
fn frame_gate_release_without_request_is_harmless() {
    let mut gate = FrameGate::new();
    gate.release();
    assert!(gate.request());
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn debounce_fires_latest_token_once() {
    let mut debounce = Debounce::new();
    let token = debounce.restart();
    assert!(debounce.is_armed());
    assert!(debounce.fire(token));
    assert!(!debounce.fire(token));
    assert!(!debounce.is_armed());
}

#[test]
fn debounce_restart_supersedes_previous_token() {
    let mut debounce = Debounce::new();
    let stale = debounce.restart();
    let live = debounce.restart();
    assert_ne!(stale, live);
    assert!(!debounce.fire(stale));
    assert!(debounce.fire(live));
}

#[test]
fn debounce_unarmed_ignores_everything() {
    let mut debounce = Debounce::new();
    let token = debounce.restart();
    assert!(debounce.fire(token));
    let again = debounce.restart();
    assert!(debounce.fire(again));
    assert!(!debounce.fire(token));
}
