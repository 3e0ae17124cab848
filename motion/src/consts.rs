//! Shared timing and layout constants for the interaction layer.

// ── Navbar ──────────────────────────────────────────────────────

/// Scroll offset in CSS pixels past which the navbar is "scrolled".
pub const NAVBAR_SCROLLED_OFFSET_PX: f64 = 50.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Viewport margin for the reveal observer: shrinks top and bottom by 10%.
pub const REVEAL_ROOT_MARGIN: &str = "-10% 0px -10% 0px";

/// Graduated intersection thresholds for the reveal observer.
pub const REVEAL_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Transition delay added per child slot, in milliseconds.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Delay before a workflow step's visible state is applied a second time.
pub const WORKFLOW_REAPPLY_MS: u32 = 200;

// ── Carousel ────────────────────────────────────────────────────

/// Quiet period after the last scroll event before the index is inferred.
pub const CAROUSEL_SETTLE_MS: u32 = 100;

// ── Ripple ──────────────────────────────────────────────────────

/// Lifetime of a ripple overlay before it is removed.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// ── Anchors ─────────────────────────────────────────────────────

/// Extra space left above an anchor target, below the navbar.
pub const ANCHOR_GAP_PX: f64 = 20.0;

// ── Lazy images ─────────────────────────────────────────────────

/// Observer margin for deferred images; loads slightly before they show.
pub const LAZY_ROOT_MARGIN: &str = "50px";

// ── Resize ──────────────────────────────────────────────────────

/// Quiet period after the last resize event before layout fixes run.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Shortcut demo ───────────────────────────────────────────────

/// Delay before the first demo step starts pulsing.
pub const DEMO_PULSE_BASE_MS: u32 = 1000;

/// Additional pulse delay per demo step.
pub const DEMO_PULSE_STEP_MS: u32 = 500;
