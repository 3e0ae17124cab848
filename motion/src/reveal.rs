//! Reveal-on-scroll bookkeeping.
//!
//! Each registered target moves from unseen to revealed exactly once, on the
//! first visibility callback that reports it intersecting. Child slots are
//! revealed with a per-index transition delay. Workflow steps that carry an
//! icon get their visible state applied a second time after a short delay so
//! the icon's own transition picks it up.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLDS, WORKFLOW_REAPPLY_MS};

/// Options for the visibility observer backing the revealer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: String,
    pub thresholds: Vec<f64>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { root_margin: REVEAL_ROOT_MARGIN.to_owned(), thresholds: REVEAL_THRESHOLDS.to_vec() }
    }
}

/// Handle to a registered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

impl TargetId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What kind of element a target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Plain,
    WorkflowStep { has_icon: bool },
}

#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub kind: RevealKind,
    pub child_count: usize,
    pub animated: bool,
    pub visible: bool,
}

/// Presentation changes for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the target visible (and animated).
    MarkVisible { target: TargetId },
    /// Give child slot `child` a transition delay and mark it visible.
    RevealChild { target: TargetId, child: usize, delay_ms: u32 },
    /// Call [`Revealer::reapply`] for the target after `after_ms`.
    ScheduleReapply { target: TargetId, after_ms: u32 },
}

#[derive(Debug)]
pub struct Revealer {
    targets: Vec<RevealTarget>,
    options: ObserverOptions,
    stagger_ms: u32,
    reapply_ms: u32,
}

impl Default for Revealer {
    fn default() -> Self {
        Self::new(ObserverOptions::default(), REVEAL_STAGGER_MS, WORKFLOW_REAPPLY_MS)
    }
}

impl Revealer {
    #[must_use]
    pub fn new(options: ObserverOptions, stagger_ms: u32, reapply_ms: u32) -> Self {
        Self { targets: Vec::new(), options, stagger_ms, reapply_ms }
    }

    #[must_use]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start tracking a target. It begins unseen.
    pub fn register(&mut self, kind: RevealKind, child_count: usize) -> TargetId {
        self.targets.push(RevealTarget { kind, child_count, animated: false, visible: false });
        TargetId(self.targets.len() - 1)
    }

    /// Handle a visibility callback for `id`.
    pub fn on_visibility(&mut self, id: TargetId, intersecting: bool) -> Vec<RevealAction> {
        if !intersecting {
            return Vec::new();
        }
        let stagger_ms = self.stagger_ms;
        let reapply_ms = self.reapply_ms;
        let Some(target) = self.targets.get_mut(id.0) else {
            return Vec::new();
        };
        if target.animated {
            return Vec::new();
        }
        target.animated = true;
        target.visible = true;

        let mut actions = vec![RevealAction::MarkVisible { target: id }];
        let mut delay_ms = 0_u32;
        for child in 0..target.child_count {
            actions.push(RevealAction::RevealChild { target: id, child, delay_ms });
            delay_ms = delay_ms.saturating_add(stagger_ms);
        }
        if target.kind == (RevealKind::WorkflowStep { has_icon: true }) {
            actions.push(RevealAction::ScheduleReapply { target: id, after_ms: reapply_ms });
        }
        actions
    }

    /// Second application of the visible state. Only revealed targets respond.
    #[must_use]
    pub fn reapply(&self, id: TargetId) -> Vec<RevealAction> {
        match self.targets.get(id.0) {
            Some(target) if target.visible => vec![RevealAction::MarkVisible { target: id }],
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn target(&self, id: TargetId) -> Option<&RevealTarget> {
        self.targets.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
