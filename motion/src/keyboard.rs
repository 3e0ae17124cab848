//! Keyboard navigation helpers.
//!
//! `Tab` switches the page into keyboard mode (focus rings on), any mouse
//! press switches it off. While in keyboard mode the left/right arrows step
//! focus through the focusable elements in document order. `Escape` always
//! closes modal-like elements.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Direction of an arrow-key focus step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter or leave keyboard mode.
    SetKeyboardMode(bool),
    /// Step focus; resolve with [`step_focus`] against the live focus list.
    StepFocus(FocusStep),
    /// Deactivate every modal-like element.
    CloseModals,
}

#[derive(Debug, Default)]
pub struct KeyboardNav {
    using_keyboard: bool,
}

impl KeyboardNav {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keydown carrying the DOM `key` value.
    pub fn on_key_down(&mut self, key: &str) -> Vec<KeyAction> {
        match key {
            "Tab" => {
                self.using_keyboard = true;
                vec![KeyAction::SetKeyboardMode(true)]
            }
            "Escape" => vec![KeyAction::CloseModals],
            "ArrowRight" if self.using_keyboard => vec![KeyAction::StepFocus(FocusStep::Next)],
            "ArrowLeft" if self.using_keyboard => vec![KeyAction::StepFocus(FocusStep::Previous)],
            _ => Vec::new(),
        }
    }

    /// Handle a mouse press anywhere on the page.
    pub fn on_mouse_down(&mut self) -> Vec<KeyAction> {
        self.using_keyboard = false;
        vec![KeyAction::SetKeyboardMode(false)]
    }

    #[must_use]
    pub fn using_keyboard(&self) -> bool {
        self.using_keyboard
    }
}

/// Index to focus after a step, or `None` to leave focus alone.
///
/// `current` is the position of the focused element in the focusable list,
/// `None` when focus is outside it. Stepping forward from outside focuses the
/// first element; stepping back from outside does nothing. No wrap-around.
#[must_use]
pub fn step_focus(step: FocusStep, current: Option<usize>, len: usize) -> Option<usize> {
    match (step, current) {
        (FocusStep::Next, None) => (len > 0).then_some(0),
        (FocusStep::Next, Some(index)) => (index + 1 < len).then_some(index + 1),
        (FocusStep::Previous, Some(index)) => index.checked_sub(1).filter(|prev| *prev < len),
        (FocusStep::Previous, None) => None,
    }
}
