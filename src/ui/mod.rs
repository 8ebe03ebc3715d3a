/*!
 * UI Widgets
 * Button and checkbox state; only the signals matter to the simulation
 */

use crate::core::limits::{CHECKBOX_SIZE, SORT_BUTTON_SIZE};
use crate::core::types::Coord;
use crate::scene::{GameEvent, SceneObject, TickContext, View};

/// Manual sort trigger. `disabled` is advisory for the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortButton {
    pub view: View,
    pub visible: bool,
    pub disabled: bool,
}

impl SortButton {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: View::new(SORT_BUTTON_SIZE.0, SORT_BUTTON_SIZE.1),
            visible: false,
            disabled: false,
        }
    }

    /// Visible and enabled
    #[inline]
    #[must_use]
    pub const fn is_clickable(&self) -> bool {
        self.visible && !self.disabled
    }
}

impl Default for SortButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneObject for SortButton {
    fn update(&mut self, _ctx: &TickContext, _events: &[GameEvent]) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    label: String,
    pub view: View,
    pub visible: bool,
    checked: bool,
}

impl Checkbox {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            view: View::new(CHECKBOX_SIZE.0, CHECKBOX_SIZE.1),
            visible: false,
            checked: false,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.checked
    }

    /// Hidden checkboxes ignore input
    pub fn set_checked(&mut self, checked: bool) -> bool {
        if !self.visible {
            return false;
        }
        self.checked = checked;
        true
    }

    /// Slide toward `target_x`
    pub fn slide_to(&mut self, target_x: Coord) {
        self.view.target_x = Some(target_x);
    }
}

impl SceneObject for Checkbox {
    fn update(&mut self, _ctx: &TickContext, _events: &[GameEvent]) {}
}
