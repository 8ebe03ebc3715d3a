/*!
 * Input Events
 * Discrete, already-decoded input delivered to the simulation each tick
 */

use serde::{Deserialize, Serialize};

/// Keyboard event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key label, e.g. `"3"` or `"[3]"` for the keypad
    pub key: String,
    /// Shift modifier held
    #[serde(default)]
    pub shift: bool,
}

/// Input event consumed by scene objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
}

impl GameEvent {
    #[must_use]
    pub fn key_up(key: impl Into<String>, shift: bool) -> Self {
        GameEvent::KeyUp(KeyEvent {
            key: key.into(),
            shift,
        })
    }

    #[must_use]
    pub fn key_down(key: impl Into<String>, shift: bool) -> Self {
        GameEvent::KeyDown(KeyEvent {
            key: key.into(),
            shift,
        })
    }
}
