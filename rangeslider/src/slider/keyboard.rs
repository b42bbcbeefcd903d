//! Key bindings for a focused slider.

use crate::event::Key;
use crate::range::Range;

/// Value change requested by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Decrement,
    Increment,
    ToMin,
    ToMax,
}

impl KeyAction {
    /// Map a key to its action. Keys without a binding map to `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left | Key::Down => Some(KeyAction::Decrement),
            Key::Right | Key::Up => Some(KeyAction::Increment),
            Key::Home => Some(KeyAction::ToMin),
            Key::End => Some(KeyAction::ToMax),
            _ => None,
        }
    }

    /// Snapped value after applying this action to `current`.
    pub fn apply(self, current: f64, range: &Range) -> f64 {
        let candidate = match self {
            KeyAction::Decrement => current - range.step(),
            KeyAction::Increment => current + range.step(),
            KeyAction::ToMin => range.min(),
            KeyAction::ToMax => range.max(),
        };
        range.snap(candidate)
    }
}
