//! Keyboard event types consumed by the widgets.

use serde::{Deserialize, Serialize};

/// Key identifiers relevant to widget focus handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Space,
    Left,
    Right,
    Up,
    Down,
    /// Function key (F1 = 1).
    F(u8),
    Char(char),
}

/// Keyboard event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}
