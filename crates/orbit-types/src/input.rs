//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. Widgets never see
//! raw platform input.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// One detent of the rotary encoder.
    Rotary(Rotation),
    /// A face / d-pad button pressed.
    ButtonPress(Button),
    /// A face / d-pad button released.
    ButtonRelease(Button),
    /// Pointer click at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// The UI gained focus.
    FocusGained,
    /// The UI lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Direction of a rotary encoder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Left,
    Right,
}

/// Buttons that map across all platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

impl FromStr for InputEvent {
    type Err = OrbitError;

    /// Parse a script token such as `right` or `confirm`.
    ///
    /// `left`/`right` are rotary steps; d-pad directions use their own names
    /// (`up`, `down`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let event = match token.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Self::Rotary(Rotation::Left),
            "right" | "r" => Self::Rotary(Rotation::Right),
            "up" => Self::ButtonPress(Button::Up),
            "down" => Self::ButtonPress(Button::Down),
            "confirm" | "enter" => Self::ButtonPress(Button::Confirm),
            "cancel" | "back" => Self::ButtonPress(Button::Cancel),
            "quit" => Self::Quit,
            other => return Err(OrbitError::Input(format!("unknown token `{other}`"))),
        };
        Ok(event)
    }
}
