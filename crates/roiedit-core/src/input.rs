//! Pointer and keyboard events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Buttons held down while an event was generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonState {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl ButtonState {
    /// No buttons pressed.
    pub const NONE: Self = Self {
        primary: false,
        secondary: false,
        middle: false,
    };

    /// Only the primary button pressed.
    pub const PRIMARY: Self = Self {
        primary: true,
        secondary: false,
        middle: false,
    };

    /// Check if a button is pressed.
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Primary => self.primary,
            MouseButton::Secondary => self.secondary,
            MouseButton::Middle => self.middle,
        }
    }

    /// Check if a secondary or middle button is pressed.
    ///
    /// Those drive camera navigation on the same surface, so tools ignore
    /// any movement made while they are held.
    pub fn any_non_primary(&self) -> bool {
        self.secondary || self.middle
    }

    /// Return a copy with a button set or cleared.
    pub fn with(mut self, button: MouseButton, pressed: bool) -> Self {
        match button {
            MouseButton::Primary => self.primary = pressed,
            MouseButton::Secondary => self.secondary = pressed,
            MouseButton::Middle => self.middle = pressed,
        }
        self
    }
}

/// A pointer event in overlay-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: Point,
    /// Button whose state changed (for moves, the primary button by convention).
    pub button: MouseButton,
    /// Buttons held after the change.
    pub buttons: ButtonState,
}

impl PointerEvent {
    /// Primary button pressed at a position.
    pub fn down(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Primary,
            buttons: ButtonState::PRIMARY,
        }
    }

    /// Pointer moved with the primary button held.
    pub fn drag(position: Point) -> Self {
        Self::down(position)
    }

    /// Pointer moved with no button held.
    pub fn hover(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Primary,
            buttons: ButtonState::NONE,
        }
    }

    /// Primary button released at a position.
    pub fn up(position: Point) -> Self {
        Self::hover(position)
    }

    /// Event for another button; `pressed` is that button's new state.
    pub fn with_button(position: Point, button: MouseButton, pressed: bool) -> Self {
        Self {
            position,
            button,
            buttons: ButtonState::NONE.with(button, pressed),
        }
    }

    pub fn is_primary(&self) -> bool {
        self.button == MouseButton::Primary
    }
}

/// Key identity for key-down events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Delete,
    /// Any other key; ignored by the canvas.
    Other(String),
}

impl Key {
    /// Map a host key name (e.g. "Escape", "Delete") to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Delete" | "Del" => Key::Delete,
            other => Key::Other(other.to_string()),
        }
    }
}
