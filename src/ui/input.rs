//! Input events consumed by a grid session
//!
//! Device-agnostic: the embedding layer translates its own pointer, wheel,
//! keyboard and drag-library callbacks into these.

use glam::Vec2;

use crate::core::types::{EntityId, EntityKind};

/// Keyboard commands the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Delete or Backspace
    Delete,
    /// Escape
    Cancel,
}

impl KeyCommand {
    /// Map a DOM-style key name to a command
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Delete" | "Backspace" => Some(KeyCommand::Delete),
            "Escape" => Some(KeyCommand::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Generate {
        grid_size: u32,
        blocked_count: u32,
        viewport_size: Vec2,
    },
    BeginPaletteDrag(EntityKind),
    EndPaletteDrag,
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    PointerLeave,
    Cancel,
    Select(EntityId),
    SelectNone,
    DeleteSelected,
    ClearPlaceable,
    /// Explicit zoom by `factor` around `anchor`
    Zoom { anchor: Vec2, factor: f32 },
    /// One wheel notch; positive `delta_y` zooms out
    Wheel { anchor: Vec2, delta_y: f32 },
    ResetView(Vec2),
    ResetZoom,
    Key(KeyCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCommand::from_key_name("Delete"), Some(KeyCommand::Delete));
        assert_eq!(KeyCommand::from_key_name("Backspace"), Some(KeyCommand::Delete));
        assert_eq!(KeyCommand::from_key_name("Escape"), Some(KeyCommand::Cancel));
        assert_eq!(KeyCommand::from_key_name("a"), None);
    }
}
