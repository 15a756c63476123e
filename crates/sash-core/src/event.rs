#![forbid(unsafe_code)]

//! Pointer and cursor vocabulary shared by hosts and the layout engine.
//!
//! Hosts sample their input once per frame and describe it with a
//! [`PointerSample`]. The layout engine answers with a [`CursorIcon`].

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{SplitAxis, Vec2};

bitflags! {
    /// Set of pointer buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// No buttons.
        const NONE      = 0b000;
        /// Primary (usually left) button.
        const PRIMARY   = 0b001;
        /// Secondary (usually right) button.
        const SECONDARY = 0b010;
        /// Middle button (scroll wheel click).
        const MIDDLE    = 0b100;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(feature = "serde")]
impl Serialize for PointerButtons {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PointerButtons {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// One frame's worth of pointer state, as debounced by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerSample {
    /// Pointer position in host coordinates.
    pub position: Vec2,

    /// Buttons that went down during this frame.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pressed: PointerButtons,

    /// Buttons currently held.
    #[cfg_attr(feature = "serde", serde(default))]
    pub down: PointerButtons,
}

impl PointerSample {
    /// A hovering pointer with no buttons involved.
    #[must_use]
    pub const fn hover(position: Vec2) -> Self {
        Self {
            position,
            pressed: PointerButtons::NONE,
            down: PointerButtons::NONE,
        }
    }

    /// The primary button went down this frame (and is therefore held).
    #[must_use]
    pub const fn press(position: Vec2) -> Self {
        Self {
            position,
            pressed: PointerButtons::PRIMARY,
            down: PointerButtons::PRIMARY,
        }
    }

    /// The primary button is held from an earlier frame.
    #[must_use]
    pub const fn drag(position: Vec2) -> Self {
        Self {
            position,
            pressed: PointerButtons::NONE,
            down: PointerButtons::PRIMARY,
        }
    }

    /// Whether the primary button went down this frame.
    #[must_use]
    pub const fn primary_pressed(&self) -> bool {
        self.pressed.contains(PointerButtons::PRIMARY)
    }

    /// Whether the primary button is held.
    #[must_use]
    pub const fn primary_down(&self) -> bool {
        self.down.contains(PointerButtons::PRIMARY)
    }
}

/// Cursor shape requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CursorIcon {
    /// Regular arrow.
    #[default]
    Default,
    /// East-west resize arrows, shown over left/right splitters.
    ResizeHorizontal,
    /// North-south resize arrows, shown over top/bottom splitters.
    ResizeVertical,
}

impl CursorIcon {
    /// Resize icon matching a splitter that divides along `axis`.
    #[must_use]
    pub const fn for_split(axis: SplitAxis) -> Self {
        match axis {
            SplitAxis::Horizontal => Self::ResizeHorizontal,
            SplitAxis::Vertical => Self::ResizeVertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_implies_down() {
        let sample = PointerSample::press(Vec2::new(1.0, 2.0));
        assert!(sample.primary_pressed());
        assert!(sample.primary_down());

        let drag = PointerSample::drag(Vec2::ZERO);
        assert!(!drag.primary_pressed());
        assert!(drag.primary_down());

        let hover = PointerSample::hover(Vec2::ZERO);
        assert!(!hover.primary_pressed());
        assert!(!hover.primary_down());
    }

    #[test]
    fn secondary_button_is_not_primary() {
        let sample = PointerSample {
            position: Vec2::ZERO,
            pressed: PointerButtons::SECONDARY,
            down: PointerButtons::SECONDARY | PointerButtons::MIDDLE,
        };
        assert!(!sample.primary_pressed());
        assert!(!sample.primary_down());
    }

    #[test]
    fn cursor_matches_split_axis() {
        assert_eq!(
            CursorIcon::for_split(SplitAxis::Horizontal),
            CursorIcon::ResizeHorizontal
        );
        assert_eq!(
            CursorIcon::for_split(SplitAxis::Vertical),
            CursorIcon::ResizeVertical
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sample_defaults_buttons_when_absent() {
        let sample: PointerSample =
            serde_json::from_str(r#"{"position":{"x":4.0,"y":5.0}}"#).expect("parse");
        assert_eq!(sample, PointerSample::hover(Vec2::new(4.0, 5.0)));

        let pressed: PointerSample =
            serde_json::from_str(r#"{"position":{"x":0.0,"y":0.0},"pressed":1,"down":1}"#)
                .expect("parse");
        assert!(pressed.primary_pressed());
    }
}
