//! The narrow contract between the layout engine and an immediate-mode GUI
//! host.

use sash_core::event::{CursorIcon, PointerButtons, PointerSample};
use sash_core::geometry::{Rect, Vec2};

/// What the layout engine needs from a GUI host each frame.
///
/// Input queries are expected to be debounced per frame by the host: calling
/// them several times within one frame returns the same answer.
pub trait LayoutHost {
    /// Top-left corner of the drawable area.
    fn viewport_origin(&self) -> Vec2;

    /// Size of the drawable area.
    fn viewport_size(&self) -> Vec2;

    /// Current pointer position.
    fn pointer_position(&self) -> Vec2;

    /// Whether the primary button went down during this frame.
    fn is_primary_pressed(&self) -> bool;

    /// Whether the primary button is currently held.
    fn is_primary_down(&self) -> bool;

    /// Request a cursor shape for this frame.
    fn set_cursor_icon(&mut self, icon: CursorIcon);

    /// Position the next window the host opens.
    ///
    /// Called immediately before a leaf's renderer runs.
    fn set_next_window_placement(&mut self, pos: Vec2, size: Vec2);

    /// The pointer state for this frame as a single value.
    fn pointer_sample(&self) -> PointerSample {
        let mut pressed = PointerButtons::NONE;
        let mut down = PointerButtons::NONE;
        if self.is_primary_pressed() {
            pressed |= PointerButtons::PRIMARY;
        }
        if self.is_primary_down() {
            down |= PointerButtons::PRIMARY;
        }
        PointerSample {
            position: self.pointer_position(),
            pressed,
            down,
        }
    }
}

/// Draws one window's contents once its placement has been pushed to the
/// host.
///
/// Invoked zero or more times per frame. Any state a renderer needs between
/// frames is its own.
pub trait WindowRenderer<H> {
    fn render(&mut self, host: &mut H, placement: Rect);
}

impl<H, F> WindowRenderer<H> for F
where
    F: FnMut(&mut H, Rect),
{
    fn render(&mut self, host: &mut H, placement: Rect) {
        self(host, placement)
    }
}

/// Owned, type-erased window renderer stored on leaf nodes.
pub type BoxedRenderer<H> = Box<dyn WindowRenderer<H>>;
