#![forbid(unsafe_code)]

//! A headless [`LayoutHost`] driven by pre-recorded pointer samples.
//!
//! The host behaves like an immediate-mode GUI: each frame starts with
//! [`ScriptedHost::begin_frame`], which resets the cursor and clears the
//! placements of the previous frame. A placement pushed by the layout stays
//! pending until a renderer opens a window with [`ScriptedHost::open_window`],
//! which names it.

use serde::{Deserialize, Serialize};

use sash_core::event::{CursorIcon, PointerSample};
use sash_core::geometry::{Rect, Vec2};
use sash_layout::{LayoutHost, WindowRenderer};

/// One window placement emitted during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Name given by the renderer, `None` if no window was opened.
    pub window: Option<String>,
    pub rect: Rect,
}

/// Headless host for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    viewport: Rect,
    sample: PointerSample,
    cursor: CursorIcon,
    placements: Vec<Placement>,
    frame: u64,
}

impl ScriptedHost {
    /// A host whose viewport starts at the origin.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Rect::from_size(width, height),
            ..Self::default()
        }
    }

    /// Change the drawable area. Takes effect on the next layout update.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Start a new frame with the given pointer state.
    pub fn begin_frame(&mut self, sample: PointerSample) {
        self.sample = sample;
        self.cursor = CursorIcon::Default;
        self.placements.clear();
        self.frame += 1;
    }

    /// Name the window for the most recent placement.
    pub fn open_window(&mut self, name: &str) {
        if let Some(last) = self.placements.last_mut() {
            last.window = Some(name.to_owned());
        }
    }

    /// Cursor requested during the current frame.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Placements emitted during the current frame, in traversal order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of the window called `name` in the current frame.
    #[must_use]
    pub fn placement_of(&self, name: &str) -> Option<Rect> {
        self.placements
            .iter()
            .find(|p| p.window.as_deref() == Some(name))
            .map(|p| p.rect)
    }

    /// Number of frames started so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

impl LayoutHost for ScriptedHost {
    fn viewport_origin(&self) -> Vec2 {
        self.viewport.pos
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport.size
    }

    fn pointer_position(&self) -> Vec2 {
        self.sample.position
    }

    fn is_primary_pressed(&self) -> bool {
        self.sample.primary_pressed()
    }

    fn is_primary_down(&self) -> bool {
        self.sample.primary_down()
    }

    fn set_cursor_icon(&mut self, icon: CursorIcon) {
        self.cursor = icon;
    }

    fn set_next_window_placement(&mut self, pos: Vec2, size: Vec2) {
        self.placements.push(Placement {
            window: None,
            rect: Rect::from_pos_size(pos, size),
        });
    }
}

/// Renderer that opens a window called `name` and does nothing else.
pub fn named_window(name: impl Into<String>) -> impl WindowRenderer<ScriptedHost> + 'static {
    let name = name.into();
    move |host: &mut ScriptedHost, _: Rect| host.open_window(&name)
}
