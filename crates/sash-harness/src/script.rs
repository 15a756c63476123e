#![forbid(unsafe_code)]

//! Frame scripts: recorded pointer input replayed against a layout.
//!
//! A script is a JSON document with an optional starting viewport and a list
//! of frames. Each frame carries the pointer position and primary button
//! state, and may change the viewport:
//!
//! ```json
//! {
//!   "viewport": { "width": 1000, "height": 500 },
//!   "frames": [
//!     { "pointer": [801, 10] },
//!     { "pointer": [801, 10], "pressed": true, "down": true },
//!     { "pointer": [600, 10], "down": true },
//!     { "pointer": [600, 10], "viewport": { "width": 800, "height": 500 } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sash_core::event::{CursorIcon, PointerButtons, PointerSample};
use sash_core::geometry::{Rect, Vec2};
use sash_layout::{DragState, LayoutManager};

use crate::error::{HarnessError, Result};
use crate::scripted_host::{Placement, ScriptedHost};

/// Viewport size in a script. The origin is always `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    fn rect(self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Pointer input for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    pub pointer: (f32, f32),
    #[serde(default)]
    pub pressed: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportSize>,
}

impl ScriptFrame {
    /// The pointer sample this frame feeds to the host. A press always
    /// counts as held.
    #[must_use]
    pub fn sample(&self) -> PointerSample {
        let primary = |on: bool| {
            if on {
                PointerButtons::PRIMARY
            } else {
                PointerButtons::NONE
            }
        };
        PointerSample {
            position: Vec2::from(self.pointer),
            pressed: primary(self.pressed),
            down: primary(self.down || self.pressed),
        }
    }
}

/// A complete replay script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameScript {
    #[serde(default)]
    pub viewport: ViewportSize,
    pub frames: Vec<ScriptFrame>,
}

impl FrameScript {
    /// Parse a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Observable output of one replayed frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub cursor: CursorIcon,
    /// Index of the split being dragged, if any.
    pub dragging: Option<usize>,
    pub placements: Vec<Placement>,
}

/// Replay `script` against `manager`, returning one record per frame.
pub fn run_script(
    manager: &mut LayoutManager<ScriptedHost>,
    script: &FrameScript,
) -> Vec<FrameRecord> {
    let mut host = ScriptedHost::new(script.viewport.width, script.viewport.height);
    script
        .frames
        .iter()
        .map(|frame| {
            if let Some(viewport) = frame.viewport {
                host.set_viewport(viewport.rect());
            }
            host.begin_frame(frame.sample());
            manager.update(&mut host);
            record(&host, manager.drag_state())
        })
        .collect()
}

fn record(host: &ScriptedHost, drag: DragState) -> FrameRecord {
    let dragging = match drag {
        DragState::Idle => None,
        DragState::Dragging { held, .. } => Some(held.index()),
    };
    FrameRecord {
        frame: host.frame_count(),
        cursor: host.cursor(),
        dragging,
        placements: host.placements().to_vec(),
    }
}
