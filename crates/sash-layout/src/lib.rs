#![forbid(unsafe_code)]

//! Ratio-based binary splitter layout for immediate-mode GUI hosts.
//!
//! A [`LayoutTree`] recursively divides a viewport: every split node gives a
//! fixed fraction of its area to its first child, reserves a thin draggable
//! bar, and gives the rest to its second child. Odd levels split left/right,
//! even levels split top/bottom. Leaves are windows.
//!
//! A [`LayoutManager`] owns the tree and is called once per frame. It
//! re-lays-out the tree when the viewport changes, lets the user drag
//! splitters, and finally tells the host where to place each window before
//! running the window's renderer.
//!
//! ```
//! use sash_layout::{LayoutManager, presets};
//! # use sash_layout::{LayoutHost, CursorIcon, Rect, Vec2};
//! # struct Host;
//! # impl LayoutHost for Host {
//! #     fn viewport_origin(&self) -> Vec2 { Vec2::ZERO }
//! #     fn viewport_size(&self) -> Vec2 { Vec2::new(1280.0, 720.0) }
//! #     fn pointer_position(&self) -> Vec2 { Vec2::ZERO }
//! #     fn is_primary_pressed(&self) -> bool { false }
//! #     fn is_primary_down(&self) -> bool { false }
//! #     fn set_cursor_icon(&mut self, _: CursorIcon) {}
//! #     fn set_next_window_placement(&mut self, _: Vec2, _: Vec2) {}
//! # }
//! let tree = presets::two_pane(
//!     |_host: &mut Host, _at: Rect| { /* scene view */ },
//!     |_host: &mut Host, _at: Rect| { /* inspector */ },
//! )?;
//! let mut layout = LayoutManager::new(tree)?;
//! layout.update(&mut Host);
//! # Ok::<(), sash_layout::LayoutError>(())
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod manager;
pub mod node;
pub mod presets;
pub mod tree;

pub use config::LayoutConfig;
pub use error::{ChildSlot, LayoutError};
pub use host::{BoxedRenderer, LayoutHost, WindowRenderer};
pub use manager::{DragState, LayoutManager};
pub use node::{DEFAULT_SPLITTER_THICKNESS, LayoutNode, NodeId, NodeShape};
pub use sash_core::event::{CursorIcon, PointerButtons, PointerSample};
pub use sash_core::geometry::{Rect, SplitAxis, Vec2};
pub use tree::{ChildSpec, LayoutTree};
