#![forbid(unsafe_code)]

//! Core: geometry and pointer primitives for the sash layout engine.
//!
//! # Role in sash
//! `sash-core` is the vocabulary layer. It owns the float geometry used for
//! window placement and hit testing, and the per-frame pointer/cursor types a
//! GUI host exchanges with the layout engine.
//!
//! # How it fits in the system
//! `sash-layout` builds the splitter tree and interaction state machine on top
//! of these types. Hosts only need `sash-core` types to describe a frame.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{CursorIcon, PointerButtons, PointerSample};
pub use geometry::{Rect, SplitAxis, Vec2};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
