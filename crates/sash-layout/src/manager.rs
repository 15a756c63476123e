//! Per-frame driver: viewport tracking, splitter hover/drag and layout
//! emission.
//!
//! # State machine
//!
//! ```text
//!            press while hovering a splitter
//!   Idle ------------------------------------> Dragging
//!    ^                                            |
//!    +------------- primary released ------------+
//! ```
//!
//! Every frame runs the same four steps in order: viewport check, the
//! current state's step, then traversal of the whole tree. The viewport check
//! and traversal run in both states.

use sash_core::event::CursorIcon;
use sash_core::geometry::{Rect, Vec2};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::host::LayoutHost;
use crate::node::NodeId;
use crate::tree::LayoutTree;

/// Interaction state of the splitter drag machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Split node whose bar is held. Non-owning.
        held: NodeId,
        /// Splitter coordinate minus pointer coordinate at capture, along the
        /// held node's split axis.
        pointer_offset: f32,
    },
}

/// Owns a layout tree and keeps it in sync with the host, frame by frame.
pub struct LayoutManager<H> {
    tree: LayoutTree<H>,
    config: LayoutConfig,
    last_viewport: Option<Vec2>,
    drag: DragState,
}

impl<H: LayoutHost> LayoutManager<H> {
    /// Take ownership of a fully built tree, with default tuning.
    pub fn new(tree: LayoutTree<H>) -> Result<Self, LayoutError> {
        Self::with_config(tree, LayoutConfig::default())
    }

    /// Take ownership of a fully built tree.
    ///
    /// Fails if the tree has an incomplete split or the config is unusable.
    pub fn with_config(tree: LayoutTree<H>, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        tree.validate()?;
        Ok(Self {
            tree,
            config,
            last_viewport: None,
            drag: DragState::Idle,
        })
    }

    /// The managed tree.
    #[must_use]
    pub fn tree(&self) -> &LayoutTree<H> {
        &self.tree
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Current interaction state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Viewport size the tree was last laid out for.
    #[must_use]
    pub fn last_viewport(&self) -> Option<Vec2> {
        self.last_viewport
    }

    /// Drop any held splitter and return to Idle.
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging { held, .. } = self.drag {
            tracing::debug!(node = %held, "splitter drag canceled");
        }
        self.drag = DragState::Idle;
    }

    /// Swap in a new tree, returning the old one.
    ///
    /// Drag state resets to Idle and the next frame lays the new tree out
    /// for the current viewport.
    pub fn replace_tree(&mut self, tree: LayoutTree<H>) -> Result<LayoutTree<H>, LayoutError> {
        tree.validate()?;
        self.cancel_drag();
        self.last_viewport = None;
        Ok(std::mem::replace(&mut self.tree, tree))
    }

    /// Change a split ratio outside of dragging and re-lay-out its subtree.
    pub fn set_ratio(&mut self, node: NodeId, ratio: f32) -> Result<(), LayoutError> {
        self.tree.set_ratio(node, ratio)?;
        let domain = self
            .tree
            .node(node)
            .map(|n| n.domain())
            .ok_or(LayoutError::UnknownNode { node })?;
        self.tree.resize(node, domain)
    }

    /// Run one frame: viewport check, hover/drag step, traversal.
    pub fn update(&mut self, host: &mut H) {
        let _span = tracing::trace_span!("layout_frame").entered();

        self.sync_viewport(host);
        match self.drag {
            DragState::Idle => self.step_idle(host),
            DragState::Dragging {
                held,
                pointer_offset,
            } => self.step_dragging(host, held, pointer_offset),
        }

        let root = self.tree.root();
        self.tree.begin_end(root, host);
    }

    fn sync_viewport(&mut self, host: &H) {
        let size = host.viewport_size();
        if !size.is_positive() {
            tracing::trace!(
                width = size.x,
                height = size.y,
                "viewport unavailable, skipping resize"
            );
            return;
        }
        if self.last_viewport == Some(size) {
            return;
        }

        tracing::debug!(
            old = ?self.last_viewport,
            width = size.x,
            height = size.y,
            "viewport resized"
        );
        let root = self.tree.root();
        self.tree
            .resize_node(root, Rect::from_pos_size(host.viewport_origin(), size));
        self.last_viewport = Some(size);
    }

    fn step_idle(&mut self, host: &mut H) {
        let pointer = host.pointer_position();
        let root = self.tree.root();
        let Some(found) = self
            .tree
            .hover_splitter(root, pointer, self.config.hit_padding)
        else {
            return;
        };
        let Some(node) = self.tree.node(found) else {
            return;
        };
        let axis = node.axis();
        host.set_cursor_icon(CursorIcon::for_split(axis));

        if !host.is_primary_pressed() {
            return;
        }
        let Some(start) = node.splitter_start() else {
            return;
        };
        let pointer_offset = start - pointer.along(axis);
        tracing::debug!(
            node = %found,
            level = node.level(),
            pointer_offset,
            "splitter drag started"
        );
        self.drag = DragState::Dragging {
            held: found,
            pointer_offset,
        };
    }

    fn step_dragging(&mut self, host: &mut H, held: NodeId, pointer_offset: f32) {
        if !host.is_primary_down() {
            tracing::debug!(
                node = %held,
                ratio = ?self.tree.node(held).and_then(|n| n.ratio()),
                "splitter drag released"
            );
            self.drag = DragState::Idle;
            return;
        }

        let Some(node) = self.tree.node(held).filter(|n| n.is_split()) else {
            self.drag = DragState::Idle;
            return;
        };
        let axis = node.axis();
        host.set_cursor_icon(CursorIcon::for_split(axis));

        let domain = node.domain();
        let extent = domain.size.along(axis);
        let Some((lo, hi)) = self.config.drag_bounds(extent, node.splitter_thickness()) else {
            tracing::trace!(
                node = %held,
                extent,
                "held split too short to resize, skipping frame"
            );
            return;
        };

        let candidate = host.pointer_position().along(axis) + pointer_offset;
        let raw = (candidate - domain.pos.along(axis)) / extent;
        if !raw.is_finite() {
            return;
        }
        let ratio = raw.clamp(lo, hi);
        if ratio != raw {
            tracing::trace!(node = %held, raw, ratio, "dragged ratio clamped");
        }

        // Drag bounds lie inside (0, 1) for a validated config.
        if self.tree.set_ratio(held, ratio).is_ok() {
            self.tree.resize_node(held, domain);
        }
    }
}

impl<H> std::fmt::Debug for LayoutManager<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutManager")
            .field("tree", &self.tree)
            .field("config", &self.config)
            .field("last_viewport", &self.last_viewport)
            .field("drag", &self.drag)
            .finish()
    }
}
