//! Layout tree nodes.
//!
//! A node is either a split (two children and a ratio) or a leaf (one
//! window). Nodes are created detached and then handed to a
//! [`LayoutTree`](crate::tree::LayoutTree), which owns them and hands out
//! [`NodeId`]s.

use std::fmt;

use sash_core::geometry::{Rect, SplitAxis, Vec2};

use crate::error::{LayoutError, check_ratio};
use crate::host::{BoxedRenderer, WindowRenderer};

/// Width of the draggable bar between two children unless overridden.
pub const DEFAULT_SPLITTER_THICKNESS: f32 = 2.0;

/// Handle to a node inside a [`LayoutTree`](crate::tree::LayoutTree).
///
/// IDs are arena indices; nodes are never removed from a tree, so an ID
/// stays valid for the tree's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// ID of the node stored at arena slot `index`.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Arena slot of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape of a node passed to the generic constructor.
pub enum NodeShape<H> {
    /// An interior node splitting its domain at `ratio`.
    Split { ratio: f32 },
    /// A window. `None` places nothing but still reserves the area.
    Leaf { renderer: Option<BoxedRenderer<H>> },
}

pub(crate) enum NodeKind<H> {
    Split {
        ratio: f32,
        first: Option<NodeId>,
        second: Option<NodeId>,
    },
    Leaf {
        renderer: Option<BoxedRenderer<H>>,
    },
}

/// A node of the splitter tree.
pub struct LayoutNode<H> {
    pub(crate) kind: NodeKind<H>,
    pub(crate) level: u32,
    pub(crate) domain: Rect,
    pub(crate) splitter_thickness: f32,
}

impl<H> LayoutNode<H> {
    /// Generic constructor, for a root that is already positioned.
    ///
    /// Split ratios must lie strictly inside (0, 1).
    pub fn new(shape: NodeShape<H>, level: u32, domain: Rect) -> Result<Self, LayoutError> {
        let kind = match shape {
            NodeShape::Split { ratio } => NodeKind::Split {
                ratio: check_ratio(ratio)?,
                first: None,
                second: None,
            },
            NodeShape::Leaf { renderer } => NodeKind::Leaf { renderer },
        };
        Ok(Self {
            kind,
            level,
            domain,
            splitter_thickness: DEFAULT_SPLITTER_THICKNESS,
        })
    }

    /// Split-only constructor. Level and domain are fixed up on attach and
    /// on the first resize.
    pub fn split(ratio: f32) -> Result<Self, LayoutError> {
        Self::new(NodeShape::Split { ratio }, 0, Rect::default())
    }

    /// Leaf-only constructor.
    pub fn leaf(renderer: impl WindowRenderer<H> + 'static) -> Self {
        Self::detached_leaf(Some(Box::new(renderer)))
    }

    /// A leaf with no renderer attached.
    #[must_use]
    pub fn empty_leaf() -> Self {
        Self::detached_leaf(None)
    }

    pub(crate) fn detached_leaf(renderer: Option<BoxedRenderer<H>>) -> Self {
        Self {
            kind: NodeKind::Leaf { renderer },
            level: 0,
            domain: Rect::default(),
            splitter_thickness: DEFAULT_SPLITTER_THICKNESS,
        }
    }

    /// Override the splitter thickness.
    pub fn with_splitter_thickness(mut self, thickness: f32) -> Result<Self, LayoutError> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(LayoutError::InvalidSplitterThickness { thickness });
        }
        self.splitter_thickness = thickness;
        Ok(self)
    }

    /// Whether this is an interior split node.
    #[must_use]
    pub fn is_split(&self) -> bool {
        matches!(self.kind, NodeKind::Split { .. })
    }

    /// Depth in the tree; its parity picks the split axis.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Axis this node splits along (meaningful for split nodes).
    #[must_use]
    pub fn axis(&self) -> SplitAxis {
        SplitAxis::for_level(self.level)
    }

    /// Rectangle this node governs, as of the last resize.
    #[must_use]
    pub fn domain(&self) -> Rect {
        self.domain
    }

    #[must_use]
    pub fn splitter_thickness(&self) -> f32 {
        self.splitter_thickness
    }

    /// Split ratio, `None` for leaves.
    #[must_use]
    pub fn ratio(&self) -> Option<f32> {
        match self.kind {
            NodeKind::Split { ratio, .. } => Some(ratio),
            NodeKind::Leaf { .. } => None,
        }
    }

    #[must_use]
    pub fn first_child(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Split { first, .. } => first,
            NodeKind::Leaf { .. } => None,
        }
    }

    #[must_use]
    pub fn second_child(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Split { second, .. } => second,
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Whether a leaf has a renderer. Always false for splits.
    #[must_use]
    pub fn has_renderer(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { renderer: Some(_) })
    }

    /// Coordinate on the split axis where the splitter bar begins.
    #[must_use]
    pub fn splitter_start(&self) -> Option<f32> {
        let ratio = self.ratio()?;
        let axis = self.axis();
        Some(self.domain.pos.along(axis) + ratio * self.domain.size.along(axis))
    }

    /// Anchor of the splitter bar: the start coordinate on the split axis,
    /// the domain origin on the other.
    #[must_use]
    pub fn splitter_pos(&self) -> Option<Vec2> {
        let start = self.splitter_start()?;
        let axis = self.axis();
        Some(Vec2::from_axis(axis, start, self.domain.pos.across(axis)))
    }

    /// The unpadded splitter bar.
    #[must_use]
    pub fn splitter_rect(&self) -> Option<Rect> {
        let pos = self.splitter_pos()?;
        let axis = self.axis();
        let size = Vec2::from_axis(
            axis,
            self.splitter_thickness,
            self.domain.size.across(axis),
        );
        Some(Rect::from_pos_size(pos, size))
    }
}

impl<H> fmt::Debug for LayoutNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("LayoutNode");
        match &self.kind {
            NodeKind::Split {
                ratio,
                first,
                second,
            } => {
                s.field("ratio", ratio)
                    .field("first", first)
                    .field("second", second);
            }
            NodeKind::Leaf { renderer } => {
                s.field("renderer", &renderer.is_some());
            }
        }
        s.field("level", &self.level)
            .field("domain", &self.domain)
            .field("splitter_thickness", &self.splitter_thickness)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Node = LayoutNode<()>;

    #[test]
    fn split_only_defaults() {
        let node = Node::split(0.25).expect("valid ratio");
        assert!(node.is_split());
        assert_eq!(node.level(), 0);
        assert_eq!(node.domain(), Rect::default());
        assert_eq!(node.ratio(), Some(0.25));
        assert_eq!(node.splitter_thickness(), DEFAULT_SPLITTER_THICKNESS);
        assert_eq!(node.first_child(), None);
    }

    #[test]
    fn leaf_only_has_no_ratio() {
        let node = Node::leaf(|_: &mut (), _: Rect| {});
        assert!(!node.is_split());
        assert!(node.has_renderer());
        assert_eq!(node.ratio(), None);
        assert_eq!(node.splitter_start(), None);
        assert_eq!(node.splitter_rect(), None);
        assert!(!Node::empty_leaf().has_renderer());
    }

    #[test]
    fn generic_constructor_validates_ratio() {
        let err = Node::new(NodeShape::Split { ratio: 1.0 }, 1, Rect::default())
            .expect_err("ratio 1 leaves no room for the second child");
        assert_eq!(err, LayoutError::InvalidRatio { ratio: 1.0 });
        assert!(Node::split(0.0).is_err());
    }

    #[test]
    fn thickness_must_be_non_negative() {
        assert!(Node::empty_leaf().with_splitter_thickness(-1.0).is_err());
        let node = Node::split(0.5)
            .and_then(|n| n.with_splitter_thickness(0.0))
            .expect("zero thickness is allowed");
        assert_eq!(node.splitter_thickness(), 0.0);
    }

    #[test]
    fn splitter_geometry_follows_level_parity() {
        let domain = Rect::new(10.0, 20.0, 200.0, 100.0);
        let odd = Node::new(NodeShape::Split { ratio: 0.5 }, 1, domain).expect("valid");
        assert_eq!(odd.axis(), SplitAxis::Horizontal);
        assert_eq!(odd.splitter_start(), Some(110.0));
        assert_eq!(odd.splitter_pos(), Some(Vec2::new(110.0, 20.0)));
        assert_eq!(odd.splitter_rect(), Some(Rect::new(110.0, 20.0, 2.0, 100.0)));

        let even = Node::new(NodeShape::Split { ratio: 0.25 }, 2, domain).expect("valid");
        assert_eq!(even.axis(), SplitAxis::Vertical);
        assert_eq!(even.splitter_start(), Some(45.0));
        assert_eq!(even.splitter_pos(), Some(Vec2::new(10.0, 45.0)));
        assert_eq!(even.splitter_rect(), Some(Rect::new(10.0, 45.0, 200.0, 2.0)));
    }

    #[test]
    fn debug_hides_renderer_internals() {
        let node = Node::leaf(|_: &mut (), _: Rect| {});
        let text = format!("{node:?}");
        assert!(text.contains("renderer: true"));
    }
}
