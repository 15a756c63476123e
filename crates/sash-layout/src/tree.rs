//! Arena-backed splitter tree.
//!
//! The tree owns every node. Geometry is pushed top-down by [`LayoutTree::resize`]
//! and is never derived lazily: after a resize every node's domain is final
//! until the next resize of it or an ancestor.
//!
//! ```text
//! level 1 (left/right)
//! ├── level 2 (top/bottom)
//! │   ├── leaf
//! │   └── leaf
//! └── leaf
//! ```

use sash_core::geometry::{Rect, SplitAxis, Vec2};

use crate::error::{ChildSlot, LayoutError, check_ratio};
use crate::host::{BoxedRenderer, LayoutHost, WindowRenderer};
use crate::node::{LayoutNode, NodeId, NodeKind};

/// Description of a child to attach under a split node.
pub enum ChildSpec<H> {
    /// A further split at the given ratio.
    Split(f32),
    /// A window leaf.
    Leaf(BoxedRenderer<H>),
    /// A leaf with no renderer.
    EmptyLeaf,
}

impl<H> ChildSpec<H> {
    /// Leaf child drawing with `renderer`.
    pub fn leaf(renderer: impl WindowRenderer<H> + 'static) -> Self {
        Self::Leaf(Box::new(renderer))
    }

    fn into_node(self) -> Result<LayoutNode<H>, LayoutError> {
        match self {
            Self::Split(ratio) => LayoutNode::split(ratio),
            Self::Leaf(renderer) => Ok(LayoutNode::detached_leaf(Some(renderer))),
            Self::EmptyLeaf => Ok(LayoutNode::detached_leaf(None)),
        }
    }
}

/// A binary splitter tree with a single root.
pub struct LayoutTree<H> {
    nodes: Vec<LayoutNode<H>>,
    root: NodeId,
}

impl<H> LayoutTree<H> {
    /// Take ownership of `root` as the tree's root node.
    #[must_use]
    pub fn new(root: LayoutNode<H>) -> Self {
        Self {
            nodes: vec![root],
            root: NodeId::from_index(0),
        }
    }

    /// Root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, splits and leaves together.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Lookup a node by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&LayoutNode<H>> {
        self.nodes.get(id.index())
    }

    fn get(&self, id: NodeId) -> Result<&LayoutNode<H>, LayoutError> {
        self.node(id).ok_or(LayoutError::UnknownNode { node: id })
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode<H>, LayoutError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(LayoutError::UnknownNode { node: id })
    }

    /// Attach a new left (or top) child under `parent`.
    pub fn create_first_child(
        &mut self,
        parent: NodeId,
        spec: ChildSpec<H>,
    ) -> Result<NodeId, LayoutError> {
        self.attach(parent, ChildSlot::First, spec)
    }

    /// Attach a new right (or bottom) child under `parent`.
    pub fn create_second_child(
        &mut self,
        parent: NodeId,
        spec: ChildSpec<H>,
    ) -> Result<NodeId, LayoutError> {
        self.attach(parent, ChildSlot::Second, spec)
    }

    fn attach(
        &mut self,
        parent: NodeId,
        slot: ChildSlot,
        spec: ChildSpec<H>,
    ) -> Result<NodeId, LayoutError> {
        let parent_node = self.get(parent)?;
        let (level, thickness) = (parent_node.level, parent_node.splitter_thickness);
        let occupied = match parent_node.kind {
            NodeKind::Split { first, second, .. } => match slot {
                ChildSlot::First => first.is_some(),
                ChildSlot::Second => second.is_some(),
            },
            NodeKind::Leaf { .. } => return Err(LayoutError::ChildOnLeaf { parent }),
        };
        if occupied {
            return Err(LayoutError::ChildAlreadyAttached { parent, slot });
        }

        let mut child = spec.into_node()?;
        child.level = level + 1;
        child.splitter_thickness = thickness;

        let index = u32::try_from(self.nodes.len()).map_err(|_| LayoutError::TooManyNodes)?;
        let id = NodeId::from_index(index);
        self.nodes.push(child);
        if let NodeKind::Split { first, second, .. } = &mut self.get_mut(parent)?.kind {
            match slot {
                ChildSlot::First => *first = Some(id),
                ChildSlot::Second => *second = Some(id),
            }
        }
        Ok(id)
    }

    /// Coordinate where the splitter of `id` begins (x for odd levels, y for
    /// even levels).
    pub fn splitter_start(&self, id: NodeId) -> Result<f32, LayoutError> {
        self.get(id)?
            .splitter_start()
            .ok_or(LayoutError::NotASplit { node: id })
    }

    /// Anchor point of the splitter bar of `id`.
    pub fn splitter_pos(&self, id: NodeId) -> Result<Vec2, LayoutError> {
        self.get(id)?
            .splitter_pos()
            .ok_or(LayoutError::NotASplit { node: id })
    }

    /// The splitter bar of `id`, for drawing.
    pub fn splitter_rect(&self, id: NodeId) -> Result<Rect, LayoutError> {
        self.get(id)?
            .splitter_rect()
            .ok_or(LayoutError::NotASplit { node: id })
    }

    /// The splitter bar of `id` grown by `padding` on both sides of the split
    /// axis. This is the area that reacts to the pointer.
    pub fn splitter_hit_rect(&self, id: NodeId, padding: f32) -> Result<Rect, LayoutError> {
        let node = self.get(id)?;
        let bar = node
            .splitter_rect()
            .ok_or(LayoutError::NotASplit { node: id })?;
        Ok(bar.expand_along(node.axis(), padding))
    }

    /// Replace the split ratio of `id`. Geometry is not recomputed; call
    /// [`resize`](Self::resize) afterwards.
    pub fn set_ratio(&mut self, id: NodeId, ratio: f32) -> Result<(), LayoutError> {
        let ratio = check_ratio(ratio)?;
        match &mut self.get_mut(id)?.kind {
            NodeKind::Split { ratio: current, .. } => {
                *current = ratio;
                Ok(())
            }
            NodeKind::Leaf { .. } => Err(LayoutError::NotASplit { node: id }),
        }
    }

    /// Set the domain of `id` and recompute every descendant's domain.
    ///
    /// The first child receives the span from the domain origin up to the
    /// splitter start; the second child starts right after the bar and fills
    /// the rest. Ratios are only read, never changed.
    pub fn resize(&mut self, id: NodeId, domain: Rect) -> Result<(), LayoutError> {
        self.get(id)?;
        self.resize_node(id, domain);
        Ok(())
    }

    pub(crate) fn resize_node(&mut self, id: NodeId, domain: Rect) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        node.domain = domain;
        let NodeKind::Split {
            ratio,
            first,
            second,
        } = node.kind
        else {
            return;
        };

        let axis = node.axis();
        let (first_rect, second_rect) = split_domain(domain, axis, ratio, node.splitter_thickness);
        if let Some(first) = first {
            self.resize_node(first, first_rect);
        }
        if let Some(second) = second {
            self.resize_node(second, second_rect);
        }
    }

    /// Find the splitter under `pointer`, searching the subtree at `id`.
    ///
    /// At every split the pointer belongs to exactly one region: the padded
    /// splitter band, the first side or the second side. Only that region is
    /// searched further, so at most one node is returned.
    #[must_use]
    pub fn hover_splitter(&self, id: NodeId, pointer: Vec2, padding: f32) -> Option<NodeId> {
        let node = self.node(id)?;
        let NodeKind::Split { first, second, .. } = node.kind else {
            return None;
        };
        if !node.domain.contains_inclusive(pointer) {
            return None;
        }

        let start = node.splitter_start()?;
        let band = node.splitter_rect()?.expand_along(node.axis(), padding);
        if band.contains_inclusive(pointer) {
            return Some(id);
        }

        let side = if pointer.along(node.axis()) < start {
            first
        } else {
            second
        };
        self.hover_splitter(side?, pointer, padding)
    }

    /// Emit the layout: push each leaf's placement to the host and run its
    /// renderer. Leaves are visited first-child first.
    pub fn begin_end(&mut self, id: NodeId, host: &mut H)
    where
        H: LayoutHost,
    {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        let domain = node.domain;
        match &mut node.kind {
            NodeKind::Split { first, second, .. } => {
                let children = [*first, *second];
                for child in children.into_iter().flatten() {
                    self.begin_end(child, host);
                }
            }
            NodeKind::Leaf { renderer } => {
                host.set_next_window_placement(domain.pos, domain.size);
                if let Some(renderer) = renderer {
                    renderer.render(host, domain);
                }
            }
        }
    }

    /// Leaf IDs in traversal order.
    #[must_use]
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(self.root, &mut out, false);
        out
    }

    /// Split IDs in pre-order.
    #[must_use]
    pub fn splits(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(self.root, &mut out, true);
        out
    }

    fn collect(&self, id: NodeId, out: &mut Vec<NodeId>, splits: bool) {
        let Some(node) = self.node(id) else {
            return;
        };
        match node.kind {
            NodeKind::Split { first, second, .. } => {
                if splits {
                    out.push(id);
                }
                for child in [first, second].into_iter().flatten() {
                    self.collect(child, out, splits);
                }
            }
            NodeKind::Leaf { .. } => {
                if !splits {
                    out.push(id);
                }
            }
        }
    }

    /// Check that the tree is complete: every split has both children, every
    /// child sits one level below its parent and every ratio is in (0, 1).
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.get(id)?;
            let NodeKind::Split {
                ratio,
                first,
                second,
            } = node.kind
            else {
                continue;
            };
            check_ratio(ratio)?;
            for (slot, child) in [(ChildSlot::First, first), (ChildSlot::Second, second)] {
                let child = child.ok_or(LayoutError::MissingChild { node: id, slot })?;
                let found = self.get(child)?.level;
                let expected = node.level + 1;
                if found != expected {
                    return Err(LayoutError::LevelMismatch {
                        node: child,
                        expected,
                        found,
                    });
                }
                stack.push(child);
            }
        }
        Ok(())
    }
}

impl<H> std::fmt::Debug for LayoutTree<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutTree")
            .field("root", &self.root)
            .field("nodes", &self.nodes)
            .finish()
    }
}

/// Divide `domain` at `ratio` along `axis`, leaving a `thickness` wide bar
/// between the halves. Sizes saturate at zero.
fn split_domain(domain: Rect, axis: SplitAxis, ratio: f32, thickness: f32) -> (Rect, Rect) {
    let origin = domain.pos.along(axis);
    let extent = domain.size.along(axis);
    let cross_pos = domain.pos.across(axis);
    let cross_len = domain.size.across(axis);

    let start = origin + ratio * extent;
    let first_len = (start - origin).max(0.0);
    let second_origin = start + thickness;
    let second_len = (extent - (start - origin + thickness)).max(0.0);

    let first = Rect::from_pos_size(
        Vec2::from_axis(axis, origin, cross_pos),
        Vec2::from_axis(axis, first_len, cross_len),
    );
    let second = Rect::from_pos_size(
        Vec2::from_axis(axis, second_origin, cross_pos),
        Vec2::from_axis(axis, second_len, cross_len),
    );
    (first, second)
}
