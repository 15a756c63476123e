//! Ready-made layouts.

use sash_core::geometry::Rect;

use crate::error::LayoutError;
use crate::host::WindowRenderer;
use crate::node::{LayoutNode, NodeShape};
use crate::tree::{ChildSpec, LayoutTree};

/// Ratio of the primary left/right split in the presets.
pub const PRIMARY_RATIO: f32 = 0.8;

/// Ratio of the top/bottom split on the left side of [`blender_start`].
pub const SIDE_RATIO: f32 = 0.8;

fn primary_root<H>() -> Result<LayoutTree<H>, LayoutError> {
    let root = LayoutNode::new(NodeShape::Split { ratio: PRIMARY_RATIO }, 1, Rect::default())?;
    Ok(LayoutTree::new(root))
}

/// A wide main window on the left and a narrow panel on the right.
pub fn two_pane<H>(
    left: impl WindowRenderer<H> + 'static,
    right: impl WindowRenderer<H> + 'static,
) -> Result<LayoutTree<H>, LayoutError> {
    let mut tree = primary_root()?;
    let root = tree.root();
    tree.create_first_child(root, ChildSpec::leaf(left))?;
    tree.create_second_child(root, ChildSpec::leaf(right))?;
    Ok(tree)
}

/// A 3D-editor style start screen: the left side holds a large viewport
/// over a timeline strip, the right side a properties panel.
///
/// ```text
/// +----------------+----+
/// |   left_top     |    |
/// |                |right
/// +----------------+    |
/// |  left_bottom   |    |
/// +----------------+----+
/// ```
pub fn blender_start<H>(
    left_top: impl WindowRenderer<H> + 'static,
    left_bottom: impl WindowRenderer<H> + 'static,
    right: impl WindowRenderer<H> + 'static,
) -> Result<LayoutTree<H>, LayoutError> {
    let mut tree = primary_root()?;
    let root = tree.root();
    let left = tree.create_first_child(root, ChildSpec::Split(SIDE_RATIO))?;
    tree.create_second_child(root, ChildSpec::leaf(right))?;
    tree.create_first_child(left, ChildSpec::leaf(left_top))?;
    tree.create_second_child(left, ChildSpec::leaf(left_bottom))?;
    Ok(tree)
}
