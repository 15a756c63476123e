//! Structural errors raised while building or validating a layout tree.

use std::fmt;

use crate::node::NodeId;

/// Which child slot of a split node an operation refers to.
///
/// `First` is the left child of a left/right split and the top child of a
/// top/bottom split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildSlot {
    First,
    Second,
}

impl fmt::Display for ChildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Layout description errors.
///
/// These indicate a malformed layout description and are expected to surface
/// once, while the tree is assembled at startup. The per-frame update never
/// produces them.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Split ratio outside the open interval (0, 1), or not finite.
    InvalidRatio { ratio: f32 },
    /// Splitter thickness negative or not finite.
    InvalidSplitterThickness { thickness: f32 },
    /// Children can only be attached to split nodes.
    ChildOnLeaf { parent: NodeId },
    /// The requested child slot is already occupied.
    ChildAlreadyAttached { parent: NodeId, slot: ChildSlot },
    /// A split node is missing one of its two children.
    MissingChild { node: NodeId, slot: ChildSlot },
    /// Splitter geometry was requested from a leaf node.
    NotASplit { node: NodeId },
    /// The node ID does not belong to this tree.
    UnknownNode { node: NodeId },
    /// A child's level is not its parent's level plus one.
    LevelMismatch {
        node: NodeId,
        expected: u32,
        found: u32,
    },
    /// The arena already holds as many nodes as a [`NodeId`] can address.
    TooManyNodes,
    /// A configuration field holds an unusable value.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRatio { ratio } => {
                write!(f, "split ratio must be finite and in (0, 1) (got {ratio})")
            }
            Self::InvalidSplitterThickness { thickness } => {
                write!(
                    f,
                    "splitter thickness must be finite and >= 0 (got {thickness})"
                )
            }
            Self::ChildOnLeaf { parent } => {
                write!(f, "node {parent} is a leaf and cannot have children")
            }
            Self::ChildAlreadyAttached { parent, slot } => {
                write!(f, "node {parent} already has a {slot} child")
            }
            Self::MissingChild { node, slot } => {
                write!(f, "split node {node} is missing its {slot} child")
            }
            Self::NotASplit { node } => write!(f, "node {node} is not a split node"),
            Self::UnknownNode { node } => write!(f, "node {node} does not exist in this tree"),
            Self::LevelMismatch {
                node,
                expected,
                found,
            } => write!(
                f,
                "node {node} has level {found}, expected {expected} (parent level + 1)"
            ),
            Self::TooManyNodes => {
                write!(f, "layout tree is full (at most {} nodes)", u32::MAX)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid layout config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Validate a split ratio.
pub(crate) fn check_ratio(ratio: f32) -> Result<f32, LayoutError> {
    if ratio.is_finite() && ratio > 0.0 && ratio < 1.0 {
        Ok(ratio)
    } else {
        Err(LayoutError::InvalidRatio { ratio })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_bounds_are_exclusive() {
        assert!(check_ratio(0.5).is_ok());
        assert!(check_ratio(0.0001).is_ok());
        assert_eq!(
            check_ratio(0.0),
            Err(LayoutError::InvalidRatio { ratio: 0.0 })
        );
        assert!(check_ratio(1.0).is_err());
        assert!(check_ratio(-0.3).is_err());
        assert!(check_ratio(f32::NAN).is_err());
        assert!(check_ratio(f32::INFINITY).is_err());
    }

    #[test]
    fn display_names_the_node_and_slot() {
        let err = LayoutError::ChildAlreadyAttached {
            parent: NodeId::from_index(3),
            slot: ChildSlot::Second,
        };
        assert_eq!(err.to_string(), "node #3 already has a second child");

        let err = LayoutError::InvalidConfig {
            field: "min_ratio",
            reason: "must be below max_ratio",
        };
        assert_eq!(
            err.to_string(),
            "invalid layout config field `min_ratio`: must be below max_ratio"
        );

        assert_eq!(
            LayoutError::TooManyNodes.to_string(),
            "layout tree is full (at most 4294967295 nodes)"
        );
    }
}
