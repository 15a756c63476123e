#![forbid(unsafe_code)]

//! Geometric primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector used for positions and sizes.
///
/// Uses host coordinates (origin at top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    #[inline]
    pub const fn along(self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.x,
            SplitAxis::Vertical => self.y,
        }
    }

    /// Component across `axis` (the other one).
    #[inline]
    pub const fn across(self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.y,
            SplitAxis::Vertical => self.x,
        }
    }

    /// Build a vector from its components along and across `axis`.
    #[inline]
    pub const fn from_axis(axis: SplitAxis, along: f32, across: f32) -> Self {
        match axis {
            SplitAxis::Horizontal => Self::new(along, across),
            SplitAxis::Vertical => Self::new(across, along),
        }
    }

    /// True when both components are finite and strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Orientation of a split.
///
/// `Horizontal` lays children out left/right (the bar itself is vertical).
/// `Vertical` lays children out top/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

impl SplitAxis {
    /// Axis used by a split node at tree depth `level`.
    ///
    /// Odd levels split left/right, even levels split top/bottom.
    #[inline]
    pub const fn for_level(level: u32) -> Self {
        if level % 2 == 1 {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// A rectangle for window placement, splitter bars and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner.
    pub pos: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rectangle from a position and a size.
    #[inline]
    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Check if a point is inside the rectangle, edges included.
    #[inline]
    pub fn contains_inclusive(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.bottom()
    }

    /// Grow the rectangle by `amount` on both sides along `axis`.
    pub fn expand_along(&self, axis: SplitAxis, amount: f32) -> Rect {
        let pos = Vec2::from_axis(
            axis,
            self.pos.along(axis) - amount,
            self.pos.across(axis),
        );
        let size = Vec2::from_axis(
            axis,
            self.size.along(axis) + amount * 2.0,
            self.size.across(axis),
        );
        Rect { pos, size }
    }

    /// Compute the intersection with another rectangle, returning `None` if
    /// there is no overlap with positive area.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.pos.x.max(other.pos.x);
        let y = self.pos.y.max(other.pos.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, SplitAxis, Vec2};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains_inclusive(Vec2::new(2.0, 3.0)));
        assert!(rect.contains_inclusive(Vec2::new(6.0, 8.0)));
        assert!(!rect.contains_inclusive(Vec2::new(6.5, 3.0)));
        assert!(!rect.contains_inclusive(Vec2::new(2.0, 8.5)));
    }

    #[test]
    fn level_parity_picks_axis() {
        assert_eq!(SplitAxis::for_level(1), SplitAxis::Horizontal);
        assert_eq!(SplitAxis::for_level(2), SplitAxis::Vertical);
        assert_eq!(SplitAxis::for_level(3), SplitAxis::Horizontal);
        assert_eq!(SplitAxis::for_level(0), SplitAxis::Vertical);
    }

    #[test]
    fn axis_components_round_trip() {
        let v = Vec2::new(3.0, 7.0);
        for axis in [SplitAxis::Horizontal, SplitAxis::Vertical] {
            assert_eq!(Vec2::from_axis(axis, v.along(axis), v.across(axis)), v);
        }
    }

    #[test]
    fn expand_along_only_touches_split_axis() {
        let bar = Rect::new(100.0, 0.0, 2.0, 50.0);
        let band = bar.expand_along(SplitAxis::Horizontal, 2.0);
        assert_eq!(band, Rect::new(98.0, 0.0, 6.0, 50.0));

        let bar = Rect::new(0.0, 40.0, 80.0, 2.0);
        let band = bar.expand_along(SplitAxis::Vertical, 3.0);
        assert_eq!(band, Rect::new(0.0, 37.0, 80.0, 8.0));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.intersection_opt(&b), Some(Rect::new(2.0, 2.0, 2.0, 2.0)));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(4.0, 0.0, 4.0, 4.0);
        assert_eq!(a.intersection_opt(&b), None);
    }

    #[test]
    fn zero_or_negative_sizes_are_not_positive() {
        assert!(Vec2::new(1.0, 1.0).is_positive());
        assert!(!Vec2::new(0.0, 10.0).is_positive());
        assert!(!Vec2::new(10.0, -1.0).is_positive());
        assert!(!Vec2::new(f32::NAN, 10.0).is_positive());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rect_serializes_as_pos_and_size() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).expect("serialize");
        assert_eq!(json, r#"{"pos":{"x":1.0,"y":2.0},"size":{"x":3.0,"y":4.0}}"#);
    }
}
