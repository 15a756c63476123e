//! Interaction tuning for the layout manager.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Default extra grab margin on each side of a splitter bar.
pub const DEFAULT_HIT_PADDING: f32 = 2.0;

/// Default lower bound applied to ratios produced by dragging.
pub const DEFAULT_MIN_RATIO: f32 = 0.02;

/// Default upper bound applied to ratios produced by dragging.
pub const DEFAULT_MAX_RATIO: f32 = 0.98;

/// Default smallest extent a drag may leave either child with.
pub const DEFAULT_MIN_PANE_EXTENT: f32 = 1.0;

/// Hit-testing and drag tuning.
///
/// Every field is optional when deserializing; missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Extra margin added on both sides of a splitter bar, along the split
    /// axis only, when hit testing.
    pub hit_padding: f32,
    /// Smallest ratio a drag may produce.
    pub min_ratio: f32,
    /// Largest ratio a drag may produce.
    pub max_ratio: f32,
    /// Smallest extent, along the split axis, a drag may leave either child
    /// with.
    pub min_pane_extent: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hit_padding: DEFAULT_HIT_PADDING,
            min_ratio: DEFAULT_MIN_RATIO,
            max_ratio: DEFAULT_MAX_RATIO,
            min_pane_extent: DEFAULT_MIN_PANE_EXTENT,
        }
    }
}

impl LayoutConfig {
    /// Set the hit padding.
    #[must_use]
    pub fn hit_padding(mut self, padding: f32) -> Self {
        self.hit_padding = padding;
        self
    }

    /// Set the drag ratio bounds.
    #[must_use]
    pub fn ratio_bounds(mut self, min_ratio: f32, max_ratio: f32) -> Self {
        self.min_ratio = min_ratio;
        self.max_ratio = max_ratio;
        self
    }

    /// Set the smallest child extent a drag may produce.
    #[must_use]
    pub fn min_pane_extent(mut self, extent: f32) -> Self {
        self.min_pane_extent = extent;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.hit_padding.is_finite() || self.hit_padding < 0.0 {
            return Err(LayoutError::InvalidConfig {
                field: "hit_padding",
                reason: "must be finite and >= 0",
            });
        }
        if !self.min_ratio.is_finite() || self.min_ratio <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                field: "min_ratio",
                reason: "must be finite and > 0",
            });
        }
        if !self.max_ratio.is_finite() || self.max_ratio >= 1.0 {
            return Err(LayoutError::InvalidConfig {
                field: "max_ratio",
                reason: "must be finite and < 1",
            });
        }
        if !self.min_pane_extent.is_finite() || self.min_pane_extent <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                field: "min_pane_extent",
                reason: "must be finite and > 0",
            });
        }
        if self.min_ratio >= self.max_ratio {
            return Err(LayoutError::InvalidConfig {
                field: "min_ratio",
                reason: "must be below max_ratio",
            });
        }
        Ok(())
    }

    /// Ratio bounds for dragging a split whose domain is `extent` long on
    /// its axis and whose bar is `thickness` thick.
    ///
    /// The bounds are `[min_ratio, max_ratio]`, narrowed so that both
    /// children keep at least `min_pane_extent`. `None` when the domain is
    /// too short for that.
    #[must_use]
    pub fn drag_bounds(&self, extent: f32, thickness: f32) -> Option<(f32, f32)> {
        if !extent.is_finite() || extent <= 0.0 {
            return None;
        }
        let lo = self.min_ratio.max(self.min_pane_extent / extent);
        let hi = self
            .max_ratio
            .min(1.0 - (thickness + self.min_pane_extent) / extent);
        (lo <= hi).then_some((lo, hi))
    }

    /// Clamp a dragged ratio into [`drag_bounds`](Self::drag_bounds).
    #[must_use]
    pub fn clamp_drag_ratio(&self, ratio: f32, extent: f32, thickness: f32) -> Option<f32> {
        let (lo, hi) = self.drag_bounds(extent, thickness)?;
        Some(ratio.clamp(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LayoutConfig::default();
        assert_eq!(config.hit_padding, 2.0);
        assert_eq!(config.min_ratio, 0.02);
        assert_eq!(config.max_ratio, 0.98);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn clamp_is_idempotent() {
        let config = LayoutConfig::default();
        let once = config.clamp_drag_ratio(-4.0, 1000.0, 2.0).expect("room");
        assert_eq!(once, 0.02);
        assert_eq!(config.clamp_drag_ratio(once, 1000.0, 2.0), Some(once));
        assert_eq!(config.clamp_drag_ratio(7.5, 1000.0, 2.0), Some(0.98));
        assert_eq!(config.clamp_drag_ratio(0.4, 1000.0, 2.0), Some(0.4));
    }

    #[test]
    fn short_domains_narrow_the_bounds() {
        let config = LayoutConfig::default();
        let (lo, hi) = config.drag_bounds(80.0, 2.0).expect("room");
        assert_eq!(lo, 0.02);
        assert!((hi - (1.0 - 3.0 / 80.0)).abs() < 1e-6);

        let (lo, _) = config.drag_bounds(20.0, 2.0).expect("room");
        assert_eq!(lo, 0.05);

        // Bar plus two minimum children does not fit.
        assert_eq!(config.drag_bounds(2.5, 2.0), None);
        assert_eq!(config.drag_bounds(0.0, 2.0), None);
        assert_eq!(config.clamp_drag_ratio(0.5, f32::NAN, 2.0), None);
    }

    #[test]
    fn rejects_non_positive_min_pane_extent() {
        let err = LayoutConfig::default()
            .min_pane_extent(0.0)
            .validate()
            .expect_err("zero extent");
        assert!(matches!(
            err,
            LayoutError::InvalidConfig {
                field: "min_pane_extent",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = LayoutConfig::default().ratio_bounds(0.6, 0.4);
        let err = config.validate().expect_err("inverted bounds");
        assert!(matches!(
            err,
            LayoutError::InvalidConfig {
                field: "min_ratio",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bounds_touching_the_edges() {
        assert!(LayoutConfig::default().ratio_bounds(0.0, 0.5).validate().is_err());
        assert!(LayoutConfig::default().ratio_bounds(0.5, 1.0).validate().is_err());
    }

    #[test]
    fn rejects_negative_padding() {
        let err = LayoutConfig::default()
            .hit_padding(-1.0)
            .validate()
            .expect_err("negative padding");
        assert!(matches!(
            err,
            LayoutError::InvalidConfig {
                field: "hit_padding",
                ..
            }
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"hit_padding": 4.0}"#).expect("parse config");
        assert_eq!(config.hit_padding, 4.0);
        assert_eq!(config.min_ratio, DEFAULT_MIN_RATIO);
        assert_eq!(config.max_ratio, DEFAULT_MAX_RATIO);
        assert_eq!(config.min_pane_extent, DEFAULT_MIN_PANE_EXTENT);
    }
}
