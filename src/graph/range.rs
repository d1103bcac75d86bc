//! src/graph/range.rs
//!
//! Full-window range tracking: observed extremes and the auto-scale factor.

use super::config::GraphConfig;
use super::store::SampleStore;
use super::view::Viewport;

/// Result of a range scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeReport {
    pub min: f64,
    pub max: f64,
    pub base_scale: f64,
}

impl RangeReport {
    /// Range used when the window holds no valid sample.
    pub const FLAT: RangeReport = RangeReport {
        min: 0.0,
        max: 0.0,
        base_scale: 1.0,
    };
}

/// Scan every valid sample in `store` and derive `(min, max, base_scale)`.
///
/// The scan covers the whole window on every call. An empty window yields
/// [`RangeReport::FLAT`]; a window whose valid samples are all equal keeps
/// its extremes but falls back to a scale of 1.
pub fn recompute(store: &SampleStore, viewport: Viewport, config: &GraphConfig) -> RangeReport {
    let (min, max) = store
        .valid_values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(mn, mx), v| {
            (mn.min(v), mx.max(v))
        });

    if min > max {
        return RangeReport::FLAT;
    }

    let base_scale = if max == min {
        1.0
    } else {
        config.plot_height(viewport.height) / (max - min)
    };

    RangeReport {
        min,
        max,
        base_scale,
    }
}
