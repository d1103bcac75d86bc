//! src/graph/view.rs
//!
//! Viewport geometry and the view state layered over the sample window.

use super::range::RangeReport;

/// Viewport size in pixels. The sample store capacity always equals
/// `width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Which control strip the last wheel event landed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveControl {
    #[default]
    None,
    Offset,
    Zoom,
}

/// Derived range plus user overrides.
///
/// `observed_min`, `observed_max` and `base_scale` are recomputed from the
/// store; `vertical_offset` and `zoom_multiplier` only change on user
/// input.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub observed_min: f64,
    pub observed_max: f64,
    pub base_scale: f64,
    pub vertical_offset: f64,
    pub zoom_multiplier: f64,
    pub active_control: ActiveControl,
}

impl ViewState {
    /// Create a fresh view state.
    pub fn new() -> Self {
        Self {
            observed_min: 0.0,
            observed_max: 0.0,
            base_scale: 1.0,
            vertical_offset: 0.0,
            zoom_multiplier: 1.0,
            active_control: ActiveControl::None,
        }
    }

    pub fn apply_range(&mut self, range: RangeReport) {
        self.observed_min = range.min;
        self.observed_max = range.max;
        self.base_scale = range.base_scale;
    }

    /// Drop the offset and zoom overrides.
    pub fn reset_overrides(&mut self) {
        self.vertical_offset = 0.0;
        self.zoom_multiplier = 1.0;
        self.active_control = ActiveControl::None;
    }

    /// Effective pixels per value unit.
    pub fn scale(&self) -> f64 {
        self.base_scale * self.zoom_multiplier
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
