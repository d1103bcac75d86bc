//! src/graph/config.rs
//!
//! Configuration values for control geometry, interaction steps and
//! resize behavior.

/// Units the stored sample values are expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleUnits {
    /// Raw data values; all pixel mapping happens at plan time.
    #[default]
    Logical,

    /// Values that are already pixel heights. They are rescaled by the
    /// height ratio when the viewport is resized.
    Pixels,
}

#[derive(Clone, Debug)]
pub struct GraphConfig {
    /// Thickness of both control strips, in pixels.
    pub control_thickness: f64,

    /// Gap between the control strips and the viewport edges.
    pub edge_padding: f64,

    /// Vertical offset change per wheel notch over the offset strip.
    pub offset_step: f64,

    /// Zoom factor applied per wheel notch over the zoom strip.
    pub zoom_step: f64,

    pub sample_units: SampleUnits,
}

impl GraphConfig {
    /// Create a new `GraphConfig` with the given control geometry and
    /// default interaction steps.
    pub fn new(control_thickness: f64, edge_padding: f64) -> Self {
        Self {
            control_thickness,
            edge_padding,
            ..Self::default()
        }
    }

    /// Pixels available to the data between the bottom control strip and
    /// the top edge.
    pub fn plot_height(&self, viewport_height: usize) -> f64 {
        (viewport_height as f64 - self.control_thickness - 2.0 * self.edge_padding).max(0.0)
    }

    /// Pixel row of the value baseline (`observedMin` with no offset).
    pub fn baseline(&self, viewport_height: usize) -> f64 {
        viewport_height as f64 - self.control_thickness - self.edge_padding
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            control_thickness: 8.0,
            edge_padding: 4.0,
            offset_step: 10.0,
            zoom_step: 1.1,
            sample_units: SampleUnits::Logical,
        }
    }
}
