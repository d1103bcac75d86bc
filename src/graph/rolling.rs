//! src/graph/rolling.rs
//!
//! The owning context: sample store, view state, viewport and config in
//! one explicitly-owned value driven by the main loop.

use super::config::GraphConfig;
use super::interaction::{self, ControlRegions, WheelEvent};
use super::range;
use super::resample::resample;
use super::store::SampleStore;
use super::view::{ActiveControl, ViewState, Viewport};
use crate::error::GraphError;
use crate::render::{FramePlan, plan};

#[derive(Debug)]
pub struct RollingGraph {
    store: SampleStore,
    view: ViewState,
    viewport: Viewport,
    config: GraphConfig,
}

impl RollingGraph {
    /// Create a graph whose window spans `viewport.width` MISSING samples.
    pub fn new(viewport: Viewport, config: GraphConfig) -> Self {
        Self {
            store: SampleStore::new(viewport.width),
            view: ViewState::new(),
            viewport,
            config,
        }
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn regions(&self) -> ControlRegions {
        ControlRegions::for_viewport(self.viewport, &self.config)
    }

    /// Push one sample and recompute the observed range over the window.
    pub fn ingest(&mut self, value: Option<f64>) {
        self.store.ingest(value);
        self.refresh_range();
        log::trace!(
            "ingest {:?} -> range [{}, {}] scale {}",
            value,
            self.view.observed_min,
            self.view.observed_max,
            self.view.base_scale
        );
    }

    /// Rebuild the store for a new viewport.
    ///
    /// The replacement is fully populated before it takes the place of the
    /// old store; on allocation failure the graph is left untouched.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), GraphError> {
        if viewport == self.viewport {
            return Ok(());
        }
        let store = resample(
            &self.store,
            viewport,
            self.viewport,
            self.config.sample_units,
        )?;
        log::debug!(
            "resize {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.store = store;
        self.viewport = viewport;
        self.refresh_range();
        Ok(())
    }

    /// Feed a wheel notch at viewport pixel `(x, y)`.
    pub fn wheel(&mut self, x: f64, y: f64, delta: i32) -> ActiveControl {
        let regions = self.regions();
        interaction::handle_wheel(
            &mut self.view,
            &regions,
            WheelEvent { x, y, delta },
            &self.config,
        )
    }

    /// Drop the user's offset and zoom.
    pub fn reset_view(&mut self) {
        self.view.reset_overrides();
    }

    /// Lay out the current frame.
    pub fn plan(&self) -> FramePlan {
        plan(&self.store, &self.view, self.viewport, &self.config)
    }

    fn refresh_range(&mut self) {
        let report = range::recompute(&self.store, self.viewport, &self.config);
        self.view.apply_range(report);
    }
}
