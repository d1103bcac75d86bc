//! src/graph.rs
//!
//! Top-level `graph` module: sample storage, view state and the owning
//! context object.

pub mod config;
pub mod interaction;
pub mod range;
pub mod resample;
pub mod rolling;
pub mod sample;
pub mod store;
pub mod view;

/// Re-exports
pub use config::{GraphConfig, SampleUnits};
pub use interaction::{ControlRegion, ControlRegions, WheelEvent};
pub use range::RangeReport;
pub use rolling::RollingGraph;
pub use sample::Sample;
pub use store::SampleStore;
pub use view::{ActiveControl, ViewState, Viewport};
