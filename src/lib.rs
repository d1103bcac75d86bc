//! src/lib.rs
//!
//! Core of the rolling graph: the sliding sample window, range tracking,
//! wheel interaction, resize resampling and the render planner.
//!
//! The terminal front end lives in the binary; everything here is
//! independent of any drawing API.

pub mod error;
pub mod graph;
pub mod input;
pub mod render;

pub use error::{GraphError, InputError};
pub use graph::{GraphConfig, RollingGraph, SampleStore, Viewport};
pub use render::{DrawSurface, FramePlan};
