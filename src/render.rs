//! src/render.rs
//!
//! Frame planning and the draw capability it is handed to.

pub mod plan;
pub mod surface;

pub use plan::{ControlKind, ControlRect, FramePlan, Segment, plan};
pub use surface::DrawSurface;
