//! src/render/surface.rs
//!
//! Draw capability consumed by a [`FramePlan`].

use super::plan::{ControlRect, FramePlan, Segment};

/// Anything that can draw line segments and filled rectangles in viewport
/// pixel coordinates, then flush the frame.
pub trait DrawSurface {
    fn line(&mut self, segment: &Segment);
    fn fill_rect(&mut self, rect: &ControlRect);
    fn present(&mut self);
}

impl FramePlan {
    /// Draw data segments, then the control strips, then present.
    pub fn draw_on<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for segment in &self.segments {
            surface.line(segment);
        }
        for rect in &self.controls {
            surface.fill_rect(rect);
        }
        surface.present();
    }
}
