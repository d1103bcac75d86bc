//! src/render/plan.rs
//!
//! Turn the sample window and view state into line segments and control
//! rectangles in viewport pixel coordinates (top-left origin).
//!
//! The window is walked in two passes over the circular buffer instead of
//! rotating it: first the older run (cursor to end), then the newer run
//! (start to cursor), each offset by its run shift so that x grows from
//! the oldest sample on the left to the newest on the right edge.

use crate::graph::config::GraphConfig;
use crate::graph::interaction::{ControlRegion, ControlRegions};
use crate::graph::store::SampleStore;
use crate::graph::view::{ActiveControl, ViewState, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Offset,
    Zoom,
}

/// A control strip to fill; `active` selects the highlight color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRect {
    pub kind: ControlKind,
    pub region: ControlRegion,
    pub active: bool,
}

/// Everything needed to draw one frame. Only valid against the view state
/// it was planned from.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub segments: Vec<Segment>,
    pub controls: [ControlRect; 2],
}

/// Plan a frame.
///
/// A segment is emitted for each pair of adjacent samples (including the
/// pair straddling the wrap seam) when both values are present; a MISSING
/// endpoint breaks the line.
pub fn plan(
    store: &SampleStore,
    view: &ViewState,
    viewport: Viewport,
    config: &GraphConfig,
) -> FramePlan {
    let baseline = config.baseline(viewport.height);
    let scale = view.scale();
    let to_y = |value: f64| {
        baseline - ((value - view.observed_min) * scale + view.vertical_offset)
    };

    let mut segments = Vec::with_capacity(store.capacity());
    let mut previous: Option<(f64, f64)> = None;
    for run in store.runs() {
        for sample in run.samples {
            let point = sample
                .value
                .map(|v| ((sample.position + run.shift) as f64, to_y(v)));
            if let (Some((x1, y1)), Some((x2, y2))) = (previous, point) {
                segments.push(Segment { x1, y1, x2, y2 });
            }
            previous = point;
        }
    }

    let regions = ControlRegions::for_viewport(viewport, config);
    FramePlan {
        segments,
        controls: [
            ControlRect {
                kind: ControlKind::Offset,
                region: regions.offset,
                active: view.active_control == ActiveControl::Offset,
            },
            ControlRect {
                kind: ControlKind::Zoom,
                region: regions.zoom,
                active: view.active_control == ActiveControl::Zoom,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::range;

    fn planned(store: &SampleStore, viewport: Viewport, cfg: &GraphConfig) -> FramePlan {
        let mut view = ViewState::new();
        view.apply_range(range::recompute(store, viewport, cfg));
        plan(store, &view, viewport, cfg)
    }

    #[test]
    fn empty_window_draws_only_controls() {
        let cfg = GraphConfig::default();
        let vp = Viewport::new(20, 40);
        let p = planned(&SampleStore::new(20), vp, &cfg);
        assert!(p.segments.is_empty());
        assert_eq!(p.controls[0].kind, ControlKind::Offset);
        assert_eq!(p.controls[1].kind, ControlKind::Zoom);
        assert!(!p.controls[0].active && !p.controls[1].active);
    }

    #[test]
    fn missing_endpoint_breaks_the_line() {
        let cfg = GraphConfig::default();
        let vp = Viewport::new(4, 40);
        let mut store = SampleStore::new(4);
        store.ingest(Some(1.0));
        store.ingest(None);
        store.ingest(Some(2.0));
        store.ingest(Some(3.0));
        let p = planned(&store, vp, &cfg);
        assert_eq!(p.segments.len(), 1);
        assert_eq!((p.segments[0].x1, p.segments[0].x2), (2.0, 3.0));
    }

    #[test]
    fn vertical_mapping_uses_min_scale_and_baseline() {
        let cfg = GraphConfig::new(20.0, 10.0);
        let vp = Viewport::new(2, 600);
        let mut store = SampleStore::new(2);
        store.ingest(Some(1.0));
        store.ingest(Some(3.0));
        let p = planned(&store, vp, &cfg);
        let s = p.segments[0];
        // min sits on the baseline, max on the top padding
        assert_eq!(s.y1, 570.0);
        assert_eq!(s.y2, 10.0);
    }

    #[test]
    fn offset_and_zoom_are_applied() {
        let cfg = GraphConfig::new(20.0, 10.0);
        let vp = Viewport::new(2, 600);
        let mut store = SampleStore::new(2);
        store.ingest(Some(1.0));
        store.ingest(Some(3.0));
        let mut view = ViewState::new();
        view.apply_range(range::recompute(&store, vp, &cfg));
        view.vertical_offset = 10.0;
        view.zoom_multiplier = 0.5;
        view.active_control = ActiveControl::Zoom;
        let p = plan(&store, &view, vp, &cfg);
        assert_eq!(p.segments[0].y1, 560.0);
        assert_eq!(p.segments[0].y2, 280.0);
        assert!(p.controls[1].active);
    }

    #[test]
    fn wrapped_window_is_monotonic_left_to_right() {
        let cfg = GraphConfig::default();
        let vp = Viewport::new(10, 80);
        let mut store = SampleStore::new(10);
        for v in 0..27 {
            store.ingest(Some((v % 5) as f64));
        }
        assert_ne!(store.cursor(), 0);
        let p = planned(&store, vp, &cfg);
        assert_eq!(p.segments.len(), 9);
        for s in &p.segments {
            assert_eq!(s.x2, s.x1 + 1.0);
        }
        for pair in p.segments.windows(2) {
            assert_eq!(pair[0].x2, pair[1].x1);
        }
        assert_eq!(p.segments[0].x1, 0.0);
        assert_eq!(p.segments[8].x2, 9.0);
    }
}
