//! src/graph/interaction.rs
//!
//! Control strips and the wheel-driven offset/zoom state machine.

use super::config::GraphConfig;
use super::view::{ActiveControl, ViewState, Viewport};

/// Axis-aligned rectangle in viewport pixels (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ControlRegion {
    /// Inclusive on every edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// The two hit-test strips for a viewport: offset along the bottom edge,
/// zoom along the right edge above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRegions {
    pub offset: ControlRegion,
    pub zoom: ControlRegion,
}

impl ControlRegions {
    pub fn for_viewport(viewport: Viewport, config: &GraphConfig) -> Self {
        let w = viewport.width as f64;
        let h = viewport.height as f64;
        let t = config.control_thickness;
        let pad = config.edge_padding;
        Self {
            offset: ControlRegion {
                x: pad,
                y: h - t - pad,
                width: (w - 2.0 * pad).max(0.0),
                height: t,
            },
            zoom: ControlRegion {
                x: w - t - pad,
                y: pad,
                width: t,
                height: (h - t - 3.0 * pad).max(0.0),
            },
        }
    }

    /// Which strip `(x, y)` hits. The offset strip wins where both overlap.
    pub fn hit(&self, x: f64, y: f64) -> ActiveControl {
        if self.offset.contains(x, y) {
            ActiveControl::Offset
        } else if self.zoom.contains(x, y) {
            ActiveControl::Zoom
        } else {
            ActiveControl::None
        }
    }
}

/// A wheel notch at pointer `(x, y)`; only the sign of `delta` matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub x: f64,
    pub y: f64,
    pub delta: i32,
}

/// Apply a wheel event to `view` and return the resulting active control.
///
/// Over the offset strip the vertical offset moves by `offset_step`; over
/// the zoom strip the zoom multiplier is multiplied or divided by
/// `zoom_step`. Anywhere else only `active_control` changes, to `None`.
pub fn handle_wheel(
    view: &mut ViewState,
    regions: &ControlRegions,
    event: WheelEvent,
    config: &GraphConfig,
) -> ActiveControl {
    let control = regions.hit(event.x, event.y);
    match control {
        ActiveControl::Offset => {
            if event.delta > 0 {
                view.vertical_offset += config.offset_step;
            } else if event.delta < 0 {
                view.vertical_offset -= config.offset_step;
            }
        }
        ActiveControl::Zoom => {
            if event.delta > 0 {
                view.zoom_multiplier *= config.zoom_step;
            } else if event.delta < 0 {
                view.zoom_multiplier /= config.zoom_step;
            }
        }
        ActiveControl::None => {}
    }
    view.active_control = control;
    control
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ViewState, ControlRegions, GraphConfig) {
        let cfg = GraphConfig::new(20.0, 10.0);
        let regions = ControlRegions::for_viewport(Viewport::new(800, 600), &cfg);
        (ViewState::new(), regions, cfg)
    }

    #[test]
    fn regions_match_viewport_edges() {
        let (_, regions, _) = setup();
        assert_eq!(
            regions.offset,
            ControlRegion {
                x: 10.0,
                y: 570.0,
                width: 780.0,
                height: 20.0
            }
        );
        assert_eq!(
            regions.zoom,
            ControlRegion {
                x: 770.0,
                y: 10.0,
                width: 20.0,
                height: 550.0
            }
        );
    }

    #[test]
    fn wheel_over_offset_strip_moves_offset() {
        let (mut view, regions, cfg) = setup();
        let ev = |delta| WheelEvent {
            x: 400.0,
            y: 580.0,
            delta,
        };
        assert_eq!(handle_wheel(&mut view, &regions, ev(1), &cfg), ActiveControl::Offset);
        handle_wheel(&mut view, &regions, ev(3), &cfg);
        assert_eq!(view.vertical_offset, 20.0);
        handle_wheel(&mut view, &regions, ev(-1), &cfg);
        assert_eq!(view.vertical_offset, 10.0);
        assert_eq!(view.zoom_multiplier, 1.0);
    }

    #[test]
    fn wheel_over_zoom_strip_scales_zoom() {
        let (mut view, regions, cfg) = setup();
        let ev = |delta| WheelEvent {
            x: 780.0,
            y: 300.0,
            delta,
        };
        handle_wheel(&mut view, &regions, ev(1), &cfg);
        assert!((view.zoom_multiplier - 1.1).abs() < 1e-12);
        handle_wheel(&mut view, &regions, ev(-1), &cfg);
        handle_wheel(&mut view, &regions, ev(-1), &cfg);
        assert!((view.zoom_multiplier - 1.0 / 1.1).abs() < 1e-12);
        assert_eq!(view.active_control, ActiveControl::Zoom);
        assert_eq!(view.vertical_offset, 0.0);
    }

    #[test]
    fn wheel_outside_regions_only_resets_active_control() {
        let (mut view, regions, cfg) = setup();
        view.vertical_offset = 30.0;
        view.zoom_multiplier = 2.0;
        view.active_control = ActiveControl::Zoom;
        let control = handle_wheel(
            &mut view,
            &regions,
            WheelEvent {
                x: 200.0,
                y: 200.0,
                delta: 1,
            },
            &cfg,
        );
        assert_eq!(control, ActiveControl::None);
        assert_eq!(view.vertical_offset, 30.0);
        assert_eq!(view.zoom_multiplier, 2.0);
        assert_eq!(view.active_control, ActiveControl::None);
    }

    #[test]
    fn zero_delta_activates_without_change() {
        let (mut view, regions, cfg) = setup();
        handle_wheel(
            &mut view,
            &regions,
            WheelEvent {
                x: 400.0,
                y: 575.0,
                delta: 0,
            },
            &cfg,
        );
        assert_eq!(view.active_control, ActiveControl::Offset);
        assert_eq!(view.vertical_offset, 0.0);
    }
}
