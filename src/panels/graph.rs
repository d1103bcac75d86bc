//! src/panels/graph.rs
//!
//! Graph panel: draws a planned frame onto a braille canvas.
//!
//! One viewport pixel is one braille dot, so the canvas inner area of
//! `cols x rows` cells is a `2*cols x 4*rows` pixel viewport. The plan uses
//! a top-left origin; the canvas y axis points up, so rows are flipped.

use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Line as CanvasLine},
    },
};

use rolling_graph::Viewport;
use rolling_graph::render::{ControlRect, DrawSurface, FramePlan, Segment};

pub const DOTS_PER_COLUMN: u16 = 2;
pub const DOTS_PER_ROW: u16 = 4;

const LINE_COLOR: Color = Color::Red;
const CONTROL_COLOR: Color = Color::DarkGray;
const CONTROL_ACTIVE_COLOR: Color = Color::Green;

/// Viewport in braille dots for a canvas inner area.
pub fn viewport_for(inner: Rect) -> Viewport {
    Viewport::new(
        (inner.width * DOTS_PER_COLUMN) as usize,
        (inner.height * DOTS_PER_ROW) as usize,
    )
}

/// Block drawn around the canvas; its inner area is the viewport.
pub fn canvas_block(title: &str) -> Block<'_> {
    Block::default().title(title).borders(Borders::ALL)
}

/// Draw capability over a ratatui canvas context.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
}

impl CanvasSurface<'_, '_> {
    fn flip(&self, y: f64) -> f64 {
        self.height - 1.0 - y
    }
}

impl DrawSurface for CanvasSurface<'_, '_> {
    fn line(&mut self, segment: &Segment) {
        let line = CanvasLine {
            x1: segment.x1,
            y1: self.flip(segment.y1),
            x2: segment.x2,
            y2: self.flip(segment.y2),
            color: LINE_COLOR,
        };
        self.ctx.draw(&line);
    }

    // Canvas has no filled shape; fill with one horizontal line per dot row.
    fn fill_rect(&mut self, rect: &ControlRect) {
        let color = if rect.active {
            CONTROL_ACTIVE_COLOR
        } else {
            CONTROL_COLOR
        };
        let r = rect.region;
        let mut y = r.y;
        while y <= r.y + r.height {
            let row = self.flip(y);
            self.ctx.draw(&CanvasLine {
                x1: r.x,
                y1: row,
                x2: r.x + r.width,
                y2: row,
                color,
            });
            y += 1.0;
        }
    }

    fn present(&mut self) {
        self.ctx.layer();
    }
}

pub struct GraphPanel<'a> {
    pub plan: &'a FramePlan,
    pub viewport: Viewport,
    pub title: &'a str,
}

impl<'a> GraphPanel<'a> {
    pub fn new(plan: &'a FramePlan, viewport: Viewport, title: &'a str) -> Self {
        Self {
            plan,
            viewport,
            title,
        }
    }
}

impl crate::ui::Panel for GraphPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = canvas_block(self.title);
        let Viewport { width, height } = self.viewport;
        if width == 0 || height == 0 {
            f.render_widget(block, area);
            return;
        }

        let h = height as f64;
        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            .x_bounds([0.0, width as f64 - 1.0])
            .y_bounds([0.0, h - 1.0])
            .paint(|ctx| {
                let mut surface = CanvasSurface { ctx, height: h };
                self.plan.draw_on(&mut surface);
            });
        f.render_widget(canvas, area);
    }
}
