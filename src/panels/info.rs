//! src/panels/info.rs
//!
//! Info panel: observed range, scale, user overrides and input status.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use rolling_graph::RollingGraph;
use rolling_graph::graph::ActiveControl;

pub struct InfoPanel<'a> {
    pub graph: &'a RollingGraph,
    pub source_exhausted: bool,
}

impl<'a> InfoPanel<'a> {
    pub fn new(graph: &'a RollingGraph, source_exhausted: bool) -> Self {
        Self {
            graph,
            source_exhausted,
        }
    }
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<8}", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

impl crate::ui::Panel for InfoPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self.graph.view();
        let viewport = self.graph.viewport();

        let active = match view.active_control {
            ActiveControl::None => "-",
            ActiveControl::Offset => "offset",
            ActiveControl::Zoom => "zoom",
        };
        let last = self
            .graph
            .store()
            .newest()
            .and_then(|s| s.value)
            .map(|v| format!("{:.3}", v))
            .unwrap_or_else(|| "-".to_string());
        let input = if self.source_exhausted {
            Span::styled("exhausted", Style::default().fg(Color::Red))
        } else {
            Span::styled("live", Style::default().fg(Color::Green))
        };

        let lines = vec![
            row("min", format!("{:.3}", view.observed_min)),
            row("max", format!("{:.3}", view.observed_max)),
            row("last", last),
            row("scale", format!("{:.4}", view.base_scale)),
            row("zoom", format!("x{:.3}", view.zoom_multiplier)),
            row("offset", format!("{:+.0}", view.vertical_offset)),
            row("control", active.to_string()),
            row(
                "window",
                format!("{} x {}", viewport.width, viewport.height),
            ),
            Line::from(vec![
                Span::styled(
                    format!("{:<8}", "input"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                input,
            ]),
        ];

        let mut block = Block::default().title("Info").borders(Borders::ALL);
        if view.active_control != ActiveControl::None {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
