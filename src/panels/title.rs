//! src/panels/title.rs
//!
//! Title bar naming the graph and its input source.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel<'a> {
    pub title: &'a str,
    pub source: &'a str,
}

impl<'a> TitlePanel<'a> {
    pub fn new(title: &'a str, source: &'a str) -> Self {
        Self { title, source }
    }
}

impl crate::ui::Panel for TitlePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  <- {}", self.source)),
        ]);
        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
