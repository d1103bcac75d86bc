//! src/app.rs
//!
//! Terminal rolling graph.
//!
//! Reads one numeric sample per line (stdin, a serial port, or a built-in
//! random walk) and scrolls it across a braille canvas, newest sample on
//! the right edge.
//!
//! # Running
//!
//! ```text
//! some-producer | cargo run --release
//! cargo run --release -- serial /dev/ttyACM0 --baud 115200
//! cargo run --release -- --log-file graph.log demo --rate 120
//! ```
//!
//! Keyboard and mouse are read from the controlling terminal, so stdin is
//! free to carry the data stream.
//!
//! # Controls
//!
//! - **Wheel over the bottom strip**: move the trace up/down.
//! - **Wheel over the right strip**: zoom in/out around the observed minimum.
//! - **Wheel anywhere else**: deactivate the highlighted strip.
//! - **r**: reset offset and zoom.
//! - **q** / **Esc**: quit and restore the terminal.
//!
//! # Frame cycle
//!
//! Each frame drains pending samples into the graph (full-window range
//! recompute per sample), handles terminal events, checks the canvas
//! geometry and resamples on change, then plans and draws. The graph is
//! owned by this loop alone; reader threads only talk to it through the
//! input channel.

use std::io::{self, IsTerminal};
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEvent,
    MouseEventKind,
};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use rolling_graph::input::{InputFeed, Poll, SourceKind};
use rolling_graph::{GraphConfig, RollingGraph};

use crate::cli::Cli;
use crate::panels::graph::{DOTS_PER_COLUMN, DOTS_PER_ROW, canvas_block, viewport_for};
use crate::panels::{GraphPanel, InfoPanel, ParagraphPanel, TitlePanel};
use crate::ui::{Node, group, leaf};

const TITLE: &str = "Rolling Graph";
const GRAPH_TITLE: &str = "Signal";
const HELP: &str = "Wheel on bottom strip = offset   Wheel on right strip = zoom   R = reset view   Q = quit";

/// Upper bound on samples ingested per frame so a fast source cannot starve
/// event handling.
const MAX_SAMPLES_PER_FRAME: usize = 4_096;

const ROOT_CONSTRAINTS: [Constraint; 3] = [
    Constraint::Length(3),
    Constraint::Min(6),
    Constraint::Length(3),
];
const BODY_CONSTRAINTS: [Constraint; 2] = [Constraint::Min(20), Constraint::Length(28)];

/// Canvas inner area (inside its border) for a terminal of size `area`.
fn canvas_inner(area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ROOT_CONSTRAINTS)
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(BODY_CONSTRAINTS)
        .split(rows[1]);
    canvas_block(GRAPH_TITLE).inner(cols[0])
}

/// Map a terminal cell to the viewport pixel at its center. Cells outside
/// the canvas map outside the viewport (possibly negative).
fn cell_to_pixel(inner: Rect, column: u16, row: u16) -> (f64, f64) {
    let dx = column as f64 - inner.x as f64;
    let dy = row as f64 - inner.y as f64;
    (
        dx * DOTS_PER_COLUMN as f64 + DOTS_PER_COLUMN as f64 / 2.0,
        dy * DOTS_PER_ROW as f64 + DOTS_PER_ROW as f64 / 2.0,
    )
}

fn wheel_delta(mouse: &MouseEvent) -> Option<i32> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(1),
        MouseEventKind::ScrollDown => Some(-1),
        _ => None,
    }
}

fn build_root<'a>(
    graph: &'a RollingGraph,
    plan: &'a rolling_graph::FramePlan,
    source: &'a str,
    exhausted: bool,
) -> Node<'a> {
    group(
        Direction::Vertical,
        &ROOT_CONSTRAINTS,
        vec![
            leaf(TitlePanel::new(TITLE, source)),
            group(
                Direction::Horizontal,
                &BODY_CONSTRAINTS,
                vec![
                    leaf(GraphPanel::new(plan, graph.viewport(), GRAPH_TITLE)),
                    leaf(InfoPanel::new(graph, exhausted)),
                ],
            ),
            leaf(ParagraphPanel::new(HELP, "Controls")),
        ],
    )
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.graph_config();
    let feed = InputFeed::spawn(cli.source_kind());
    let source = cli.source_label();
    if matches!(cli.source_kind(), SourceKind::Stdin) && io::stdin().is_terminal() {
        log::warn!("stdin is a terminal; pipe samples in or pick another source");
    }

    let mut terminal = ratatui::init();
    let result = crossterm::execute!(io::stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|_| main_loop(&mut terminal, feed, config, &source, cli.frame_time()));
    let released = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;
    released?;
    Ok(())
}

fn main_loop(
    terminal: &mut DefaultTerminal,
    mut feed: InputFeed,
    config: GraphConfig,
    source: &str,
    frame_time: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    let mut inner = canvas_inner(Rect::new(0, 0, size.width, size.height));
    let mut graph = RollingGraph::new(viewport_for(inner), config);
    log::info!(
        "starting with a {}x{} viewport",
        graph.viewport().width,
        graph.viewport().height
    );

    loop {
        let frame_start = Instant::now();

        for _ in 0..MAX_SAMPLES_PER_FRAME {
            match feed.poll() {
                Poll::Sample(v) => graph.ingest(Some(v)),
                Poll::Skip => {}
                Poll::Idle => break,
            }
        }

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => graph.reset_view(),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let Some(delta) = wheel_delta(&mouse) {
                        let (x, y) = cell_to_pixel(inner, mouse.column, mouse.row);
                        let control = graph.wheel(x, y, delta);
                        log::debug!("wheel {} at ({}, {}) -> {:?}", delta, x, y, control);
                    }
                }
                // geometry is re-read below every frame
                _ => {}
            }
        }

        let size = terminal.size()?;
        inner = canvas_inner(Rect::new(0, 0, size.width, size.height));
        graph.resize(viewport_for(inner))?;

        let plan = graph.plan();
        let exhausted = feed.is_exhausted();
        terminal.draw(|f| {
            let area = f.area();
            build_root(&graph, &plan, source, exhausted).draw(f, area);
        })?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
