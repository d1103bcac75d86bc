//! src/cli.rs
//!
//! Command line options and logger setup.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use rolling_graph::GraphConfig;
use rolling_graph::graph::SampleUnits;
use rolling_graph::input::SourceKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrolling terminal graph of a numeric sample stream", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    source: Option<Source>,

    /// Thickness of the offset/zoom control strips, in braille dots
    #[arg(long, default_value_t = 8.0)]
    thickness: f64,

    /// Gap between the control strips and the canvas edges, in braille dots
    #[arg(long, default_value_t = 4.0)]
    padding: f64,

    /// Treat samples as pixel heights and rescale them when the canvas resizes
    #[arg(long)]
    pixel_units: bool,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = 50)]
    frame_ms: u64,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Source {
    /// Read one sample per line from stdin (default)
    Stdin,

    /// Read one sample per line from a serial port
    Serial {
        /// Serial device, e.g. /dev/ttyACM0
        port: String,

        #[arg(long, default_value_t = 115_200)]
        baud: u32,
    },

    /// Generate a random walk
    Demo {
        /// Samples per second
        #[arg(long, default_value_t = 60.0)]
        rate: f64,
    },
}

impl Cli {
    pub fn source_kind(&self) -> SourceKind {
        match self.source.clone().unwrap_or(Source::Stdin) {
            Source::Stdin => SourceKind::Stdin,
            Source::Serial { port, baud } => SourceKind::Serial { port, baud },
            Source::Demo { rate } => SourceKind::Demo { rate_hz: rate },
        }
    }

    /// Short human label for the title bar.
    pub fn source_label(&self) -> String {
        match self.source_kind() {
            SourceKind::Stdin => "stdin".to_string(),
            SourceKind::Serial { port, baud } => format!("{} @ {}", port, baud),
            SourceKind::Demo { rate_hz } => format!("demo {:.0} Hz", rate_hz),
        }
    }

    pub fn graph_config(&self) -> GraphConfig {
        let mut cfg = GraphConfig::new(self.thickness.max(1.0), self.padding.max(0.0));
        if self.pixel_units {
            cfg.sample_units = SampleUnits::Pixels;
        }
        cfg
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Install the logger. `RUST_LOG` filters; the default level is `warn`.
    pub fn init_logging(&self) -> Result<()> {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(path) = &self.log_file {
            builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
        }
        builder.try_init()?;
        Ok(())
    }
}
