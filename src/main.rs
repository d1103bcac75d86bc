//! src/main.rs
//!
//! Entrypoint: parse options, install error reporting and logging, then
//! delegate to `app::run()`.

mod app;
mod cli;
mod panels;
mod ui;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = cli::Cli::parse();
    cli.init_logging()?;
    app::run(&cli)
}
