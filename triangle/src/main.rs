use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::LevelFilter;

use common::{config, debug, run};
use triangle::Triangle;

mod triangle;

/// Draws a single vertex colored triangle through a model-view-projection matrix.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file, missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    debug::set_up_logging(args.log_level)?;

    let settings: config::TriangleSettings = config::load(args.config.as_deref())?;

    run::run::<Triangle>(settings.window.attributes(), settings)
}
