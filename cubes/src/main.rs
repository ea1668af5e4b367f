use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::LevelFilter;

use common::{config, debug, run};
use cubes::Cubes;

mod cubes;
mod frame_state;

/// Spins two Phong shaded cubes under a directional light.
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

    let settings: config::CubesSettings = config::load(args.config.as_deref())?;

    run::run::<Cubes>(settings.window.attributes(), settings)
}
