//! Build the penguin collage.
//!
//! Usage: `collage [config.json]`
//!
//! Without a config file the inputs are read from the working directory
//! under their default names and the result is written to `MyCollage.jpg`.
//! Set `RUST_LOG=debug` to trace every transform.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};
use picturelab_core::collage;
use picturelab_core::config::{load_config, CollageConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => CollageConfig::default(),
    };
    info!("building collage from {}", config.assets_dir.display());

    collage::run(&config).context("collage failed")?;
    info!("wrote {}", config.output.display());
    Ok(())
}
