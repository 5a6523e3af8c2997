//! # Spherebox Runtime
//!
//! Entry point for the headless frame driver. Logging honours `RUST_LOG` and
//! defaults to `info`.

use anyhow::Result;
use clap::Parser;
use spherebox::app::{self, Options};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = Options::parse();
    let summary = app::run(&options)?;
    tracing::info!(
        "Finished {} frames with {} spheres at t = {:.2}s",
        summary.frames,
        summary.spheres,
        summary.time
    );
    Ok(())
}
