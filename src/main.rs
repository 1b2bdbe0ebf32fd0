//! Border Blaster runner (default binary).
//!
//! Walks a 10x10 map of regions in the terminal. Uses crossterm for input and
//! a custom framebuffer-based renderer. Logs go to the file named by
//! `BORDER_BLASTER_LOG`, since stdout carries the game screen.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::info;

use border_blaster::core::WorldState;
use border_blaster::engine::{run, FrameDriver, RunConfig};
use border_blaster::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    info!("starting with {config:?}");

    let driver = FrameDriver::new(WorldState::default());

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&config, &mut term, driver));

    // Always try to restore terminal state, even when setup failed.
    let _ = term.exit();
    result
}

fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
