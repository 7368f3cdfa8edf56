//! File-based tracing setup
//!
//! stdout belongs to the terminal UI, so log lines go to
//! `$HOME/.build-a-board/board.log` instead of the console.

use crate::config::Config;
use anyhow::{anyhow, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Returns `Ok(false)` when no log file could be opened; the app then runs
/// without logging rather than failing.
pub fn init(config: &Config) -> Result<bool> {
    let Some(dir) = Config::config_dir() else {
        return Ok(false);
    };
    if fs::create_dir_all(&dir).is_err() {
        return Ok(false);
    }
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("board.log"))
    {
        Ok(file) => file,
        Err(_) => return Ok(false),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    Ok(true)
}
