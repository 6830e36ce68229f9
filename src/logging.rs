//! Diagnostics logging.
//!
//! Stdout is the animation surface, so log lines only go to a file, and only
//! when `GLYPH_RAIN_LOG` names one.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

pub const LOG_PATH_ENV: &str = "GLYPH_RAIN_LOG";

pub fn init() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
