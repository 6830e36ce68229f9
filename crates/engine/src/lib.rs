//! Animation engine - wires columns, scheduler and render sink together.
//!
//! ```text
//!                    +-------------+
//!   keypress ------> |  Interrupt  |
//!                    +------+------+
//!                           v
//!   +-----------+  spawn  +-----------+  mpsc  +-------------+
//!   | Scheduler | ------> | ColumnTask| -----> | RenderSink  | --> terminal
//!   +-----------+   (n)   +-----------+        +-------------+
//!         \_______ SlotTable (one lock) ______/
//! ```
//!
//! [`run`] owns the whole lifecycle: it checks the size, enters the
//! terminal, draws the status line, starts the sink, runs the scheduler
//! until the interrupt fires, waits for the sink to drain, and hands the
//! terminal back. [`run_with_keys`] additionally owns the keyboard watcher.

pub mod config;
pub mod scheduler;
pub mod slots;
pub mod task;

pub use glyph_rain_core as core;
pub use glyph_rain_input as input;
pub use glyph_rain_term as term;
pub use glyph_rain_types as types;

pub use config::RainConfig;
pub use scheduler::{select_slots, Interrupt, Scheduler, SchedulerReport};
pub use slots::{SharedSlots, SlotTable};
pub use task::ColumnTask;

use anyhow::{ensure, Context, Result};
use tokio::sync::{mpsc, oneshot};
use tracing::info;

use crate::core::ColorModel;
use crate::input::{start_watcher, KeySource};
use crate::term::{RenderSink, SharedHeight, Terminal};
use crate::types::{CELL_WIDTH, INSTRUCTION_CHANNEL_CAPACITY};

/// Result of a completed run.
#[derive(Debug)]
pub struct Outcome<T> {
    pub terminal: T,
    pub slots: usize,
    pub launched: usize,
}

/// Run the animation until a key is read from `keys`.
///
/// The keyboard is checked first: if it cannot be read, this fails before
/// the terminal is entered or a single column is launched.
pub async fn run_with_keys<T: Terminal, K: KeySource>(
    config: RainConfig,
    terminal: T,
    keys: K,
) -> Result<Outcome<T>> {
    let (watcher, interrupt) = start_watcher(keys).context("keyboard input unavailable")?;
    let outcome = run(config, terminal, interrupt).await?;
    info!(
        slots = outcome.slots,
        launched = outcome.launched,
        "animation finished"
    );
    watcher.await.context("interrupt watcher failed")??;
    Ok(outcome)
}

/// Run the animation on `terminal` until `interrupt` fires.
///
/// Fails before anything is drawn if the terminal size is unknown or too
/// narrow for a single column.
pub async fn run<T: Terminal>(
    config: RainConfig,
    mut terminal: T,
    interrupt: oneshot::Receiver<()>,
) -> Result<Outcome<T>> {
    let (width, height) = terminal
        .size()
        .context("cannot determine terminal size")?;
    let available = usize::from(width / CELL_WIDTH);
    ensure!(available > 0, "terminal is too narrow ({width} columns)");
    let columns = config.columns.map_or(available, |c| c.min(available));
    info!(
        width,
        height,
        columns,
        hue = config.hue.as_str(),
        mode = ?config.mode,
        "starting"
    );
    terminal.enter().context("cannot prepare terminal")?;

    let shared_height = SharedHeight::new(height);
    let mut sink = RenderSink::new(
        terminal,
        ColorModel::new(config.hue, config.mode),
        shared_height.clone(),
    );
    sink.draw_status().context("cannot draw status line")?;

    let (tx, rx) = mpsc::channel(INSTRUCTION_CHANNEL_CAPACITY);
    let sink = tokio::spawn(sink.run(rx));

    let scheduler = Scheduler::new(&config, available, columns, shared_height, tx);
    let report = scheduler.run(Interrupt::new(interrupt)).await;

    let terminal = sink.await.context("render sink task failed")?;
    Ok(Outcome {
        terminal,
        slots: report.slots,
        launched: report.launched,
    })
}
