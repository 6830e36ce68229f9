//! Column scheduler - keeps every slot busy until a key is pressed.
//!
//! The scheduler scans the slot table over and over. Each idle slot gets a
//! fresh column task; after every slot check it sleeps for the pacing delay.
//! The interrupt is polled before each check and raced against each sleep, so
//! a keystroke is noticed within one pacing delay.
//!
//! On interrupt it raises the stop flag, waits until every slot is idle and
//! only then drops its channel sender, which lets the render sink finish.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::config::RainConfig;
use crate::core::{ColumnParams, GlyphSource};
use crate::slots::{SharedSlots, SlotTable};
use crate::task::ColumnTask;
use crate::term::SharedHeight;
use crate::types::RenderInstruction;

/// One-shot shutdown signal as seen by the scheduler.
///
/// A dropped sender counts as fired: without a watcher there is no other
/// way to stop.
pub struct Interrupt {
    rx: oneshot::Receiver<()>,
    fired: bool,
}

impl Interrupt {
    pub fn new(rx: oneshot::Receiver<()>) -> Self {
        Self { rx, fired: false }
    }

    /// Non-blocking check.
    pub fn check(&mut self) -> bool {
        if !self.fired {
            match self.rx.try_recv() {
                Ok(()) | Err(TryRecvError::Closed) => self.fired = true,
                Err(TryRecvError::Empty) => {}
            }
        }
        self.fired
    }

    /// Sleep for `delay` unless the signal arrives first.
    pub async fn sleep_or_fire(&mut self, delay: Duration) -> bool {
        if self.fired {
            return true;
        }
        tokio::select! {
            _ = &mut self.rx => self.fired = true,
            _ = tokio::time::sleep(delay) => {}
        }
        self.fired
    }
}

/// What a finished scheduler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerReport {
    pub slots: usize,
    pub launched: usize,
}

pub struct Scheduler {
    slots: SharedSlots,
    height: SharedHeight,
    tx: mpsc::Sender<RenderInstruction>,
    rng: StdRng,
    pace: Duration,
    drain_poll: Duration,
    launched: usize,
}

impl Scheduler {
    /// Pick `columns` random slots out of `available` positions.
    pub fn new(
        config: &RainConfig,
        available: usize,
        columns: usize,
        height: SharedHeight,
        tx: mpsc::Sender<RenderInstruction>,
    ) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let chosen = select_slots(&mut rng, available, columns);
        Self {
            slots: SlotTable::new(chosen).shared(),
            height,
            tx,
            rng,
            pace: config.pace,
            drain_poll: config.drain_poll,
            launched: 0,
        }
    }

    pub fn slots(&self) -> SharedSlots {
        self.slots.clone()
    }

    pub async fn run(mut self, mut interrupt: Interrupt) -> SchedulerReport {
        let slot_count = {
            let table = self.slots.lock().await;
            if table.is_empty() {
                warn!("no column slots, waiting for interrupt");
            }
            table.len()
        };
        info!(slots = slot_count, "scheduler started");

        'scan: loop {
            let entries = self.slots.lock().await.entries();
            if entries.is_empty() && interrupt.sleep_or_fire(self.pace).await {
                break;
            }
            for (slot, running) in entries {
                if interrupt.check() {
                    break 'scan;
                }
                if !running {
                    self.launch(slot).await;
                }
                if interrupt.sleep_or_fire(self.pace).await {
                    break 'scan;
                }
            }
        }

        self.slots.lock().await.stop();
        info!(launched = self.launched, "interrupt received, draining columns");
        self.drain().await;

        // Last sender not owned by a task; the sink sees the channel close.
        drop(self.tx);
        info!("all columns idle");

        SchedulerReport {
            slots: slot_count,
            launched: self.launched,
        }
    }

    async fn launch(&mut self, slot: usize) {
        if !self.slots.lock().await.try_start(slot) {
            return;
        }
        let params = ColumnParams::roll(&mut self.rng);
        let glyphs = GlyphSource::new(self.rng.gen());
        let task = ColumnTask::new(
            slot,
            params,
            glyphs,
            self.slots.clone(),
            self.height.clone(),
            self.tx.clone(),
        );
        tokio::spawn(task.run());
        self.launched += 1;
        debug!(slot, launched = self.launched, "column launched");
    }

    async fn drain(&self) {
        loop {
            let running = self.slots.lock().await.running_count();
            if running == 0 {
                break;
            }
            debug!(running, "waiting for columns to finish");
            tokio::time::sleep(self.drain_poll).await;
        }
    }
}

/// Random subset of `0..available`, `columns` long, in random order.
pub fn select_slots<R: Rng + ?Sized>(rng: &mut R, available: usize, columns: usize) -> Vec<usize> {
    let mut slots: Vec<usize> = (0..available).collect();
    slots.shuffle(rng);
    slots.truncate(columns);
    slots
}
