//! Slot table - which columns are animating, and whether we are stopping.
//!
//! Both pieces of shared state live behind one lock: the scheduler reads and
//! writes the running flags, column tasks read the stop flag every tick and
//! clear their own running flag on exit.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

pub type SharedSlots = Arc<Mutex<SlotTable>>;

#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    running: HashMap<usize, bool>,
    stop: bool,
}

impl SlotTable {
    /// All given slots start idle.
    pub fn new(slots: impl IntoIterator<Item = usize>) -> Self {
        Self {
            running: slots.into_iter().map(|slot| (slot, false)).collect(),
            stop: false,
        }
    }

    pub fn shared(self) -> SharedSlots {
        Arc::new(Mutex::new(self))
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Claim an idle slot. Returns `false` if the slot is unknown, already
    /// running, or the table is stopping.
    pub fn try_start(&mut self, slot: usize) -> bool {
        if self.stop {
            return false;
        }
        match self.running.get_mut(&slot) {
            Some(running) if !*running => {
                *running = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_finished(&mut self, slot: usize) {
        if let Some(running) = self.running.get_mut(&slot) {
            *running = false;
        }
    }

    /// Snapshot of `(slot, running)` in the map's own order.
    pub fn entries(&self) -> Vec<(usize, bool)> {
        self.running.iter().map(|(&slot, &running)| (slot, running)).collect()
    }

    pub fn running_count(&self) -> usize {
        self.running.values().filter(|&&running| running).count()
    }

    pub fn any_running(&self) -> bool {
        self.running.values().any(|&running| running)
    }

    /// Raise the stop flag. It is never lowered again.
    pub fn stop(&mut self) {
        self.stop = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stop
    }
}
