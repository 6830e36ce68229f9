//! Column task - drives one [`Column`] from an async task.

use tokio::sync::mpsc;
use tracing::trace;

use crate::core::{Column, ColumnParams, GlyphSource};
use crate::slots::SharedSlots;
use crate::term::SharedHeight;
use crate::types::RenderInstruction;

pub struct ColumnTask {
    column: Column,
    glyphs: GlyphSource,
    slots: SharedSlots,
    height: SharedHeight,
    tx: mpsc::Sender<RenderInstruction>,
}

impl ColumnTask {
    pub fn new(
        slot: usize,
        params: ColumnParams,
        glyphs: GlyphSource,
        slots: SharedSlots,
        height: SharedHeight,
        tx: mpsc::Sender<RenderInstruction>,
    ) -> Self {
        Self {
            column: Column::new(slot, params),
            glyphs,
            slots,
            height,
            tx,
        }
    }

    /// Tick until the trail has left the screen or the stop flag is up, then
    /// free the slot. Returns how many instructions were sent.
    ///
    /// The stop flag is only checked between ticks: a tick that drew a glyph
    /// always sends its instruction.
    pub async fn run(mut self) -> usize {
        let slot = self.column.slot();
        let speed = self.column.params().speed;
        let mut sent = 0;

        loop {
            if self.slots.lock().await.is_stopped() {
                self.column.finish();
                break;
            }
            let Some(ins) = self.column.tick(self.height.get(), &mut self.glyphs) else {
                break;
            };
            if self.tx.send(ins).await.is_err() {
                // Sink is gone; nobody will see further frames.
                self.column.finish();
                break;
            }
            sent += 1;
            tokio::time::sleep(speed).await;
        }

        self.slots.lock().await.mark_finished(slot);
        trace!(slot, sent, "column finished");
        sent
    }
}
