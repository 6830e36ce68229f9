//! Render sink - the single consumer of render instructions.
//!
//! Column tasks never touch the terminal. They send [`RenderInstruction`]s
//! over one channel and the sink turns each of them into colored glyph
//! writes, flushing after every instruction so frames from different columns
//! never interleave inside one escape sequence.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::core::ColorModel;
use crate::error::TermError;
use crate::fb::FrameBuffer;
use crate::renderer::encode_reset_into;
use crate::terminal::Terminal;
use crate::types::{RenderInstruction, STATUS_LINE};

/// Last known terminal height, published by the sink on every flush and read
/// by column tasks to bound their fall.
#[derive(Debug, Clone)]
pub struct SharedHeight(Arc<AtomicU16>);

impl SharedHeight {
    pub fn new(height: u16) -> Self {
        Self(Arc::new(AtomicU16::new(height)))
    }

    pub fn get(&self) -> u16 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, height: u16) {
        self.0.store(height, Ordering::Relaxed);
    }
}

pub struct RenderSink<T> {
    terminal: T,
    frame: FrameBuffer,
    colors: ColorModel,
    height: SharedHeight,
    rendered: usize,
}

impl<T: Terminal> RenderSink<T> {
    pub fn new(terminal: T, colors: ColorModel, height: SharedHeight) -> Self {
        Self {
            terminal,
            frame: FrameBuffer::new(),
            colors,
            height,
            rendered: 0,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Instructions processed so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Draw the "press any key" hint on the bottom row.
    pub fn draw_status(&mut self) -> Result<(), TermError> {
        let height = self.refresh_height()?;
        self.frame.put_str(1, height, STATUS_LINE)?;
        self.frame.flush_to(&mut self.terminal)?;
        Ok(())
    }

    /// Render one instruction and flush it. Returns the glyphs written.
    ///
    /// Glyph rows are kept in `1..height`; the bottom row belongs to the
    /// status line.
    pub fn render(&mut self, ins: &RenderInstruction) -> Result<usize, TermError> {
        self.rendered += 1;
        let height = self.refresh_height()?;
        let factor = self.colors.color_factor(ins.trail_length);

        for (position, &glyph) in ins.trail.iter().enumerate() {
            let Some(row) = ins.row_of(position) else {
                // Everything further back is above the screen too.
                break;
            };
            if row >= height {
                continue;
            }
            let shade = self.colors.color_at(position, factor);
            self.frame.put_glyph(ins.column, row, glyph, shade)?;
        }

        self.frame.flush_to(&mut self.terminal)
    }

    /// Write a trailing color reset.
    pub fn finish(&mut self) -> Result<(), TermError> {
        let mut out = Vec::new();
        encode_reset_into(&mut out)?;
        self.terminal.write_raw(&out)?;
        self.terminal.flush()
    }

    /// Consume instructions until every sender is gone, then hand the
    /// terminal back.
    ///
    /// Write failures are logged and skipped.
    pub async fn run(mut self, mut rx: mpsc::Receiver<RenderInstruction>) -> T {
        while let Some(ins) = rx.recv().await {
            if let Err(e) = self.render(&ins) {
                warn!(column = ins.column, row = ins.row, "render failed: {e}");
            }
        }
        if let Err(e) = self.finish() {
            warn!("color reset failed: {e}");
        }
        debug!(instructions = self.rendered, "render sink drained");
        self.terminal
    }

    fn refresh_height(&mut self) -> Result<u16, TermError> {
        let height = self.terminal.height()?;
        self.height.set(height);
        Ok(height)
    }
}
