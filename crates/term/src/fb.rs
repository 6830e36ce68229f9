//! Off-screen frame buffer of pending terminal writes.
//!
//! Writes are stored as encoded byte segments tagged with the row they
//! target. Flushing re-reads the terminal height and drops every segment
//! below the visible area, so a shrinking terminal never scrolls.

use crate::error::TermError;
use crate::renderer::{encode_glyph_into, encode_text_into};
use crate::terminal::Terminal;
use crate::types::Shade;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    row: u16,
    start: usize,
    end: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
    segments: Vec<Segment>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(4 * 1024),
            segments: Vec::with_capacity(64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of pending writes.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Target rows of the pending writes, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = u16> + '_ {
        self.segments.iter().map(|s| s.row)
    }

    pub fn put_glyph(&mut self, x: u16, y: u16, glyph: char, shade: Shade) -> Result<(), TermError> {
        let start = self.bytes.len();
        encode_glyph_into(&mut self.bytes, x, y, glyph, shade)?;
        self.push_segment(y, start);
        Ok(())
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<(), TermError> {
        let start = self.bytes.len();
        encode_text_into(&mut self.bytes, x, y, text)?;
        self.push_segment(y, start);
        Ok(())
    }

    /// Drop everything pending.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.segments.clear();
    }

    /// Write pending segments that fit the terminal's current height, flush,
    /// and reset the buffer. Returns the number of segments written.
    ///
    /// The buffer is reset even when the write fails.
    pub fn flush_to<T: Terminal + ?Sized>(&mut self, term: &mut T) -> Result<usize, TermError> {
        let result = self.write_visible(term);
        self.clear();
        result
    }

    fn write_visible<T: Terminal + ?Sized>(&self, term: &mut T) -> Result<usize, TermError> {
        let height = term.height()?;
        let mut written = 0;
        for seg in &self.segments {
            if seg.row == 0 || seg.row > height {
                continue;
            }
            term.write_raw(&self.bytes[seg.start..seg.end])?;
            written += 1;
        }
        term.flush()?;
        Ok(written)
    }

    fn push_segment(&mut self, row: u16, start: usize) {
        self.segments.push(Segment {
            row,
            start,
            end: self.bytes.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTerminal;
    use crate::types::Rgb;

    #[test]
    fn flush_writes_and_resets() {
        let mut fb = FrameBuffer::new();
        let mut term = MemoryTerminal::new(20, 10);
        fb.put_glyph(1, 1, 'ア', Shade::Palette(82)).unwrap();
        fb.put_glyph(1, 2, 'イ', Shade::Palette(40)).unwrap();
        assert_eq!(fb.len(), 2);

        assert_eq!(fb.flush_to(&mut term).unwrap(), 2);
        assert!(fb.is_empty());
        assert_eq!(term.cursor_moves(), vec![(1, 1), (1, 2)]);
    }

    #[test]
    fn flush_drops_rows_below_height() {
        let mut fb = FrameBuffer::new();
        let mut term = MemoryTerminal::new(20, 10);
        let shade = Shade::Rgb(Rgb::new(0, 120, 0));
        for y in 8..=12 {
            fb.put_glyph(5, y, 'ウ', shade).unwrap();
        }
        // Terminal shrank after the glyphs were queued.
        term.resize(20, 9);

        assert_eq!(fb.flush_to(&mut term).unwrap(), 2);
        let rows: Vec<u16> = term.cursor_moves().into_iter().map(|(_, y)| y).collect();
        assert_eq!(rows, vec![8, 9]);
    }

    #[test]
    fn empty_flush_still_flushes() {
        let mut fb = FrameBuffer::new();
        let mut term = MemoryTerminal::new(20, 10);
        assert_eq!(fb.flush_to(&mut term).unwrap(), 0);
        assert_eq!(term.flushes(), 1);
    }

    #[test]
    fn text_segments_are_tagged_with_their_row() {
        let mut fb = FrameBuffer::new();
        fb.put_str(1, 24, "hello").unwrap();
        fb.put_glyph(3, 2, 'エ', Shade::Palette(1)).unwrap();
        assert_eq!(fb.rows().collect::<Vec<_>>(), vec![24, 2]);
    }
}
