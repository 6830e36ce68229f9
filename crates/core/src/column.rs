//! Column - state machine of one falling stream
//!
//! A column is created `Running` on a slot, advances one row per tick and
//! finishes once its whole trail has scrolled past the bottom of the screen:
//!
//! ```text
//! new() --> Running --tick past height + trail_length - 1--> Finished
//!              |                                               ^
//!              +-------------------- finish() -----------------+
//! ```
//!
//! The column itself does no I/O and never sleeps. The engine drives it
//! from an async task, checks the stop flag between ticks and forwards the
//! produced [`RenderInstruction`]s to the render sink.

use std::time::Duration;

use rand::Rng;

use crate::glyphs::GlyphSource;
use crate::types::{
    slot_x, RenderInstruction, Trail, MAX_TRAIL_LENGTH, SPEED_BASE_MS, SPEED_JITTER_MS,
    TRAIL_JITTER, TRAIL_MIN,
};

/// Lifecycle of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    Running,
    Finished,
}

/// Per-task parameters, rolled once when the task is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnParams {
    /// Delay between two ticks
    pub speed: Duration,
    /// Maximum number of glyphs kept in the trail
    pub trail_length: usize,
}

impl ColumnParams {
    /// Trail length is clamped to `1..=MAX_TRAIL_LENGTH`.
    pub fn new(speed: Duration, trail_length: usize) -> Self {
        Self {
            speed,
            trail_length: trail_length.clamp(1, MAX_TRAIL_LENGTH),
        }
    }

    /// Random speed in `[10, 210)` ms and trail length in `[5, 55)`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let speed = Duration::from_millis(SPEED_BASE_MS + rng.gen_range(0..SPEED_JITTER_MS));
        let trail_length = TRAIL_MIN + rng.gen_range(0..TRAIL_JITTER);
        Self::new(speed, trail_length)
    }
}

/// One falling stream on one slot.
#[derive(Debug, Clone)]
pub struct Column {
    slot: usize,
    x: u16,
    row: u16,
    params: ColumnParams,
    trail: Trail,
    state: ColumnState,
}

impl Column {
    /// Start a column on `slot`. The first tick draws row 1.
    pub fn new(slot: usize, params: ColumnParams) -> Self {
        Self {
            slot,
            x: slot_x(slot),
            row: 0,
            params,
            trail: Trail::new(),
            state: ColumnState::Running,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    /// Row of the head after the last tick (0 before the first tick).
    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn params(&self) -> ColumnParams {
        self.params
    }

    pub fn trail(&self) -> &[char] {
        &self.trail
    }

    pub fn state(&self) -> ColumnState {
        self.state
    }

    /// Last row the head reaches for a screen of `height` rows.
    pub fn last_row(&self, height: u16) -> u32 {
        u32::from(height) + self.params.trail_length as u32 - 1
    }

    /// Advance one row and emit the frame for it.
    ///
    /// Returns `None` (and moves to `Finished`) once the head would pass
    /// [`Column::last_row`]. No glyph is drawn in that case.
    pub fn tick(&mut self, height: u16, glyphs: &mut GlyphSource) -> Option<RenderInstruction> {
        if self.state != ColumnState::Running {
            return None;
        }
        let next = u32::from(self.row) + 1;
        if next > self.last_row(height) || next > u32::from(u16::MAX) {
            self.state = ColumnState::Finished;
            return None;
        }
        self.row = next as u16;

        if self.trail.len() >= self.params.trail_length {
            self.trail.truncate(self.params.trail_length - 1);
        }
        self.trail.insert(0, glyphs.next_glyph());

        Some(RenderInstruction {
            column: self.x,
            row: self.row,
            trail: self.trail.clone(),
            trail_length: self.params.trail_length,
        })
    }

    /// Stop early (stop flag observed). Idempotent.
    pub fn finish(&mut self) {
        self.state = ColumnState::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn column(trail_length: usize) -> Column {
        Column::new(0, ColumnParams::new(Duration::from_millis(10), trail_length))
    }

    #[test]
    fn test_trail_grows_then_caps() {
        let mut glyphs = GlyphSource::new(1);
        let mut col = column(5);

        let mut last = None;
        for _ in 0..3 {
            last = col.tick(24, &mut glyphs);
        }
        let ins = last.take().unwrap();
        assert_eq!(ins.trail.len(), 3);
        assert_eq!(ins.row, 3);

        let before = ins.trail.clone();
        for _ in 0..3 {
            last = col.tick(24, &mut glyphs);
        }
        let ins = last.unwrap();
        assert_eq!(ins.trail.len(), 5);
        assert_eq!(ins.row, 6);
        // The three glyphs from tick 1..=3 are now at positions 3, 4 and dropped.
        assert_eq!(ins.trail[3], before[0]);
        assert_eq!(ins.trail[4], before[1]);
    }

    #[test]
    fn test_head_is_newest_glyph() {
        let mut reference = GlyphSource::new(42);
        let mut glyphs = GlyphSource::new(42);
        let mut col = column(4);

        for _ in 0..10 {
            let expected = reference.next_glyph();
            let ins = col.tick(30, &mut glyphs).unwrap();
            assert_eq!(ins.trail[0], expected);
            assert!(ins.trail.len() <= 4);
        }
    }

    #[test]
    fn test_rows_increase_by_one_until_last_row() {
        let mut glyphs = GlyphSource::new(3);
        let mut col = column(5);

        let mut rows = Vec::new();
        while let Some(ins) = col.tick(24, &mut glyphs) {
            rows.push(ins.row);
        }
        assert_eq!(rows.first(), Some(&1));
        assert_eq!(rows.last(), Some(&(24 + 5 - 1)));
        assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(col.state(), ColumnState::Finished);
        assert_eq!(col.tick(24, &mut glyphs), None);
    }

    #[test]
    fn test_finish_stops_ticking() {
        let mut glyphs = GlyphSource::new(3);
        let mut col = column(5);
        assert!(col.tick(24, &mut glyphs).is_some());
        col.finish();
        assert_eq!(col.state(), ColumnState::Finished);
        assert!(col.tick(24, &mut glyphs).is_none());
        assert_eq!(col.row(), 1);
    }

    #[test]
    fn test_single_glyph_trail() {
        let mut glyphs = GlyphSource::new(8);
        let mut col = column(1);
        for _ in 0..5 {
            assert_eq!(col.tick(10, &mut glyphs).unwrap().trail.len(), 1);
        }
    }

    #[test]
    fn test_x_follows_slot() {
        let col = Column::new(7, ColumnParams::new(Duration::ZERO, 5));
        assert_eq!(col.x(), 15);
        assert_eq!(col.slot(), 7);
        assert_eq!(col.state(), ColumnState::Running);
    }

    #[test]
    fn test_rolled_params_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let p = ColumnParams::roll(&mut rng);
            assert!(p.speed >= Duration::from_millis(10));
            assert!(p.speed < Duration::from_millis(210));
            assert!((5..55).contains(&p.trail_length));
        }
    }

    #[test]
    fn test_params_clamp_trail_length() {
        assert_eq!(ColumnParams::new(Duration::ZERO, 0).trail_length, 1);
        assert_eq!(
            ColumnParams::new(Duration::ZERO, 1000).trail_length,
            MAX_TRAIL_LENGTH
        );
    }
}
