//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types passed between the column tasks,
//! the scheduler and the render sink. Everything here is plain data with no
//! I/O, so it can be used from any task without synchronization.
//!
//! # Coordinates
//!
//! Rows and columns are **1-based** terminal coordinates:
//!
//! - Row 1 is the top line of the terminal
//! - Column slot `i` is drawn at terminal column `1 + 2*i`, because every
//!   glyph in the symbol table is a double-width character
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPEED_BASE_MS` | 10 | Minimum per-tick delay of a column |
//! | `SPEED_JITTER_MS` | 200 | Random extra delay range `[0, 200)` |
//! | `SCHEDULER_PACE_MS` | 100 | Delay between scheduler slot checks |
//! | `DRAIN_POLL_MS` | 200 | Poll interval while waiting for all slots to go idle |
//!
//! # Examples
//!
//! ```
//! use glyph_rain_types::{Hue, ColorMode};
//!
//! // Parse a hue (case-insensitive), unknown names fall back to green
//! assert_eq!(Hue::parse_or_default("RED"), Hue::Red);
//! assert_eq!(Hue::parse_or_default("magenta"), Hue::Green);
//!
//! // Color mode comes from the terminal's advertised capabilities
//! assert_eq!(ColorMode::from_colorterm(Some("truecolor")), ColorMode::TrueColor);
//! assert_eq!(ColorMode::from_colorterm(None), ColorMode::Palette);
//! ```

use arrayvec::ArrayVec;

/// Minimum per-tick delay of a column (10ms)
pub const SPEED_BASE_MS: u64 = 10;

/// Random extra per-tick delay, drawn from `[0, SPEED_JITTER_MS)`
pub const SPEED_JITTER_MS: u64 = 200;

/// Shortest configured trail length (5 glyphs)
pub const TRAIL_MIN: usize = 5;

/// Random extra trail length, drawn from `[0, TRAIL_JITTER)`
pub const TRAIL_JITTER: usize = 50;

/// Hard capacity of a trail; configured trail lengths are clamped to this
pub const MAX_TRAIL_LENGTH: usize = 64;

/// Delay between two scheduler slot checks (100ms)
pub const SCHEDULER_PACE_MS: u64 = 100;

/// Poll interval while draining in-flight columns on shutdown (200ms)
pub const DRAIN_POLL_MS: u64 = 200;

/// Bound of the render instruction channel
pub const INSTRUCTION_CHANNEL_CAPACITY: usize = 64;

/// Terminal columns occupied by one glyph cell
pub const CELL_WIDTH: u16 = 2;

/// Text drawn on the bottom line while the animation runs
pub const STATUS_LINE: &str = "Press any key to stop";

/// Newest-first sequence of glyphs in one falling stream.
pub type Trail = ArrayVec<char, MAX_TRAIL_LENGTH>;

/// Named color family used for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hue {
    #[default]
    Green,
    Red,
    Blue,
    Yellow,
}

impl Hue {
    /// Every supported hue, in display order.
    pub const ALL: [Hue; 4] = [Hue::Green, Hue::Red, Hue::Blue, Hue::Yellow];

    /// Parse hue from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use glyph_rain_types::Hue;
    ///
    /// assert_eq!(Hue::from_str("blue"), Some(Hue::Blue));
    /// assert_eq!(Hue::from_str("Yellow"), Some(Hue::Yellow));
    /// assert_eq!(Hue::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "green" => Some(Hue::Green),
            "red" => Some(Hue::Red),
            "blue" => Some(Hue::Blue),
            "yellow" => Some(Hue::Yellow),
            _ => None,
        }
    }

    /// Parse hue, falling back to [`Hue::Green`] for anything unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hue::Green => "green",
            Hue::Red => "red",
            Hue::Blue => "blue",
            Hue::Yellow => "yellow",
        }
    }
}

/// How colors are expressed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 24-bit `ESC[38;2;r;g;bm` colors
    TrueColor,
    /// xterm-256 palette indices `ESC[38;5;nm`
    Palette,
}

impl ColorMode {
    /// Pick the mode from a `COLORTERM` value.
    pub fn from_colorterm(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "truecolor" || v == "24bit" => ColorMode::TrueColor,
            _ => ColorMode::Palette,
        }
    }

    /// Pick the mode from the process environment.
    pub fn detect() -> Self {
        Self::from_colorterm(std::env::var("COLORTERM").ok().as_deref())
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A displayable color picked from a color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Rgb(Rgb),
    Palette(u8),
}

/// One frame of one column: where the head is and what the trail looks like.
///
/// `trail[0]` is the newest glyph (the bright head); later entries are older
/// glyphs drawn one row further up each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    pub column: u16,
    pub row: u16,
    pub trail: Trail,
    pub trail_length: usize,
}

impl RenderInstruction {
    /// Row that the glyph at `position` lands on, or `None` above the screen.
    pub fn row_of(&self, position: usize) -> Option<u16> {
        let row = i64::from(self.row) - position as i64;
        if row >= 1 {
            u16::try_from(row).ok()
        } else {
            None
        }
    }
}

/// Terminal column of the left edge of a slot.
pub fn slot_x(slot: usize) -> u16 {
    let x = 1 + slot.saturating_mul(CELL_WIDTH as usize);
    u16::try_from(x).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(SPEED_BASE_MS, 10);
        assert_eq!(SPEED_JITTER_MS, 200);
        assert_eq!(SCHEDULER_PACE_MS, 100);
        assert_eq!(DRAIN_POLL_MS, 200);
        assert!(TRAIL_MIN + TRAIL_JITTER <= MAX_TRAIL_LENGTH);
    }

    #[test]
    fn hue_round_trips_through_name() {
        for hue in Hue::ALL {
            assert_eq!(Hue::from_str(hue.as_str()), Some(hue));
        }
    }

    #[test]
    fn unknown_hue_falls_back_to_green() {
        assert_eq!(Hue::parse_or_default(""), Hue::Green);
        assert_eq!(Hue::parse_or_default("cyan"), Hue::Green);
        assert_eq!(Hue::parse_or_default(" BLUE "), Hue::Blue);
    }

    #[test]
    fn colorterm_detection() {
        assert_eq!(ColorMode::from_colorterm(Some("24bit")), ColorMode::TrueColor);
        assert_eq!(ColorMode::from_colorterm(Some("TrueColor")), ColorMode::TrueColor);
        assert_eq!(ColorMode::from_colorterm(Some("256color")), ColorMode::Palette);
        assert_eq!(ColorMode::from_colorterm(None), ColorMode::Palette);
    }

    #[test]
    fn slot_positions_are_two_columns_apart() {
        assert_eq!(slot_x(0), 1);
        assert_eq!(slot_x(1), 3);
        assert_eq!(slot_x(39), 79);
    }

    #[test]
    fn row_of_skips_positions_above_the_screen() {
        let mut trail = Trail::new();
        trail.extend(['a', 'b', 'c']);
        let ins = RenderInstruction {
            column: 1,
            row: 2,
            trail,
            trail_length: 5,
        };
        assert_eq!(ins.row_of(0), Some(2));
        assert_eq!(ins.row_of(1), Some(1));
        assert_eq!(ins.row_of(2), None);
    }
}
