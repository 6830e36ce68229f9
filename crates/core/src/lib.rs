//! Core animation logic - pure, deterministic, and testable
//!
//! This crate holds everything about the falling-glyph effect that does not
//! touch the terminal or the async runtime:
//!
//! - [`color`]: hue scales and the fade-position to shade mapping
//! - [`glyphs`]: random glyph source over a fixed double-width symbol table
//! - [`column`]: the per-column `Running -> Finished` state machine
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use glyph_rain_core::{Column, ColumnParams, ColorModel, GlyphSource};
//! use glyph_rain_types::{ColorMode, Hue, Shade, Rgb};
//!
//! let mut glyphs = GlyphSource::new(12345);
//! let mut column = Column::new(3, ColumnParams::new(Duration::from_millis(50), 5));
//!
//! let frame = column.tick(24, &mut glyphs).unwrap();
//! assert_eq!(frame.row, 1);
//! assert_eq!(frame.column, 7);
//!
//! let colors = ColorModel::new(Hue::Green, ColorMode::TrueColor);
//! let factor = colors.color_factor(frame.trail_length);
//! assert_eq!(colors.color_at(0, factor), Shade::Rgb(Rgb::new(255, 255, 255)));
//! ```

pub mod color;
pub mod column;
pub mod glyphs;

pub use glyph_rain_types as types;

pub use color::{color_factor, ColorModel, ColorScale};
pub use column::{Column, ColumnParams, ColumnState};
pub use glyphs::{GlyphSource, GLYPHS};
