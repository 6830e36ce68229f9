//! Glyph rain (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benchmarks share one import path:
//! `glyph_rain::{core, engine, input, term, types}`.

pub use glyph_rain_core as core;
pub use glyph_rain_engine as engine;
pub use glyph_rain_input as input;
pub use glyph_rain_term as term;
pub use glyph_rain_types as types;
