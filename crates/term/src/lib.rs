//! Terminal rendering layer.
//!
//! Column tasks produce [`types::RenderInstruction`]s; this crate turns them
//! into terminal output. Nothing here knows about scheduling.
//!
//! - [`terminal`]: the narrow capability the sink writes through
//! - [`renderer`]: crossterm backend and escape-sequence encoders
//! - [`memory`]: headless backend for tests
//! - [`fb`]: off-screen buffer of row-tagged writes, clipped on flush
//! - [`sink`]: the single consumer of the instruction channel

pub mod error;
pub mod fb;
pub mod memory;
pub mod renderer;
pub mod sink;
pub mod terminal;

pub use glyph_rain_core as core;
pub use glyph_rain_types as types;

pub use error::TermError;
pub use fb::FrameBuffer;
pub use memory::MemoryTerminal;
pub use renderer::{encode_glyph_into, encode_reset_into, encode_text_into, CrosstermTerminal};
pub use sink::{RenderSink, SharedHeight};
pub use terminal::Terminal;
