//! Terminal capability consumed by the render sink.
//!
//! The sink composes cursor moves and colored glyphs itself (see
//! [`crate::renderer`]); a backend only has to report its size and move
//! bytes to the screen.

use crate::error::TermError;

pub trait Terminal: Send + 'static {
    /// Prepare the screen for drawing. Called once, after the size check.
    fn enter(&mut self) -> Result<(), TermError> {
        Ok(())
    }

    /// Current `(width, height)` in character cells.
    fn size(&self) -> Result<(u16, u16), TermError>;

    /// Append raw bytes to the output stream.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), TermError>;

    /// Push everything written so far to the screen.
    fn flush(&mut self) -> Result<(), TermError>;

    fn height(&self) -> Result<u16, TermError> {
        self.size().map(|(_, h)| h)
    }
}
