//! Terminal error kinds.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    /// Width or height could not be determined.
    #[error("cannot determine terminal size: {0}")]
    Size(#[source] io::Error),

    /// Raw mode, screen or cursor state could not be switched.
    #[error("cannot switch terminal mode: {0}")]
    Mode(#[source] io::Error),

    /// Writing or flushing output failed.
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
}
