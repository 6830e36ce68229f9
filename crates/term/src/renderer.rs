//! CrosstermTerminal: the real terminal backend, plus the escape-sequence
//! encoders shared by every backend.
//!
//! Encoders build crossterm commands into a byte buffer without touching
//! stdout, so the render sink can assemble a whole frame off-screen and the
//! tests can inspect exactly what would be written.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::error::TermError;
use crate::terminal::Terminal;
use crate::types::Shade;

pub struct CrosstermTerminal {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Reset colors, show the cursor, clear and hand the screen back.
    pub fn exit(&mut self) -> Result<(), TermError> {
        let height = self.height().unwrap_or(1);
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().map_err(TermError::Mode)?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<(), TermError> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for CrosstermTerminal {
    /// Raw mode (so a single keypress is delivered unbuffered), clear screen,
    /// hide cursor.
    fn enter(&mut self) -> Result<(), TermError> {
        terminal::enable_raw_mode().map_err(TermError::Mode)?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    fn size(&self) -> Result<(u16, u16), TermError> {
        terminal::size().map_err(TermError::Size)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), TermError> {
        self.stdout.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TermError> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode one colored glyph at 1-based `(x, y)` into `out`.
///
/// True-color glyphs reset the color right after themselves; palette glyphs
/// leave it set, the next glyph overrides it anyway.
pub fn encode_glyph_into(
    out: &mut Vec<u8>,
    x: u16,
    y: u16,
    glyph: char,
    shade: Shade,
) -> Result<(), TermError> {
    out.queue(cursor::MoveTo(x.saturating_sub(1), y.saturating_sub(1)))?;
    out.queue(SetForegroundColor(shade_to_color(shade)))?;
    out.queue(Print(glyph))?;
    if matches!(shade, Shade::Rgb(_)) {
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// Encode plain text at 1-based `(x, y)` into `out`.
pub fn encode_text_into(out: &mut Vec<u8>, x: u16, y: u16, text: &str) -> Result<(), TermError> {
    out.queue(cursor::MoveTo(x.saturating_sub(1), y.saturating_sub(1)))?;
    out.queue(ResetColor)?;
    out.queue(Print(text))?;
    Ok(())
}

/// Encode a color reset into `out`.
pub fn encode_reset_into(out: &mut Vec<u8>) -> Result<(), TermError> {
    out.queue(ResetColor)?;
    Ok(())
}

pub fn shade_to_color(shade: Shade) -> Color {
    match shade {
        Shade::Rgb(rgb) => Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
        Shade::Palette(code) => Color::AnsiValue(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn true_color_glyph_encoding() {
        let mut out = Vec::new();
        encode_glyph_into(&mut out, 3, 5, 'ア', Shade::Rgb(Rgb::new(80, 210, 80))).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, "\x1b[5;3H\x1b[38;2;80;210;80mア\x1b[0m");
    }

    #[test]
    fn palette_glyph_encoding_keeps_color() {
        let mut out = Vec::new();
        encode_glyph_into(&mut out, 1, 1, 'ア', Shade::Palette(82)).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, "\x1b[1;1H\x1b[38;5;82mア");
    }

    #[test]
    fn shade_conversion() {
        assert_eq!(shade_to_color(Shade::Palette(255)), Color::AnsiValue(255));
        assert_eq!(
            shade_to_color(Shade::Rgb(Rgb::new(1, 2, 3))),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
