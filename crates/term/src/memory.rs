//! In-memory terminal for headless runs and tests.

use crate::error::TermError;
use crate::terminal::Terminal;

#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    width: u16,
    height: u16,
    output: Vec<u8>,
    pending: Vec<u8>,
    flushes: usize,
    entered: bool,
}

impl MemoryTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            output: Vec::new(),
            pending: Vec::new(),
            flushes: 0,
            entered: false,
        }
    }

    /// Simulate a resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Everything flushed so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Whether [`Terminal::enter`] was called.
    pub fn entered(&self) -> bool {
        self.entered
    }

    /// 1-based `(x, y)` of every `ESC [ y ; x H` cursor move in the output.
    pub fn cursor_moves(&self) -> Vec<(u16, u16)> {
        let s = self.output_str();
        let mut moves = Vec::new();
        let mut rest = s.as_str();
        while let Some(start) = rest.find("\x1b[") {
            rest = &rest[start + 2..];
            let Some(end) = rest.find(|c: char| !(c.is_ascii_digit() || c == ';')) else {
                break;
            };
            if rest[end..].starts_with('H') {
                let mut parts = rest[..end].split(';');
                if let (Some(y), Some(x)) = (parts.next(), parts.next()) {
                    if let (Ok(y), Ok(x)) = (y.parse(), x.parse()) {
                        moves.push((x, y));
                    }
                }
            }
            rest = &rest[end..];
        }
        moves
    }
}

impl Terminal for MemoryTerminal {
    fn enter(&mut self) -> Result<(), TermError> {
        self.entered = true;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16), TermError> {
        Ok((self.width, self.height))
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), TermError> {
        self.pending.extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TermError> {
        self.output.append(&mut self.pending);
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unflushed_bytes_are_not_output() {
        let mut t = MemoryTerminal::new(10, 5);
        t.write_raw(b"abc").unwrap();
        assert!(t.output().is_empty());
        t.flush().unwrap();
        assert_eq!(t.output(), b"abc");
        assert_eq!(t.flushes(), 1);
    }

    #[test]
    fn cursor_moves_are_parsed() {
        let mut t = MemoryTerminal::new(10, 5);
        t.write_raw(b"\x1b[3;7Hx\x1b[38;5;2my\x1b[12;1Hz").unwrap();
        t.flush().unwrap();
        assert_eq!(t.cursor_moves(), vec![(7, 3), (1, 12)]);
    }
}
