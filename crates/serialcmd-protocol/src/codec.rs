//! Line reading and field splitting for the command stream.
//!
//! Commands arrive as newline-terminated text. [`LineReader`] accumulates
//! raw transport bytes and yields one line at a time, enforcing the
//! protocol's line capacity by truncation: once [`MAX_LINE_LENGTH`] bytes
//! pile up with no terminator they form a complete line and the remainder
//! starts the next one, the same cut a bounded read-until makes on the
//! device side.

use bytes::{Buf, BytesMut};
use log::trace;

/// Maximum command line length in bytes, excluding the terminator.
pub const MAX_LINE_LENGTH: usize = 49;

/// Accumulates transport bytes and decodes capacity-bounded lines.
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: BytesMut,
}

impl LineReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        LineReader {
            buffer: BytesMut::with_capacity(MAX_LINE_LENGTH * 2),
        }
    }

    /// Add received bytes to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Number of buffered bytes not yet decoded.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard all buffered bytes.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Try to decode one complete line.
    ///
    /// Returns the line without its terminator, or `None` when the buffered
    /// bytes do not yet form one. A `\r` directly before the `\n` counts as
    /// part of the terminator; bytes that are not valid UTF-8 are replaced.
    pub fn decode_line(&mut self) -> Option<String> {
        // The terminator only counts within the line capacity.
        let window = self.buffer.len().min(MAX_LINE_LENGTH + 1);
        let newline = self.buffer[..window].iter().position(|&b| b == b'\n');

        match newline {
            Some(pos) => {
                let line = self.buffer.split_to(pos);
                self.buffer.advance(1);
                Some(into_line(&line))
            }
            None if self.buffer.len() > MAX_LINE_LENGTH => {
                // Capacity reached with no terminator. Cut here; the
                // remainder begins the next line.
                trace!("line exceeded {} bytes, truncating", MAX_LINE_LENGTH);
                let line = self.buffer.split_to(MAX_LINE_LENGTH);
                Some(into_line(&line))
            }
            None => None,
        }
    }
}

fn into_line(bytes: &[u8]) -> String {
    let bytes = match bytes {
        [head @ .., b'\r'] => head,
        _ => bytes,
    };
    String::from_utf8_lossy(bytes).into_owned()
}

/// Split a line into command name and raw argument field at the first
/// space. Without a space the whole line is the name and the argument
/// field is empty.
pub fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((name, raw)) => (name, raw),
        None => (line, ""),
    }
}
