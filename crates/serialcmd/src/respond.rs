//! Response formatting and emission.
//!
//! Every dispatch outcome answers with at most one line per source, and
//! every line is bounded: [`Responder`] renders format arguments into a
//! capped buffer, cutting overlong output at the last whole character that
//! fits, then writes the result through the transport with the protocol
//! line ending.

use std::fmt::{self, Write as _};

use log::debug;

use crate::transport::Transport;

/// Maximum rendered response length in bytes, excluding the line ending.
pub const MAX_RESPONSE_LENGTH: usize = 100;

/// Terminator appended to every response line.
pub const LINE_ENDING: &str = "\r\n";

/// Render buffer capped at [`MAX_RESPONSE_LENGTH`]; overflow is dropped,
/// never grown into.
struct BoundedBuf {
    text: String,
    truncated: bool,
}

impl BoundedBuf {
    fn new() -> Self {
        BoundedBuf {
            text: String::with_capacity(MAX_RESPONSE_LENGTH),
            truncated: false,
        }
    }
}

impl fmt::Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for ch in s.chars() {
            if self.text.len() + ch.len_utf8() > MAX_RESPONSE_LENGTH {
                self.truncated = true;
                return Ok(());
            }
            self.text.push(ch);
        }
        Ok(())
    }
}

/// Writes response lines through a borrowed transport.
///
/// Handlers receive one per dispatch as their last argument and may emit
/// any number of lines through it.
pub struct Responder<'a> {
    port: &'a mut dyn Transport,
}

impl<'a> Responder<'a> {
    /// Wrap a transport for one dispatch.
    pub fn new(port: &'a mut dyn Transport) -> Self {
        Responder { port }
    }

    /// Render format arguments and emit them as one bounded response line.
    pub fn respond_fmt(&mut self, args: fmt::Arguments<'_>) {
        let mut buf = BoundedBuf::new();
        // BoundedBuf swallows overflow instead of erroring.
        let _ = buf.write_fmt(args);
        if buf.truncated {
            debug!("response truncated to {} bytes", MAX_RESPONSE_LENGTH);
        }
        self.port.write(buf.text.as_bytes());
        self.port.write(LINE_ENDING.as_bytes());
    }

    /// Emit fixed text as one bounded response line.
    pub fn respond(&mut self, text: &str) {
        self.respond_fmt(format_args!("{}", text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    #[test]
    fn test_respond_appends_line_ending() {
        let mut port = MemoryTransport::new();
        Responder::new(&mut port).respond("OK");
        assert_eq!(port.take_output(), b"OK\r\n");
    }

    #[test]
    fn test_respond_fmt_renders_arguments() {
        let mut port = MemoryTransport::new();
        Responder::new(&mut port).respond_fmt(format_args!("Sum: {} + {} = {}", 5, 3, 8));
        assert_eq!(port.take_output(), b"Sum: 5 + 3 = 8\r\n");
    }

    #[test]
    fn test_overlong_response_is_cut_at_capacity() {
        let mut port = MemoryTransport::new();
        let long = "a".repeat(MAX_RESPONSE_LENGTH + 30);
        Responder::new(&mut port).respond(&long);

        let expected = format!("{}{}", "a".repeat(MAX_RESPONSE_LENGTH), LINE_ENDING);
        assert_eq!(port.take_output(), expected.as_bytes());
    }

    #[test]
    fn test_truncation_respects_character_boundaries() {
        let mut port = MemoryTransport::new();
        // 99 single-byte characters, then a two-byte character that would
        // straddle the cap.
        let text = format!("{}é!", "a".repeat(MAX_RESPONSE_LENGTH - 1));
        Responder::new(&mut port).respond(&text);

        let expected = format!("{}{}", "a".repeat(MAX_RESPONSE_LENGTH - 1), LINE_ENDING);
        assert_eq!(port.take_output(), expected.as_bytes());
    }

    #[test]
    fn test_multiple_lines_accumulate() {
        let mut port = MemoryTransport::new();
        let mut responder = Responder::new(&mut port);
        responder.respond("first");
        responder.respond("second");
        assert_eq!(port.take_output(), b"first\r\nsecond\r\n");
    }
}
