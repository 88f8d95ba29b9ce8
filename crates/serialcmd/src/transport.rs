//! Byte-stream transport abstraction.
//!
//! The engine talks to the outside world through [`Transport`], a polled
//! non-blocking byte stream in the shape of a device UART. Reads happen
//! only after `available` reports pending bytes, so the engine never waits
//! on the line.

use std::collections::VecDeque;

/// A polled byte stream the engine reads commands from and writes
/// responses to.
pub trait Transport {
    /// Number of bytes ready to read without blocking.
    fn available(&self) -> usize;

    /// Copy up to `buf.len()` pending bytes into `buf`, returning how many
    /// were copied. May return fewer than `available` reported.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Write raw bytes to the output side. Delivery is the transport's
    /// concern; the engine never retries.
    fn write(&mut self, data: &[u8]);
}

/// In-memory transport for tests and host-side harnesses.
///
/// Input is queued with [`push_input`](MemoryTransport::push_input);
/// everything the engine writes is captured and drained with
/// [`take_output`](MemoryTransport::take_output).
#[derive(Debug, Default)]
pub struct MemoryTransport {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl MemoryTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes for the engine to read.
    pub fn push_input(&mut self, data: &[u8]) {
        self.rx.extend(data);
    }

    /// Drain everything written so far.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx)
    }
}

impl Transport for MemoryTransport {
    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut copied = 0;
        while copied < buf.len() {
            match self.rx.pop_front() {
                Some(byte) => {
                    buf[copied] = byte;
                    copied += 1;
                }
                None => break,
            }
        }
        copied
    }

    fn write(&mut self, data: &[u8]) {
        self.tx.extend_from_slice(data);
    }
}
