//! The polling dispatch engine.
//!
//! [`CommandEngine`] owns the transport, the line reader, and the registry,
//! and drives the whole pipeline from a single non-blocking [`poll`]: drain
//! whatever bytes the transport reports, decode at most one line, look the
//! command up, convert its arguments, run the handler, and answer. One
//! line per tick, even when more input is already buffered.
//!
//! [`poll`]: CommandEngine::poll

use log::{debug, trace};

use serialcmd_protocol::{convert_args, split_command, LineReader, Value, ValueKind};

use crate::error::RegisterError;
use crate::handler::Handler;
use crate::registry::{Descriptor, Registry};
use crate::respond::Responder;
use crate::transport::Transport;

/// Transport drain chunk size, sized like a device UART FIFO.
const READ_CHUNK: usize = 64;

/// What one call to [`CommandEngine::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No complete line was available.
    Idle,
    /// A line was dispatched to its handler.
    Dispatched,
    /// The line named a command nobody registered.
    UnknownCommand,
    /// The line's arguments did not fit the command's signature.
    InvalidParameters,
}

/// Monotonic counters over everything the engine has processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Complete lines consumed from the transport.
    pub lines: u64,
    /// Lines dispatched to a handler.
    pub dispatched: u64,
    /// Lines naming an unregistered command.
    pub unknown_commands: u64,
    /// Lines rejected for their argument count.
    pub invalid_parameters: u64,
}

/// Line-protocol command dispatcher over one transport.
///
/// ```rust
/// use serialcmd::{CommandEngine, Handler, MemoryTransport, PollOutcome};
/// use serialcmd::protocol::ValueKind;
///
/// let mut engine = CommandEngine::new(MemoryTransport::new());
/// engine.register(
///     "sum",
///     &[ValueKind::Int, ValueKind::Int],
///     Handler::two_args(|a, b, rsp| {
///         let (a, b) = (a.as_int().unwrap_or(0), b.as_int().unwrap_or(0));
///         rsp.respond_fmt(format_args!("Sum: {} + {} = {}", a, b, a + b));
///     }),
/// )?;
///
/// engine.port_mut().push_input(b"sum 5,3\n");
/// assert_eq!(engine.poll(), PollOutcome::Dispatched);
/// assert_eq!(engine.port_mut().take_output(), b"Sum: 5 + 3 = 8\r\n");
/// # Ok::<(), serialcmd::RegisterError>(())
/// ```
pub struct CommandEngine<T: Transport> {
    port: T,
    reader: LineReader,
    registry: Registry,
    had_activity: bool,
    stats: DispatchStats,
}

impl<T: Transport> CommandEngine<T> {
    /// Create an engine over `port` with an empty registry.
    pub fn new(port: T) -> Self {
        CommandEngine {
            port,
            reader: LineReader::new(),
            registry: Registry::new(),
            had_activity: false,
            stats: DispatchStats::default(),
        }
    }

    /// Register a command: its name, the parameter kinds in signature
    /// order, and the handler, stated together and checked against each
    /// other.
    ///
    /// A full registry rejects the registration, leaves the existing
    /// commands untouched, and reports `Error: Command limit reached` on
    /// the wire, where hosts of existing devices expect it.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kinds: &[ValueKind],
        handler: Handler,
    ) -> Result<(), RegisterError> {
        let descriptor = Descriptor::new(name, kinds, handler)?;
        match self.registry.register(descriptor) {
            Ok(()) => Ok(()),
            Err(err) => {
                if err == RegisterError::CapacityExceeded {
                    Responder::new(&mut self.port).respond("Error: Command limit reached");
                }
                Err(err)
            }
        }
    }

    /// Number of registered commands.
    pub fn command_count(&self) -> usize {
        self.registry.len()
    }

    /// One tick: read available bytes, dispatch at most one line.
    pub fn poll(&mut self) -> PollOutcome {
        self.drain_port();
        let Some(line) = self.reader.decode_line() else {
            return PollOutcome::Idle;
        };
        trace!("line: {:?}", line);
        self.stats.lines += 1;
        self.dispatch_line(&line)
    }

    /// True exactly once after each successful dispatch, then false until
    /// the next one. Rejected lines never set it.
    pub fn take_activity(&mut self) -> bool {
        std::mem::take(&mut self.had_activity)
    }

    /// Counter snapshot.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// The transport.
    pub fn port(&self) -> &T {
        &self.port
    }

    /// The transport, mutably.
    pub fn port_mut(&mut self) -> &mut T {
        &mut self.port
    }

    /// Move any bytes the transport reports into the line reader.
    fn drain_port(&mut self) {
        let mut chunk = [0u8; READ_CHUNK];
        while self.port.available() > 0 {
            let count = self.port.read(&mut chunk);
            if count == 0 {
                break;
            }
            self.reader.push(&chunk[..count]);
        }
    }

    /// Run the lookup, convert, invoke pipeline for one line.
    fn dispatch_line(&mut self, line: &str) -> PollOutcome {
        let (name, raw_args) = split_command(line);

        let CommandEngine {
            port,
            registry,
            had_activity,
            stats,
            ..
        } = self;

        let Some(descriptor) = registry.lookup_mut(name) else {
            debug!("unknown command '{}'", name);
            stats.unknown_commands += 1;
            Responder::new(port).respond_fmt(format_args!("Error: Unknown command '{}'", name));
            return PollOutcome::UnknownCommand;
        };

        let args = match convert_args(raw_args, descriptor.kinds()) {
            Ok(args) => args,
            Err(err) => {
                debug!("rejecting '{}': {}", name, err);
                stats.invalid_parameters += 1;
                Responder::new(port)
                    .respond_fmt(format_args!("Error: Invalid parameters for '{}'", name));
                return PollOutcome::InvalidParameters;
            }
        };

        let mut responder = Responder::new(port);
        invoke(descriptor.handler_mut(), args.as_slice(), &mut responder);

        *had_activity = true;
        stats.dispatched += 1;
        debug!("dispatched '{}'", name);
        PollOutcome::Dispatched
    }
}

/// Call the handler variant matching the argument shape.
///
/// Registration guarantees the shapes agree, so the fallthrough arm is
/// unreachable through the public API.
fn invoke(handler: &mut Handler, args: &[Value], responder: &mut Responder<'_>) {
    match (handler, args) {
        (Handler::NoArgs(f), []) => f(responder),
        (Handler::OneArg(f), [a]) => f(a, responder),
        (Handler::TwoArgs(f), [a, b]) => f(a, b, responder),
        (Handler::ThreeArgs(f), [a, b, c]) => f(a, b, c, responder),
        (handler, args) => {
            debug_assert!(
                false,
                "handler arity {} given {} argument(s)",
                handler.arity(),
                args.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    #[test]
    fn test_poll_idle_without_input() {
        let mut engine = CommandEngine::new(MemoryTransport::new());
        assert_eq!(engine.poll(), PollOutcome::Idle);
        assert_eq!(engine.stats(), DispatchStats::default());
    }

    #[test]
    fn test_poll_idle_on_partial_line() {
        let mut engine = CommandEngine::new(MemoryTransport::new());
        engine
            .register("ping", &[], Handler::no_args(|rsp| rsp.respond("pong")))
            .unwrap();

        engine.port_mut().push_input(b"pin");
        assert_eq!(engine.poll(), PollOutcome::Idle);

        engine.port_mut().push_input(b"g\n");
        assert_eq!(engine.poll(), PollOutcome::Dispatched);
        assert_eq!(engine.port_mut().take_output(), b"pong\r\n");
    }

    #[test]
    fn test_drain_handles_input_beyond_one_chunk() {
        let mut engine = CommandEngine::new(MemoryTransport::new());
        engine
            .register("ping", &[], Handler::no_args(|rsp| rsp.respond("pong")))
            .unwrap();

        // Two reads' worth of padding lines ahead of the real command.
        let mut input = Vec::new();
        for _ in 0..30 {
            input.extend_from_slice(b"nop\n");
        }
        input.extend_from_slice(b"ping\n");
        engine.port_mut().push_input(&input);

        let mut outcomes = Vec::new();
        loop {
            match engine.poll() {
                PollOutcome::Idle => break,
                outcome => outcomes.push(outcome),
            }
        }
        assert_eq!(outcomes.len(), 31);
        assert_eq!(outcomes[30], PollOutcome::Dispatched);
    }
}
