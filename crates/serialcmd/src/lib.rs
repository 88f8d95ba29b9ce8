//! # serialcmd
//!
//! Typed command dispatch for line-based serial text protocols.
//!
//! A host registers named commands with fixed parameter signatures. The
//! engine polls a byte-stream [`Transport`], reads one newline-terminated
//! line per tick, converts the comma-separated arguments to the declared
//! kinds, invokes the handler, and answers with bounded response lines.
//!
//! # Wire protocol
//!
//! ```text
//! <name> <arg1>,<arg2>,...,<argN>\n
//! ```
//!
//! Malformed numeric arguments convert to zero rather than failing; the
//! rejections a peer can observe are fixed text lines:
//!
//! | Condition | Response |
//! |---|---|
//! | Unregistered name | `Error: Unknown command '<name>'` |
//! | Wrong argument count | `Error: Invalid parameters for '<name>'` |
//! | Registration past capacity | `Error: Command limit reached` |
//!
//! # Example
//!
//! ```rust
//! use serialcmd::{CommandEngine, Handler, MemoryTransport, PollOutcome};
//! use serialcmd::protocol::ValueKind;
//!
//! let mut engine = CommandEngine::new(MemoryTransport::new());
//! engine.register(
//!     "greet",
//!     &[ValueKind::Text],
//!     Handler::one_arg(|who, rsp| {
//!         rsp.respond_fmt(format_args!("Hello, {}!", who));
//!     }),
//! )?;
//!
//! engine.port_mut().push_input(b"greet world\n");
//! assert_eq!(engine.poll(), PollOutcome::Dispatched);
//! assert_eq!(engine.port_mut().take_output(), b"Hello, world!\r\n");
//! assert!(engine.take_activity());
//! assert!(!engine.take_activity());
//! # Ok::<(), serialcmd::RegisterError>(())
//! ```

mod engine;
mod error;
mod handler;
mod registry;
mod respond;
mod transport;

pub use engine::*;
pub use error::*;
pub use handler::*;
pub use registry::*;
pub use respond::*;
pub use transport::*;

/// Wire-level protocol types, re-exported for integrators.
pub use serialcmd_protocol as protocol;
