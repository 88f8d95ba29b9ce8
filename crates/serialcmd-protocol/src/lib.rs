//! # serialcmd wire protocol
//!
//! Wire-level building blocks for the serialcmd line protocol: the typed
//! [`Value`]s command handlers receive, the permissive text-to-value
//! conversion, and the bounded line reader that turns raw serial bytes into
//! `name` plus argument fields.
//!
//! # Protocol Overview
//!
//! Each command is one newline-terminated text line:
//!
//! ```text
//! <name> <arg1>,<arg2>,...,<argN>\n
//! ```
//!
//! The name ends at the first space; everything after it is the raw
//! argument field, split on commas without any quoting or escaping. Lines
//! longer than [`MAX_LINE_LENGTH`] bytes are cut there and the remainder is
//! treated as the start of the next line.
//!
//! # Example
//!
//! ```rust
//! use serialcmd_protocol::{convert_args, split_command, Value, ValueKind};
//!
//! let (name, raw) = split_command("sum 5,3");
//! assert_eq!(name, "sum");
//!
//! let args = convert_args(raw, &[ValueKind::Int, ValueKind::Int])?;
//! assert_eq!(args.as_slice(), &[Value::Int(5), Value::Int(3)]);
//! # Ok::<(), serialcmd_protocol::ConvertError>(())
//! ```

mod codec;
mod convert;
mod error;
mod value;

pub use codec::*;
pub use convert::*;
pub use error::*;
pub use value::*;
