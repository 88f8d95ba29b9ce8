//! Bounded command registry.
//!
//! Descriptors live in registration order in a table capped at
//! [`MAX_COMMANDS`]. Lookup is a linear scan where the first exact,
//! case-sensitive name match wins, so when two descriptors share a name
//! the earlier registration shadows the later one for every lookup.

use log::{debug, warn};
use serialcmd_protocol::ValueKind;

use crate::error::RegisterError;
use crate::handler::Handler;

/// Maximum number of commands the registry holds.
pub const MAX_COMMANDS: usize = 20;

/// The registered shape of one command: name, parameter kinds, handler.
#[derive(Debug)]
pub struct Descriptor {
    name: String,
    kinds: Vec<ValueKind>,
    handler: Handler,
}

impl Descriptor {
    /// Build a descriptor, checking the declared kinds against the
    /// handler's arity so a mismatched pair cannot enter the registry.
    pub fn new(
        name: impl Into<String>,
        kinds: &[ValueKind],
        handler: Handler,
    ) -> Result<Self, RegisterError> {
        let name = name.into();
        if kinds.len() != handler.arity() {
            warn!(
                "rejecting command '{}': {} declared kind(s) for a {}-parameter handler",
                name,
                kinds.len(),
                handler.arity()
            );
            return Err(RegisterError::ArityMismatch {
                declared: kinds.len(),
                accepted: handler.arity(),
            });
        }
        Ok(Descriptor {
            name,
            kinds: kinds.to_vec(),
            handler,
        })
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter kinds in signature order.
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    pub(crate) fn handler_mut(&mut self) -> &mut Handler {
        &mut self.handler
    }
}

/// Insertion-ordered, bounded command table.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Descriptor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            entries: Vec::with_capacity(MAX_COMMANDS),
        }
    }

    /// Append a descriptor. A full table rejects the registration and
    /// stays unchanged.
    pub fn register(&mut self, descriptor: Descriptor) -> Result<(), RegisterError> {
        if self.entries.len() >= MAX_COMMANDS {
            warn!(
                "registry full, rejecting command '{}'",
                descriptor.name()
            );
            return Err(RegisterError::CapacityExceeded);
        }
        debug!(
            "registered command '{}' ({})",
            descriptor.name(),
            signature(descriptor.kinds())
        );
        self.entries.push(descriptor);
        Ok(())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First descriptor registered under `name`, by exact match.
    pub fn lookup(&self, name: &str) -> Option<&Descriptor> {
        self.entries.iter().find(|d| d.name == name)
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Descriptor> {
        self.entries.iter_mut().find(|d| d.name == name)
    }
}

fn signature(kinds: &[ValueKind]) -> String {
    if kinds.is_empty() {
        return String::from("no parameters");
    }
    kinds
        .iter()
        .map(ValueKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
