//! Command handler signatures.
//!
//! A handler is one variant of [`Handler`], a closed enumeration of the
//! arities the protocol supports. Each variant carries a callable that
//! receives exactly that many converted [`Value`]s plus the [`Responder`]
//! for its reply, so a handler can never see an argument shape it did not
//! declare. Registration checks the variant against the declared kind
//! list.

use std::fmt;

use serialcmd_protocol::Value;

use crate::respond::Responder;

/// Callable for a command with no parameters.
pub type NoArgFn = Box<dyn FnMut(&mut Responder<'_>)>;
/// Callable for a one-parameter command.
pub type OneArgFn = Box<dyn FnMut(&Value, &mut Responder<'_>)>;
/// Callable for a two-parameter command.
pub type TwoArgFn = Box<dyn FnMut(&Value, &Value, &mut Responder<'_>)>;
/// Callable for a three-parameter command.
pub type ThreeArgFn = Box<dyn FnMut(&Value, &Value, &Value, &mut Responder<'_>)>;

/// A registered command handler, one variant per supported arity.
pub enum Handler {
    /// Takes no parameters.
    NoArgs(NoArgFn),
    /// Takes one parameter.
    OneArg(OneArgFn),
    /// Takes two parameters.
    TwoArgs(TwoArgFn),
    /// Takes three parameters.
    ThreeArgs(ThreeArgFn),
}

impl Handler {
    /// Wrap a callable for a command with no parameters.
    pub fn no_args<F>(f: F) -> Self
    where
        F: FnMut(&mut Responder<'_>) + 'static,
    {
        Handler::NoArgs(Box::new(f))
    }

    /// Wrap a callable for a one-parameter command.
    pub fn one_arg<F>(f: F) -> Self
    where
        F: FnMut(&Value, &mut Responder<'_>) + 'static,
    {
        Handler::OneArg(Box::new(f))
    }

    /// Wrap a callable for a two-parameter command.
    pub fn two_args<F>(f: F) -> Self
    where
        F: FnMut(&Value, &Value, &mut Responder<'_>) + 'static,
    {
        Handler::TwoArgs(Box::new(f))
    }

    /// Wrap a callable for a three-parameter command.
    pub fn three_args<F>(f: F) -> Self
    where
        F: FnMut(&Value, &Value, &Value, &mut Responder<'_>) + 'static,
    {
        Handler::ThreeArgs(Box::new(f))
    }

    /// Number of parameters this handler accepts.
    pub fn arity(&self) -> usize {
        match self {
            Handler::NoArgs(_) => 0,
            Handler::OneArg(_) => 1,
            Handler::TwoArgs(_) => 2,
            Handler::ThreeArgs(_) => 3,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler(arity={})", self.arity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_per_variant() {
        assert_eq!(Handler::no_args(|_| {}).arity(), 0);
        assert_eq!(Handler::one_arg(|_, _| {}).arity(), 1);
        assert_eq!(Handler::two_args(|_, _, _| {}).arity(), 2);
        assert_eq!(Handler::three_args(|_, _, _, _| {}).arity(), 3);
    }

    #[test]
    fn test_debug_shows_arity() {
        let handler = Handler::two_args(|_, _, _| {});
        assert_eq!(format!("{:?}", handler), "Handler(arity=2)");
    }
}
