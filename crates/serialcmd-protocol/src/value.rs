//! Typed argument values.
//!
//! Command arguments travel through the dispatch pipeline as [`Value`]s, a
//! tagged union over the four wire types. Conversion always produces the
//! [`ValueKind`] declared at the same position of the matched command's
//! signature, so a handler can rely on the accessor for its declared kind
//! returning `Some`.

use std::fmt;

/// Maximum number of parameters a command signature can declare.
pub const MAX_PARAMS: usize = 3;

/// The kind of a typed argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// 32-bit signed integer.
    Int,
    /// 32-bit float.
    Float,
    /// Wide (64-bit) signed integer.
    Long,
    /// Owned text, taken verbatim from the wire.
    Text,
}

impl ValueKind {
    /// Lowercase name used in logs and diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Long => "long",
            ValueKind::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One converted command argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 32-bit signed integer argument.
    Int(i32),
    /// 32-bit float argument.
    Float(f32),
    /// Wide signed integer argument.
    Long(i64),
    /// Text argument.
    Text(String),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Long(_) => ValueKind::Long,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Wide integer payload, if this is a `Long`.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Text payload, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the way serial hosts expect: integers in decimal, floats
    /// fixed at two decimal places, text verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:.2}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

const EMPTY_SLOT: Value = Value::Int(0);

/// Fixed-capacity argument list for one dispatch.
///
/// Holds at most [`MAX_PARAMS`] values in signature order, entirely on the
/// stack apart from any `Text` payloads. The dispatcher fills one per line
/// and drops it when the handler returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgList {
    values: [Value; MAX_PARAMS],
    len: usize,
}

impl ArgList {
    /// Create an empty list.
    pub const fn new() -> Self {
        ArgList {
            values: [EMPTY_SLOT; MAX_PARAMS],
            len: 0,
        }
    }

    /// Append a value. Returns `false` when the list is already full.
    pub fn push(&mut self, value: Value) -> bool {
        if self.len == MAX_PARAMS {
            return false;
        }
        self.values[self.len] = value;
        self.len += 1;
        true
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no values are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The values in signature order.
    pub fn as_slice(&self) -> &[Value] {
        &self.values[..self.len]
    }
}

impl Default for ArgList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::Int(1).kind(), ValueKind::Int);
        assert_eq!(Value::Float(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::Long(1).kind(), ValueKind::Long);
        assert_eq!(Value::Text(String::from("x")).kind(), ValueKind::Text);
    }

    #[test]
    fn test_accessors_match_kind() {
        let value = Value::Int(42);
        assert_eq!(value.as_int(), Some(42));
        assert_eq!(value.as_float(), None);
        assert_eq!(value.as_long(), None);
        assert_eq!(value.as_text(), None);

        let value = Value::Text(String::from("hello"));
        assert_eq!(value.as_text(), Some("hello"));
        assert_eq!(value.as_int(), None);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Long(3000000000).to_string(), "3000000000");
        assert_eq!(Value::Float(3.5).to_string(), "3.50");
        assert_eq!(Value::Float(0.456).to_string(), "0.46");
        assert_eq!(Value::Text(String::from("as is")).to_string(), "as is");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Int.as_str(), "int");
        assert_eq!(ValueKind::Float.to_string(), "float");
        assert_eq!(ValueKind::Long.to_string(), "long");
        assert_eq!(ValueKind::Text.to_string(), "text");
    }

    #[test]
    fn test_arg_list_push_and_slice() {
        let mut args = ArgList::new();
        assert!(args.is_empty());

        assert!(args.push(Value::Int(1)));
        assert!(args.push(Value::Text(String::from("two"))));
        assert_eq!(args.len(), 2);
        assert_eq!(
            args.as_slice(),
            &[Value::Int(1), Value::Text(String::from("two"))]
        );
    }

    #[test]
    fn test_arg_list_rejects_overflow() {
        let mut args = ArgList::new();
        for i in 0..MAX_PARAMS as i32 {
            assert!(args.push(Value::Int(i)));
        }
        assert!(!args.push(Value::Int(99)));
        assert_eq!(args.len(), MAX_PARAMS);
    }
}
