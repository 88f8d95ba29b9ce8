//! Argument splitting and permissive conversion.
//!
//! Tokens convert with forgiving longest-prefix semantics: the leading
//! numeric portion of a token counts and anything else quietly becomes
//! zero. A malformed argument is therefore never a conversion error; the
//! only failure at this layer is a token count that does not match the
//! command's signature.

use crate::error::ConvertError;
use crate::value::{ArgList, Value, ValueKind};

/// Split a raw argument field into comma-separated tokens.
///
/// Consecutive commas produce empty tokens and surrounding whitespace is
/// preserved. An empty field carries no arguments at all.
pub fn split_args(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').collect()
}

/// Convert one token to the requested kind.
///
/// Numeric kinds parse the longest leading numeric prefix after optional
/// whitespace and sign; a token with no such prefix converts to zero.
/// `Long` goes through the float parser and casts the result, so values
/// beyond the f32 mantissa arrive rounded. Hosts that depend on the wire
/// behavior of existing devices depend on exactly that rounding.
pub fn convert_token(token: &str, kind: ValueKind) -> Value {
    match kind {
        ValueKind::Int => Value::Int(permissive_int(token)),
        ValueKind::Float => Value::Float(permissive_float(token)),
        ValueKind::Long => Value::Long(permissive_float(token) as i64),
        ValueKind::Text => Value::Text(token.to_string()),
    }
}

/// Convert a raw argument field into a list matching `kinds` exactly.
///
/// The token count must equal `kinds.len()`; on mismatch nothing is
/// converted. Registration keeps every signature within
/// [`MAX_PARAMS`](crate::MAX_PARAMS), so the produced list always fits.
pub fn convert_args(raw: &str, kinds: &[ValueKind]) -> Result<ArgList, ConvertError> {
    let tokens = split_args(raw);
    if tokens.len() != kinds.len() {
        return Err(ConvertError::CountMismatch {
            expected: kinds.len(),
            actual: tokens.len(),
        });
    }

    let mut args = ArgList::new();
    for (token, &kind) in tokens.into_iter().zip(kinds) {
        // Cannot fail: the count check above bounds the signature length.
        if !args.push(convert_token(token, kind)) {
            break;
        }
    }
    Ok(args)
}

/// Longest-prefix integer parse: optional whitespace, optional sign,
/// decimal digits. No digits means zero. Saturates at the i32 bounds.
fn permissive_int(token: &str) -> i32 {
    let rest = token.trim_start();
    let bytes = rest.as_bytes();

    let mut pos = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'-') => {
            negative = true;
            pos = 1;
        }
        Some(b'+') => pos = 1,
        _ => {}
    }

    // One past i32::MAX covers i32::MIN after negation.
    const LIMIT: i64 = i32::MAX as i64 + 1;
    let mut magnitude: i64 = 0;
    let mut any_digit = false;
    while let Some(&digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        any_digit = true;
        magnitude = (magnitude * 10 + i64::from(digit - b'0')).min(LIMIT);
        pos += 1;
    }

    if !any_digit {
        return 0;
    }
    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Longest-prefix float parse: optional whitespace, sign, digits around at
/// most one decimal point, then an exponent only when at least one digit
/// follows it. No valid prefix means zero.
fn permissive_float(token: &str) -> f32 {
    let rest = token.trim_start();
    let bytes = rest.as_bytes();

    let mut end = 0;
    if let Some(b'+' | b'-') = bytes.first() {
        end = 1;
    }

    let mut digits = 0;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        let mut frac = end + 1;
        let mut frac_digits = 0;
        while bytes.get(frac).is_some_and(|b| b.is_ascii_digit()) {
            frac += 1;
            frac_digits += 1;
        }
        if digits + frac_digits > 0 {
            end = frac;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if let Some(b'e' | b'E') = bytes.get(end) {
        let mut exp = end + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        let mut exp_digits = 0;
        while bytes.get(exp).is_some_and(|b| b.is_ascii_digit()) {
            exp += 1;
            exp_digits += 1;
        }
        if exp_digits > 0 {
            end = exp;
        }
    }

    rest[..end].parse::<f32>().unwrap_or(0.0)
}
