//! The string method table.
//!
//! String is the only Wild value kind with methods. Dispatch is a static
//! table keyed by method name with a fixed arity per entry; argument kinds
//! are checked inside each implementation. Positions and lengths are
//! measured in characters, not byte offsets.

use super::error::RuntimeError;
use super::native::{NativeMethod, NativeMethodImpl};
use super::value::Value;

/// One entry of the string method table.
struct MethodSpec {
    name: &'static str,
    arity: usize,
    func: NativeMethodImpl,
}

/// Every method a String receiver understands, in alphabetical order.
const STRING_METHODS: &[MethodSpec] = &[
    MethodSpec { name: "capitalize", arity: 0, func: capitalize },
    MethodSpec { name: "contains", arity: 1, func: contains },
    MethodSpec { name: "endsWith", arity: 1, func: ends_with },
    MethodSpec { name: "find", arity: 1, func: find },
    MethodSpec { name: "isEmpty", arity: 0, func: is_empty },
    MethodSpec { name: "length", arity: 0, func: length },
    MethodSpec { name: "replace", arity: 2, func: replace },
    MethodSpec { name: "startsWith", arity: 1, func: starts_with },
    MethodSpec { name: "substring", arity: 2, func: substring },
    MethodSpec { name: "toFloat", arity: 0, func: to_float },
    MethodSpec { name: "toInteger", arity: 0, func: to_integer },
    MethodSpec { name: "toLowerCase", arity: 0, func: to_lower_case },
    MethodSpec { name: "toUpperCase", arity: 0, func: to_upper_case },
    MethodSpec { name: "trim", arity: 0, func: trim },
];

/// Looks up a string method by name, binding the receiver into the result.
pub(super) fn string_method(receiver: &Value, name: &str) -> Option<NativeMethod> {
    STRING_METHODS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| NativeMethod {
            receiver: Box::new(receiver.clone()),
            arity: spec.arity,
            func: spec.func,
        })
}

/// Extracts the receiver's text.
///
/// The table is only reachable through a String receiver; anything else
/// is reported rather than assumed.
fn receiver_text(receiver: &Value) -> Result<&str, RuntimeError> {
    match receiver {
        Value::Str(s) => Ok(s),
        other => Err(RuntimeError::interpreter(format!(
            "String method called on {}",
            other.kind_name()
        ))),
    }
}

/// Fetches an argument, reporting a count error when it is missing.
///
/// The interpreter checks arity before dispatch, so this only fires if a
/// caller bypasses that check.
fn arg(args: &[Value], index: usize) -> Result<&Value, RuntimeError> {
    args.get(index)
        .ok_or_else(|| RuntimeError::argument_count(index + 1, args.len()))
}

/// Fetches a String argument or reports an argument-type error.
fn str_arg<'v>(args: &'v [Value], index: usize) -> Result<&'v str, RuntimeError> {
    match arg(args, index)? {
        Value::Str(s) => Ok(s),
        other => Err(RuntimeError::argument_type(index, "String", other.kind_name())),
    }
}

/// Fetches an Integer argument or reports an argument-type error.
fn int_arg(args: &[Value], index: usize) -> Result<i64, RuntimeError> {
    match arg(args, index)? {
        Value::Integer(i) => Ok(*i),
        other => Err(RuntimeError::argument_type(index, "Integer", other.kind_name())),
    }
}

/// `capitalize()` — first character uppercased, the rest lowercased.
fn capitalize(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    let mut chars = text.chars();
    let result = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    };
    Ok(Value::Str(result))
}

/// `contains(s)` — whether the receiver contains `s`.
fn contains(receiver: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    Ok(Value::Boolean(text.contains(str_arg(args, 0)?)))
}

/// `endsWith(s)` — whether the receiver ends with `s`.
fn ends_with(receiver: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    Ok(Value::Boolean(text.ends_with(str_arg(args, 0)?)))
}

/// `find(s)` — character index of the first occurrence of `s`, or -1.
fn find(receiver: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    let needle = str_arg(args, 0)?;
    let index = match text.find(needle) {
        Some(byte_index) => text[..byte_index].chars().count() as i64,
        None => -1,
    };
    Ok(Value::Integer(index))
}

/// `isEmpty()` — whether the receiver has no characters.
fn is_empty(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Boolean(receiver_text(receiver)?.is_empty()))
}

/// `length()` — the number of characters in the receiver.
fn length(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Integer(receiver_text(receiver)?.chars().count() as i64))
}

/// `replace(a, b)` — the receiver with every occurrence of `a` replaced by `b`.
fn replace(receiver: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    let from = str_arg(args, 0)?;
    let to = str_arg(args, 1)?;
    Ok(Value::Str(text.replace(from, to)))
}

/// `startsWith(s)` — whether the receiver starts with `s`.
fn starts_with(receiver: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    Ok(Value::Boolean(text.starts_with(str_arg(args, 0)?)))
}

/// `substring(start, len)` — `len` characters starting at character `start`.
///
/// Out-of-range values clamp: a negative start reads from the beginning, a
/// negative or oversized length yields what remains.
fn substring(receiver: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    let start = usize::try_from(int_arg(args, 0)?).unwrap_or(0);
    let len = usize::try_from(int_arg(args, 1)?).unwrap_or(0);
    Ok(Value::Str(text.chars().skip(start).take(len).collect()))
}

/// `toFloat()` — parses the trimmed receiver as a Float.
fn to_float(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    text.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| RuntimeError::conversion(text, "Float"))
}

/// `toInteger()` — parses the trimmed receiver as an Integer.
fn to_integer(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    let text = receiver_text(receiver)?;
    text.trim()
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| RuntimeError::conversion(text, "Integer"))
}

/// `toLowerCase()` — the receiver lowercased.
fn to_lower_case(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Str(receiver_text(receiver)?.to_lowercase()))
}

/// `toUpperCase()` — the receiver uppercased.
fn to_upper_case(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Str(receiver_text(receiver)?.to_uppercase()))
}

/// `trim()` — the receiver without leading and trailing whitespace.
fn trim(receiver: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Str(receiver_text(receiver)?.trim().to_string()))
}
