//! Native callables: built-in functions and bound native methods.
//!
//! Wild has three callable shapes. User functions live in the AST; this
//! module provides the other two — [`NativeFn`] for built-ins installed in
//! the globals frame (currently just `print`) and [`NativeMethod`] for
//! methods bound to a receiver during dispatch.

use crate::interpreter::Interpreter;

use super::error::RuntimeError;
use super::value::Value;

/// The implementation signature of a built-in function.
///
/// Built-ins receive the interpreter so they can reach its output sink.
pub type NativeFnImpl = fn(&mut Interpreter<'_>, &[Value]) -> Result<Value, RuntimeError>;

/// The implementation signature of a native method.
///
/// The first argument is the bound receiver.
pub type NativeMethodImpl = fn(&Value, &[Value]) -> Result<Value, RuntimeError>;

/// A built-in function value.
#[derive(Debug, Clone)]
pub struct NativeFn {
    /// The name the built-in is installed under.
    pub name: &'static str,
    /// The fixed number of arguments the built-in accepts.
    pub arity: usize,
    /// The implementation.
    pub func: NativeFnImpl,
}

/// A native method with its receiver bound.
///
/// Produced by method lookup (e.g. [`Value::method`]) and invoked like any
/// other callable; the receiver travels with the method value.
#[derive(Debug, Clone)]
pub struct NativeMethod {
    /// The bound receiver.
    pub receiver: Box<Value>,
    /// The fixed number of arguments the method accepts.
    pub arity: usize,
    /// The implementation.
    pub func: NativeMethodImpl,
}

/// The `print` built-in: writes the canonical display form of its argument
/// and a newline to the interpreter's output sink, and produces `void`.
pub(crate) fn native_print(
    interpreter: &mut Interpreter<'_>,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    let line = args
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    interpreter.write_line(&line)?;
    Ok(Value::Void)
}
