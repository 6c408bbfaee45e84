//! Runtime error types.
//!
//! This module defines [`RuntimeError`], which represents every failure
//! that can occur while a program is executing, and [`RuntimeErrorKind`],
//! which classifies those failures for structured handling.

/// The kind of runtime error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
/// The kind's display name (e.g. `InterpreterError`) is also the
/// user-facing label in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A general evaluation failure: undefined names, assignment to an
    /// undeclared variable, a non-callable callee, an operator applied to
    /// unsupported operand kinds, a stray `break`/`continue`/`return`, or
    /// a missing `main`.
    Interpreter,
    /// Wrong number of arguments to a function or method.
    ArgumentCount,
    /// An argument kind does not match the kind a native method expects.
    ArgumentType,
    /// A method name not found on a receiver.
    Existence,
    /// A resolved property is not callable.
    ///
    /// Reserved: with field access (`Get`) parse-only, nothing can
    /// currently resolve a property to a non-callable value, but the kind
    /// stays part of the error surface.
    Call,
    /// `toInteger` or `toFloat` failed to parse the string.
    Conversion,
    /// `main` returned something other than an Integer.
    ReturnType,
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuntimeErrorKind::Interpreter => "InterpreterError",
            RuntimeErrorKind::ArgumentCount => "ArgumentCountError",
            RuntimeErrorKind::ArgumentType => "ArgumentTypeError",
            RuntimeErrorKind::Existence => "ExistenceError",
            RuntimeErrorKind::Call => "CallError",
            RuntimeErrorKind::Conversion => "ConversionError",
            RuntimeErrorKind::ReturnType => "ReturnTypeError",
        };
        f.write_str(name)
    }
}

/// An error that occurred during program execution.
///
/// Runtime errors are fatal at the site detected; nothing inside the
/// interpreter recovers from one. They carry no source location (the
/// evaluator does not track spans), only a kind and a human-readable
/// message.
#[derive(Debug)]
pub struct RuntimeError {
    /// The kind of error, for structured handling.
    kind: RuntimeErrorKind,
    /// A human-readable description of the error.
    message: String,
}

impl RuntimeError {
    /// Creates a new error of the given kind.
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            kind,
            message: message.into(),
        }
    }

    /// Creates a general interpreter error.
    pub fn interpreter(message: impl Into<String>) -> Self {
        RuntimeError::new(RuntimeErrorKind::Interpreter, message)
    }

    /// Creates an error for a wrong argument count.
    pub fn argument_count(expected: usize, got: usize) -> Self {
        let plural = if expected == 1 { "" } else { "s" };
        RuntimeError::new(
            RuntimeErrorKind::ArgumentCount,
            format!("Expected {} argument{}, got {}", expected, plural, got),
        )
    }

    /// Creates an error for an argument of the wrong kind.
    ///
    /// `index` is 0-based; the message numbers arguments from 1.
    pub fn argument_type(index: usize, expected: &str, got: &str) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::ArgumentType,
            format!("Argument #{} must be {}, got {}", index + 1, expected, got),
        )
    }

    /// Creates an error for a method name not found on a receiver.
    pub fn no_such_method(receiver_kind: &str, method: &str) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::Existence,
            format!("{} has no method \"{}\"", receiver_kind, method),
        )
    }

    /// Creates an error for a failed string-to-number conversion.
    pub fn conversion(value: &str, target: &str) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::Conversion,
            format!("Cannot convert \"{}\" to {}", value, target),
        )
    }

    /// Creates the error for `main` returning a non-Integer.
    pub fn return_type(got: &str) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::ReturnType,
            format!("Entry function \"main\" must return Int, got {}", got),
        )
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for RuntimeError {}
