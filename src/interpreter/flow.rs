//! Non-local control flow signals.
//!
//! `return`, `break`, and `continue` do not unwind the Rust stack with
//! panics or errors; statement execution threads a [`Flow`] result upward
//! until the construct responsible for the signal consumes it. Loops
//! consume `Break` and `Continue`, function calls consume `Return`, and a
//! signal that escapes its scope is a runtime error at the boundary that
//! sees it.

use crate::runtime::Value;

/// The outcome of executing a statement.
#[derive(Debug)]
pub(crate) enum Flow {
    /// Continue normal execution with the next statement.
    Normal,
    /// Return from the current function with a value.
    Return(Value),
    /// Break out of the innermost enclosing loop.
    Break,
    /// Skip to the next iteration of the innermost enclosing loop.
    Continue,
}
