//! The Wild value model and runtime support types.
//!
//! This module defines everything a running program manipulates:
//!
//! - [`Value`] - the sum type of all runtime values, including callables
//! - [`NativeFn`] / [`NativeMethod`] - built-in callables
//! - the string method table ([`methods`])
//! - [`RuntimeError`] / [`RuntimeErrorKind`] - every runtime failure
//!
//! # See Also
//!
//! * [`crate::interpreter`] - Evaluates the AST over these values
//! * [`crate::ast`] - Literal expressions embed a [`Value`] directly

mod error;
mod methods;
mod native;
mod value;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use native::{NativeFn, NativeFnImpl, NativeMethod, NativeMethodImpl};
pub use value::Value;

pub(crate) use native::native_print;
