//! Abstract Syntax Tree definitions for the Wild programming language.
//!
//! This module defines the data structures that represent parsed Wild
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::interpreter`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node containing all top-level statements
//! - [`FnDef`] - A function definition with name, parameters, return type, and body
//! - [`Stmt`] - Individual statements (declarations, control flow, expression statements)
//! - [`Expr`] - Expressions (literals, variables, operators, calls)
//! - [`TypeName`] - Type annotations for declarations
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! # Module Structure
//!
//! - [`types`] - Type annotations (Int, Float, String, Boolean, void)
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds
//! - [`program`] - Top-level program structure (Program, FnDef, Param)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Evaluates the AST

mod expr;
mod program;
mod stmt;
mod types;


pub use expr::{Expr, ExprKind};
pub use program::{FnDef, Param, Program};
pub use stmt::{Stmt, StmtKind};
pub use types::TypeName;
