//! Top-level program structure for the Wild AST.

use crate::token::Span;

use super::stmt::Stmt;
use super::types::TypeName;

/// A single parameter of a function definition.
#[derive(Debug, Clone)]
pub struct Param {
    /// The declared parameter type. Stored but not checked at runtime.
    pub type_name: TypeName,
    /// The parameter name, bound in the call frame.
    pub name: String,
}

/// A function definition in the Wild language.
///
/// Functions are installed into the globals frame by name. Every program
/// must define `main` with no parameters; its Integer result becomes the
/// process exit code.
///
/// # Invariants
///
/// The following invariants should hold for a well-formed `FnDef`:
/// - `name` is a non-empty valid identifier
/// - `return_type` may be any type name, including `void`
/// - `span` covers the signature from the return type to before `{`
///
/// These invariants are enforced by the parser.
///
/// # Examples
///
/// ```text
/// Int add(Int a, Int b) {
///     return a + b;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FnDef {
    /// The name of the function.
    pub name: String,
    /// The parameters in declaration order.
    pub parameters: Vec<Param>,
    /// The declared return type.
    pub return_type: TypeName,
    /// The statements that make up the function body.
    pub body: Vec<Stmt>,
    /// The source location of the function signature.
    pub span: Span,
}

/// The root node of a Wild program's AST.
///
/// A `Program` owns the ordered top-level statements, including function
/// definitions. The program outlives interpretation; function values hold
/// shared references into it.
#[derive(Debug)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}
