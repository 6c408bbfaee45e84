//! Expression nodes for the Wild AST.

use crate::runtime::Value;
use crate::token::{Span, TokenKind};

/// The kind of an expression in the Wild language.
///
/// This enum represents the different types of expressions without
/// source location information. Use [`Expr`] for the full AST node
/// with span information.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A literal value (integer, float, string, boolean, or `null`).
    ///
    /// The lexer and parser have already decoded the payload into a
    /// runtime [`Value`], so evaluation is a clone.
    Literal(Value),

    /// A variable reference.
    ///
    /// Refers to a variable by name. Resolution happens at evaluation
    /// time by scanning the environment stack.
    Variable(String),

    /// A binary operation.
    ///
    /// The operator is kept as the [`TokenKind`] that produced it; the
    /// evaluator dispatches on it directly. Compound assignments desugar
    /// into this node with the plain operator kind.
    Binary {
        /// The left operand.
        left: Box<Expr>,
        /// The operator token kind (e.g. [`TokenKind::Plus`]).
        op: TokenKind,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A unary prefix operation: `-x` or `!x`.
    Unary {
        /// The operator token kind ([`TokenKind::Minus`] or [`TokenKind::Not`]).
        op: TokenKind,
        /// The operand.
        operand: Box<Expr>,
    },

    /// A postfix increment or decrement: `x++` or `x--`.
    ///
    /// The target must be a variable; the parser rejects anything else.
    /// The expression's value is the variable's value before the update.
    Postfix {
        /// The name of the target variable.
        target: String,
        /// The operator token kind ([`TokenKind::PlusPlus`] or [`TokenKind::MinusMinus`]).
        op: TokenKind,
    },

    /// A function call expression.
    ///
    /// Only named calls are supported; the callee is resolved through the
    /// environment at evaluation time.
    Call {
        /// The name of the function being called.
        callee: String,
        /// The arguments passed to the function.
        args: Vec<Expr>,
    },

    /// A method call expression: `receiver.name(args)`.
    MethodCall {
        /// The receiver expression.
        receiver: Box<Expr>,
        /// The method name.
        method: String,
        /// The arguments passed to the method.
        args: Vec<Expr>,
    },

    /// A field access without a call: `object.name`.
    ///
    /// Parsed but reserved; no evaluator semantics exist yet, so
    /// evaluating one reports an interpreter error.
    Get {
        /// The object expression.
        object: Box<Expr>,
        /// The field name.
        field: String,
    },
}

/// An expression in the Wild language with source location.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
