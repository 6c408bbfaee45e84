//! Statement nodes for the Wild AST.

use std::rc::Rc;

use crate::token::Span;

use super::expr::Expr;
use super::program::FnDef;
use super::types::TypeName;

/// The kind of a statement in the Wild language.
///
/// This enum represents the different types of statements without
/// source location information. Use [`Stmt`] for the full AST node
/// with span information.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// An expression statement.
    ///
    /// Evaluates the expression for its side effects. The result value
    /// (if any) is discarded.
    Expr(Expr),

    /// A variable declaration: `Int x = 42;`.
    ///
    /// Declares a new variable in the innermost frame, overwriting any
    /// same-named entry in that frame. The declared type is stored but not
    /// checked against the value at runtime.
    VarDecl {
        /// The name of the variable being declared.
        name: String,
        /// The declared type annotation.
        declared_type: TypeName,
        /// The initializer expression.
        init: Expr,
    },

    /// A reassignment: `x = 42;`.
    ///
    /// Mutates the innermost frame in which the name resolves; assigning
    /// to an undeclared name is a runtime error. Compound assignments
    /// (`+=` and friends) desugar into this with a binary initializer.
    Assign {
        /// The name of the target variable.
        target: String,
        /// The value expression.
        value: Expr,
    },

    /// A braced block of statements.
    ///
    /// Blocks do not introduce a new environment frame; `for` loops and
    /// function calls push frames explicitly.
    Block(Vec<Stmt>),

    /// A conditional statement with optional `else` branch.
    ///
    /// Both branches are braced blocks; Wild has no `else if` chains.
    If {
        /// The condition expression, tested for truthiness.
        condition: Expr,
        /// Statements executed when the condition is truthy.
        then_branch: Vec<Stmt>,
        /// Optional statements executed when the condition is falsy.
        else_branch: Option<Vec<Stmt>>,
    },

    /// A while loop statement.
    While {
        /// The loop condition, tested for truthiness before each iteration.
        condition: Expr,
        /// Statements executed for each iteration.
        body: Vec<Stmt>,
    },

    /// A C-style for loop: `for (init; condition; increment) body`.
    ///
    /// The loop runs in its own environment frame covering the header and
    /// the body. An omitted condition parses as a `true` literal. The body
    /// is a single statement, usually a block.
    For {
        /// The optional initializer (a declaration or expression statement).
        initializer: Option<Box<Stmt>>,
        /// The loop condition.
        condition: Expr,
        /// The optional increment expression, evaluated after each iteration.
        increment: Option<Expr>,
        /// The loop body.
        body: Box<Stmt>,
    },

    /// Exits the innermost enclosing loop.
    Break,

    /// Skips to the next iteration of the innermost enclosing loop.
    Continue,

    /// A return statement.
    ///
    /// `return;` carries no expression and produces `void`.
    Return(Option<Expr>),

    /// A function definition.
    ///
    /// Definitions install themselves into the globals frame when
    /// executed; top-level definitions are installed before any other
    /// top-level statement runs. The definition is reference-counted so
    /// function values can share it while the program owns the AST.
    FunctionDef(Rc<FnDef>),
}

/// A statement in the Wild language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
