//! Tree-walking evaluator for the Wild programming language.
//!
//! This module provides the [`Interpreter`] struct which executes a parsed
//! [`Program`] by recursive traversal.
//!
//! # Overview
//!
//! The interpreter owns:
//! - a stack of environment frames with the globals frame (containing the
//!   built-in `print`) at the bottom
//! - the output sink that `print` writes to, injectable so tests can
//!   capture program output
//!
//! Statement execution returns a [`Flow`](flow::Flow) value that models
//! `return`/`break`/`continue` without unwinding; expression evaluation
//! returns runtime [`Value`]s directly.
//!
//! # Program execution order
//!
//! [`Interpreter::run`] first installs every top-level function definition
//! into the globals frame, then executes the remaining top-level
//! statements in source order, and finally invokes `main()`. `main` must
//! return an Integer; its payload is the process exit code.
//!
//! # Examples
//!
//! ```
//! use wild::interpreter::Interpreter;
//! use wild::lexer::Lexer;
//! use wild::parser::Parser;
//!
//! let source = "Int main() { return 7; }";
//! let tokens = Lexer::new(source).tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//!
//! let mut interpreter = Interpreter::new();
//! assert_eq!(interpreter.run(&program).unwrap(), 7);
//! ```
//!
//! # Module Structure
//!
//! - [`env`](self) - Environment frames and the frame stack
//! - [`flow`](self) - Control flow signals (`return`/`break`/`continue`)
//! - [`eval`](self) - Expression evaluation and operator dispatch
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST the interpreter walks
//! * [`crate::runtime`] - The value model and runtime errors

mod env;
mod eval;
mod flow;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::rc::Rc;

use crate::ast::{Program, Stmt, StmtKind};
use crate::runtime::{NativeFn, RuntimeError, Value, native_print};

use env::Environment;
use flow::Flow;

/// A tree-walking interpreter for Wild programs.
///
/// # Lifetime
///
/// The `'out` lifetime parameter ties the interpreter to its output sink,
/// allowing tests to pass `&mut Vec<u8>` and inspect what `print` wrote.
pub struct Interpreter<'out> {
    /// The environment stack. The globals frame always contains `print`.
    env: Environment,
    /// The sink the `print` built-in writes to.
    out: Box<dyn Write + 'out>,
}

impl Interpreter<'static> {
    /// Creates an interpreter that prints to standard output.
    pub fn new() -> Self {
        Interpreter::with_output(Box::new(io::stdout()))
    }
}

impl Default for Interpreter<'static> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<'out> Interpreter<'out> {
    /// Creates an interpreter that prints to the given sink.
    pub fn with_output(out: Box<dyn Write + 'out>) -> Self {
        let mut env = Environment::new();
        env.define_global(
            "print",
            Value::Native(NativeFn {
                name: "print",
                arity: 1,
                func: native_print,
            }),
        );
        Interpreter { env, out }
    }

    /// Writes one line to the output sink.
    pub(crate) fn write_line(&mut self, line: &str) -> Result<(), RuntimeError> {
        writeln!(self.out, "{}", line)
            .map_err(|e| RuntimeError::interpreter(format!("Failed to write output: {}", e)))
    }

    /// Executes a program and returns the exit code from `main()`.
    ///
    /// Top-level function definitions are installed first, then the other
    /// top-level statements run in source order, then `main` is called
    /// with no arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] for any evaluation failure, including a
    /// missing `main`, a `main` that does not return an Integer, and
    /// `break`/`continue`/`return` signals escaping the top level.
    pub fn run(&mut self, program: &Program) -> Result<i64, RuntimeError> {
        for stmt in &program.statements {
            if let StmtKind::FunctionDef(def) = &stmt.kind {
                self.env
                    .define_global(&def.name, Value::Function(Rc::clone(def)));
            }
        }

        for stmt in &program.statements {
            if matches!(stmt.kind, StmtKind::FunctionDef(_)) {
                continue;
            }
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                Flow::Return(_) => {
                    return Err(RuntimeError::interpreter("`return` outside of a function"));
                }
                Flow::Break => {
                    return Err(RuntimeError::interpreter("`break` outside of a loop"));
                }
                Flow::Continue => {
                    return Err(RuntimeError::interpreter("`continue` outside of a loop"));
                }
            }
        }

        let main = self
            .env
            .lookup("main")
            .cloned()
            .ok_or_else(|| RuntimeError::interpreter("Entry function \"main\" must be defined"))?;

        match self.call_with_exprs(main, &[])? {
            Value::Integer(code) => Ok(code),
            other => Err(RuntimeError::return_type(other.kind_name())),
        }
    }

    /// Executes a sequence of statements in the current frame, stopping at
    /// the first control flow signal.
    fn exec_stmts(&mut self, stmts: &[Stmt]) -> Result<Flow, RuntimeError> {
        for stmt in stmts {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
            StmtKind::VarDecl { name, init, .. } => {
                // The declared type is grammar only; the value is not
                // checked against it.
                let value = self.eval_expr(init)?;
                self.env.define(name, value);
                Ok(Flow::Normal)
            }
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                if self.env.assign(target, value) {
                    Ok(Flow::Normal)
                } else {
                    Err(RuntimeError::interpreter(format!(
                        "Cannot assign to undefined variable `{}`",
                        target
                    )))
                }
            }
            StmtKind::Block(statements) => {
                // Blocks share the current frame; only `for` headers and
                // function calls introduce frames.
                self.exec_stmts(statements)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition)?.is_truthy() {
                    self.exec_stmts(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmts(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval_expr(condition)?.is_truthy() {
                    match self.exec_stmts(body)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Normal | Flow::Continue => {}
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::For {
                initializer,
                condition,
                increment,
                body,
            } => {
                // The header and body share one dedicated frame. The
                // result is bound before the pop so the frame is released
                // on error paths too.
                self.env.push_frame();
                let result = self.exec_for(initializer.as_deref(), condition, increment.as_ref(), body);
                self.env.pop_frame();
                result
            }
            StmtKind::Break => Ok(Flow::Break),
            StmtKind::Continue => Ok(Flow::Continue),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Void,
                };
                Ok(Flow::Return(value))
            }
            StmtKind::FunctionDef(def) => {
                // Definitions install into globals wherever they execute;
                // top-level ones were already installed by run().
                self.env
                    .define_global(&def.name, Value::Function(Rc::clone(def)));
                Ok(Flow::Normal)
            }
        }
    }

    /// Runs a `for` loop inside its already-pushed frame.
    fn exec_for(
        &mut self,
        initializer: Option<&Stmt>,
        condition: &crate::ast::Expr,
        increment: Option<&crate::ast::Expr>,
        body: &Stmt,
    ) -> Result<Flow, RuntimeError> {
        if let Some(initializer) = initializer {
            match self.exec_stmt(initializer)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }

        loop {
            if !self.eval_expr(condition)?.is_truthy() {
                break;
            }

            match self.exec_stmt(body)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                // Continue falls through to the increment.
                Flow::Normal | Flow::Continue => {}
            }

            if let Some(increment) = increment {
                self.eval_expr(increment)?;
            }
        }

        Ok(Flow::Normal)
    }

    /// Returns the current environment depth (used by tests to check the
    /// push/pop pairing invariant).
    #[cfg(test)]
    pub(crate) fn env_depth(&self) -> usize {
        self.env.depth()
    }
}
