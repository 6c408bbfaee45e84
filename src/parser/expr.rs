//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! This module implements expression parsing with proper operator
//! precedence. The parser handles:
//! - Primary expressions (literals, variables, parenthesized expressions)
//! - Call and access tails (`f(args)`, `x.name`, `x.name(args)`)
//! - Postfix `++`/`--` on variables
//! - Unary prefix `-` and `!`
//! - Binary operations with correct precedence and left-associativity

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind};
use crate::runtime::Value;
use crate::token::{Span, TokenKind};

/// Operator precedence levels (higher number = lower precedence = looser binding).
///
/// Lower precedence operators are parsed later, forming parent nodes in the
/// AST. For example, `2 + 3 * 4` is parsed as `2 + (3 * 4)` because
/// multiplication (precedence 2) binds tighter than addition (precedence 3).
///
/// - Level 1: `-`, `!` (unary prefix) - tightest binding
/// - Level 2: `*`, `/`, `%` (multiplicative)
/// - Level 3: `+`, `-` (additive)
/// - Level 4: `<`, `>`, `<=`, `>=` (comparison)
/// - Level 5: `==`, `!=` (equality)
/// - Level 6: `&&` (logical AND)
/// - Level 7: `||` (logical OR) - loosest binding
const PRECEDENCE_MULTIPLICATIVE: u8 = 2;
const PRECEDENCE_ADDITIVE: u8 = 3;
const PRECEDENCE_COMPARISON: u8 = 4;
const PRECEDENCE_EQUALITY: u8 = 5;
const PRECEDENCE_LOGICAL_AND: u8 = 6;
const PRECEDENCE_LOGICAL_OR: u8 = 7;

/// Returns the precedence of a binary operator token, if it is one.
///
/// Returns `None` for non-operator tokens.
fn binary_op_precedence(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(PRECEDENCE_MULTIPLICATIVE),
        TokenKind::Plus | TokenKind::Minus => Some(PRECEDENCE_ADDITIVE),
        TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessEqual
        | TokenKind::GreaterEqual => Some(PRECEDENCE_COMPARISON),
        TokenKind::EqualEqual | TokenKind::NotEqual => Some(PRECEDENCE_EQUALITY),
        TokenKind::And => Some(PRECEDENCE_LOGICAL_AND),
        TokenKind::Or => Some(PRECEDENCE_LOGICAL_OR),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression.
    ///
    /// This is the main entry point for expression parsing. It handles
    /// operator precedence and associativity correctly.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr       → logic_or
    /// logic_or   → logic_and ("||" logic_and)*
    /// logic_and  → equality ("&&" equality)*
    /// equality   → comparison (("==" | "!=") comparison)*
    /// comparison → term (("<" | "<=" | ">" | ">=") term)*
    /// term       → factor (("+" | "-") factor)*
    /// factor     → unary (("*" | "/" | "%") unary)*
    /// ```
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_pratt(u8::MAX)
    }

    /// Parses an expression with Pratt parsing, respecting minimum precedence.
    ///
    /// This method implements the core Pratt parsing algorithm:
    /// 1. Parse a unary expression (atom with prefixes and postfixes)
    /// 2. While the current token is an operator with precedence >= min_precedence:
    ///    a. Consume the operator
    ///    b. Recursively parse the right-hand side with higher precedence
    ///    c. Build a Binary node
    fn parse_expr_pratt(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let Some(precedence) = binary_op_precedence(self.current_kind()) else {
                break;
            };

            // Stop if this operator has lower precedence (higher number)
            // than our minimum.
            if precedence > min_precedence {
                break;
            }

            let op = self.current_kind().clone();
            self.advance();

            // Parse the right-hand side with `precedence - 1` for
            // left-associativity. The current operator binds tighter than
            // itself, so `a - b - c` parses as `(a - b) - c` rather than
            // `a - (b - c)`.
            let right = self.parse_expr_pratt(precedence - 1)?;

            let span = Span::new(
                left.span.start,
                right.span.end,
                left.span.line,
                left.span.column,
            );

            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parses a unary prefix expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// unary → ("-" | "!") unary | postfix
    /// ```
    ///
    /// Prefix operators are right-associative: `--x` is `-(-x)`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.current_kind(), TokenKind::Minus | TokenKind::Not) {
            let op = self.current_kind().clone();
            let start_span = self.current_span();
            self.advance();

            let operand = self.parse_unary()?;
            let span = Span::new(
                start_span.start,
                operand.span.end,
                start_span.line,
                start_span.column,
            );

            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        self.parse_postfix()
    }

    /// Parses a postfix expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// postfix → primary ("++" | "--")?
    /// ```
    ///
    /// The target of `++`/`--` must be a plain variable; anything else is
    /// a syntax error.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_primary()?;

        let op = match self.current_kind() {
            TokenKind::PlusPlus | TokenKind::MinusMinus => self.current_kind().clone(),
            _ => return Ok(expr),
        };

        let op_span = self.current_span();
        self.advance();

        let ExprKind::Variable(target) = expr.kind else {
            return Err(ParseError::invalid_postfix_target(
                &Self::token_kind_display(&op),
                expr.span,
            ));
        };

        let span = Span::new(
            expr.span.start,
            op_span.end,
            expr.span.line,
            expr.span.column,
        );
        Ok(Expr::new(ExprKind::Postfix { target, op }, span))
    }

    /// Parses a primary expression and any call/access tails.
    ///
    /// # Grammar
    ///
    /// ```text
    /// primary   → INT | FLOAT | STRING | "true" | "false" | "null"
    ///           | IDENTIFIER call_tail* | "(" expr ")" call_tail*
    /// call_tail → "(" args? ")" | "." IDENTIFIER ("(" args? ")")?
    /// ```
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        let expr = match self.current_kind() {
            TokenKind::IntLiteral(value) => {
                let value = *value;
                self.advance();
                Expr::new(ExprKind::Literal(Value::Integer(value)), start_span)
            }
            TokenKind::FloatLiteral(value) => {
                let value = *value;
                self.advance();
                Expr::new(ExprKind::Literal(Value::Float(value)), start_span)
            }
            TokenKind::StringLiteral(value) => {
                let value = value.clone();
                self.advance();
                Expr::new(ExprKind::Literal(Value::Str(value)), start_span)
            }
            TokenKind::BoolLiteral(value) => {
                let value = *value;
                self.advance();
                Expr::new(ExprKind::Literal(Value::Boolean(value)), start_span)
            }
            TokenKind::Null => {
                self.advance();
                Expr::new(ExprKind::Literal(Value::Null), start_span)
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Expr::new(ExprKind::Variable(name), start_span)
            }
            TokenKind::LeftParen => {
                self.advance(); // consume '('
                let inner = self.parse_expr()?;
                let close_span = self.current_span();
                self.expect(&TokenKind::RightParen)?;

                // The inner expression keeps its kind; the span widens to
                // cover the parentheses.
                let span = Span::new(
                    start_span.start,
                    close_span.end,
                    start_span.line,
                    start_span.column,
                );
                Expr::new(inner.kind, span)
            }
            other => {
                return Err(ParseError::unexpected_expression_start(
                    &Self::token_kind_display(other),
                    start_span,
                ));
            }
        };

        self.parse_call_tails(expr)
    }

    /// Applies call and access tails to an already-parsed expression.
    ///
    /// Handles chains like `f(1)(2)` (rejected: only named calls exist),
    /// `s.trim().length()`, and bare field accesses `x.name` (parsed as a
    /// reserved `Get` node).
    fn parse_call_tails(&mut self, mut expr: Expr) -> Result<Expr, ParseError> {
        loop {
            if self.check(&TokenKind::LeftParen) {
                expr = self.finish_call(expr)?;
            } else if self.match_kind(&TokenKind::Dot) {
                let name = self.expect_identifier()?;

                if self.check(&TokenKind::LeftParen) {
                    self.advance(); // consume '('
                    let args = self.parse_arguments()?;
                    let close_span = self.current_span();
                    self.expect(&TokenKind::RightParen)?;

                    let span = Span::new(
                        expr.span.start,
                        close_span.end,
                        expr.span.line,
                        expr.span.column,
                    );
                    expr = Expr::new(
                        ExprKind::MethodCall {
                            receiver: Box::new(expr),
                            method: name,
                            args,
                        },
                        span,
                    );
                } else {
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Get {
                            object: Box::new(expr),
                            field: name,
                        },
                        span,
                    );
                }
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parses the argument list of a call whose callee is already parsed.
    ///
    /// Only named calls are supported: the callee must be a plain
    /// variable, not the result of another call or access.
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let args = self.parse_arguments()?;
        let close_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        let ExprKind::Variable(name) = callee.kind else {
            return Err(ParseError::invalid_call_target(callee.span));
        };

        let span = Span::new(
            callee.span.start,
            close_span.end,
            callee.span.line,
            callee.span.column,
        );
        Ok(Expr::new(ExprKind::Call { callee: name, args }, span))
    }

    /// Parses a comma-separated argument list, stopping before `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_kind(&TokenKind::Comma) {
                    break;
                }
            }
        }

        Ok(args)
    }
}
