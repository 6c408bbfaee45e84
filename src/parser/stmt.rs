//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::runtime::Value;
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → var_decl | fn_def | block | if_stmt | while_stmt | for_stmt
    ///      | break_stmt | continue_stmt | return_stmt | assign_or_expr_stmt
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            kind if Self::is_type_name(kind) || matches!(kind, TokenKind::Void) => {
                // A type name followed by `IDENT (` starts a function
                // definition; any other shape is a variable declaration.
                if matches!(self.peek_kind(1), TokenKind::Identifier(_))
                    && matches!(self.peek_kind(2), TokenKind::LeftParen)
                {
                    self.parse_fn_def()
                } else {
                    self.parse_var_decl()
                }
            }
            TokenKind::Break => self.parse_break_stmt(),
            TokenKind::Continue => self.parse_continue_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::LeftBrace => self.parse_block_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            _ => self.parse_assign_or_expr_stmt(),
        }
    }

    /// Parses a variable declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// var_decl → type IDENTIFIER "=" expr ";"
    /// ```
    ///
    /// `void` is rejected here: only functions can have an absent type.
    pub(super) fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        if self.check(&TokenKind::Void) {
            return Err(ParseError::void_variable(start_span));
        }

        let declared_type = self.parse_type_name()?;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Assign)?;
        let init = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let span = self.span_from(start_span);
        Ok(Stmt::new(
            StmtKind::VarDecl {
                name,
                declared_type,
                init,
            },
            span,
        ))
    }

    /// Parses an assignment, compound assignment, or expression statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// assign_or_expr_stmt → expr (("=" | "+=" | "-=" | "*=" | "/=" | "%=") expr)? ";"
    /// ```
    ///
    /// Compound assignments desugar here: `x += v` becomes `x = x + v`.
    /// Both forms require the already-parsed expression to be a plain
    /// variable.
    fn parse_assign_or_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let expr = self.parse_expr()?;

        if self.match_kind(&TokenKind::Assign) {
            let target = Self::assignment_target(&expr)?;
            let value = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;

            let span = self.span_from(start_span);
            return Ok(Stmt::new(StmtKind::Assign { target, value }, span));
        }

        let desugared_op = match self.current_kind() {
            TokenKind::PlusEqual => Some(TokenKind::Plus),
            TokenKind::MinusEqual => Some(TokenKind::Minus),
            TokenKind::StarEqual => Some(TokenKind::Star),
            TokenKind::SlashEqual => Some(TokenKind::Slash),
            TokenKind::PercentEqual => Some(TokenKind::Percent),
            _ => None,
        };

        if let Some(op) = desugared_op {
            let target = Self::assignment_target(&expr)?;
            self.advance(); // consume the compound operator
            let value = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;

            let binary_span = Span::new(
                expr.span.start,
                value.span.end,
                expr.span.line,
                expr.span.column,
            );
            let binary = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    right: Box::new(value),
                },
                binary_span,
            );

            let span = self.span_from(start_span);
            return Ok(Stmt::new(
                StmtKind::Assign {
                    target,
                    value: binary,
                },
                span,
            ));
        }

        self.expect(&TokenKind::Semicolon)?;
        let span = self.span_from(start_span);
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// Extracts the variable name from an assignment target expression.
    fn assignment_target(expr: &Expr) -> Result<String, ParseError> {
        match &expr.kind {
            ExprKind::Variable(name) => Ok(name.clone()),
            _ => Err(ParseError::invalid_assignment_target(expr.span)),
        }
    }

    /// Parses a standalone braced block statement.
    fn parse_block_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let statements = self.parse_block_stmts()?;
        let span = self.span_from(start_span);
        Ok(Stmt::new(StmtKind::Block(statements), span))
    }

    /// Parses the statements of a braced block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" stmt* "}"
    /// ```
    pub(super) fn parse_block_stmts(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;

        let mut body = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            body.push(self.parse_stmt()?);
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(body)
    }

    /// Parses an if statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_stmt → "if" expr block ("else" block)?
    /// ```
    ///
    /// Both branches must be braced blocks; `else if` chains are not part
    /// of the language.
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::If)?;

        let condition = self.parse_expr()?;
        let then_branch = self.parse_block_stmts()?;

        let else_branch = if self.match_kind(&TokenKind::Else) {
            Some(self.parse_block_stmts()?)
        } else {
            None
        };

        let span = self.span_from(start_span);
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// Parses a while statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// while_stmt → "while" expr block
    /// ```
    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::While)?;

        let condition = self.parse_expr()?;
        let body = self.parse_block_stmts()?;

        let span = self.span_from(start_span);
        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// Parses a for statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// for_stmt → "for" "(" (var_decl | expr? ";") expr? ";" expr? ")" stmt
    /// ```
    ///
    /// All three header slots may be empty. An omitted condition is filled
    /// with a `true` literal so the loop body does not need a special
    /// case. The body is any statement, usually a block.
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LeftParen)?;

        let initializer = if self.match_kind(&TokenKind::Semicolon) {
            None
        } else if Self::is_type_name(self.current_kind()) {
            // parse_var_decl consumes the terminating semicolon
            Some(Box::new(self.parse_var_decl()?))
        } else {
            let init_start = self.current_span();
            let expr = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;
            let span = self.span_from(init_start);
            Some(Box::new(Stmt::new(StmtKind::Expr(expr), span)))
        };

        let condition = if self.match_kind(&TokenKind::Semicolon) {
            Expr::new(
                ExprKind::Literal(Value::Boolean(true)),
                self.previous_span(),
            )
        } else {
            let condition = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;
            condition
        };

        let increment = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_stmt()?);

        let span = self.span_from(start_span);
        Ok(Stmt::new(
            StmtKind::For {
                initializer,
                condition,
                increment,
                body,
            },
            span,
        ))
    }

    /// Parses a break statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// break_stmt → "break" ";"
    /// ```
    fn parse_break_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Break)?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Break, self.span_from(start_span)))
    }

    /// Parses a continue statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// continue_stmt → "continue" ";"
    /// ```
    fn parse_continue_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Continue)?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Continue, self.span_from(start_span)))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expr? ";"
    /// ```
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(
            StmtKind::Return(value),
            self.span_from(start_span),
        ))
    }

    /// Builds a span from a start span to the end of the last consumed token.
    pub(super) fn span_from(&self, start: Span) -> Span {
        Span::new(
            start.start,
            self.previous_span().end,
            start.line,
            start.column,
        )
    }
}
