//! Function definition parsing.

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{FnDef, Param, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a function definition.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_def → (type | "void") IDENTIFIER "(" params? ")" block
    /// params → type IDENTIFIER ("," type IDENTIFIER)*
    /// ```
    ///
    /// The caller has already determined that a `type IDENT (` sequence
    /// follows (this is how declarations and definitions are told apart).
    pub(super) fn parse_fn_def(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        let return_type = self.parse_return_type()?;
        let name = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut parameters = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                let type_name = self.parse_type_name()?;
                let param_name = self.expect_identifier()?;
                parameters.push(Param {
                    type_name,
                    name: param_name,
                });

                if !self.match_kind(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;

        // The signature span ends before the body's opening brace.
        let signature_span = self.span_from(start_span);

        let body = self.parse_block_stmts()?;

        let def = FnDef {
            name,
            parameters,
            return_type,
            body,
            span: signature_span,
        };

        let span = self.span_from(start_span);
        Ok(Stmt::new(StmtKind::FunctionDef(Rc::new(def)), span))
    }
}
