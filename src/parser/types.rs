//! Type annotation parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::TypeName;
use crate::token::TokenKind;

impl Parser {
    /// Returns `true` when `kind` is one of the four value type names.
    pub(super) fn is_type_name(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::TypeInt | TokenKind::TypeFloat | TokenKind::TypeString | TokenKind::TypeBoolean
        )
    }

    /// Parses a value type annotation.
    ///
    /// # Grammar
    ///
    /// ```text
    /// type → "Int" | "Float" | "String" | "Boolean"
    /// ```
    pub(super) fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let ty = match self.current_kind() {
            TokenKind::TypeInt => TypeName::Int,
            TokenKind::TypeFloat => TypeName::Float,
            TokenKind::TypeString => TypeName::String,
            TokenKind::TypeBoolean => TypeName::Boolean,
            other => {
                return Err(ParseError::unexpected_token(
                    "a type name",
                    &Self::token_kind_display(other),
                    self.current_span(),
                ));
            }
        };
        self.advance();
        Ok(ty)
    }

    /// Parses a return type annotation, which additionally allows `void`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_type → type | "void"
    /// ```
    pub(super) fn parse_return_type(&mut self) -> Result<TypeName, ParseError> {
        if self.match_kind(&TokenKind::Void) {
            return Ok(TypeName::Void);
        }
        self.parse_type_name()
    }
}
