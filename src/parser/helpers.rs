//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Break => "'break' keyword".to_string(),
            TokenKind::Continue => "'continue' keyword".to_string(),
            TokenKind::Else => "'else' keyword".to_string(),
            TokenKind::For => "'for' keyword".to_string(),
            TokenKind::If => "'if' keyword".to_string(),
            TokenKind::Null => "'null'".to_string(),
            TokenKind::Return => "'return' keyword".to_string(),
            TokenKind::Void => "'void'".to_string(),
            TokenKind::While => "'while' keyword".to_string(),
            TokenKind::TypeInt => "type name 'Int'".to_string(),
            TokenKind::TypeFloat => "type name 'Float'".to_string(),
            TokenKind::TypeString => "type name 'String'".to_string(),
            TokenKind::TypeBoolean => "type name 'Boolean'".to_string(),
            TokenKind::IntLiteral(n) => format!("integer '{}'", n),
            TokenKind::FloatLiteral(x) => format!("float '{}'", x),
            TokenKind::StringLiteral(s) => {
                if s.chars().count() > 20 {
                    let prefix: String = s.chars().take(20).collect();
                    format!("string \"{}...\"", prefix)
                } else {
                    format!("string \"{}\"", s)
                }
            }
            TokenKind::BoolLiteral(b) => format!("'{}'", b),
            TokenKind::EqualEqual => "'=='".to_string(),
            TokenKind::NotEqual => "'!='".to_string(),
            TokenKind::PlusEqual => "'+='".to_string(),
            TokenKind::MinusEqual => "'-='".to_string(),
            TokenKind::StarEqual => "'*='".to_string(),
            TokenKind::SlashEqual => "'/='".to_string(),
            TokenKind::PercentEqual => "'%='".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::And => "'&&'".to_string(),
            TokenKind::Or => "'||'".to_string(),
            TokenKind::PlusPlus => "'++'".to_string(),
            TokenKind::MinusMinus => "'--'".to_string(),
            TokenKind::Not => "'!'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Percent => "'%'".to_string(),
            TokenKind::Assign => "'='".to_string(),
            TokenKind::LessThan => "'<'".to_string(),
            TokenKind::GreaterThan => "'>'".to_string(),
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::LeftBracket => "'['".to_string(),
            TokenKind::RightBracket => "']'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Identifier(s) => format!("identifier '{}'", s),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty (len >= 1)
        // advance() doesn't increment pos past Eof
        // Therefore idx is always valid: 0 <= idx < tokens.len()
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns the kind of the token `offset` positions ahead, clamped to `Eof`.
    pub(super) fn peek_kind(&self, offset: usize) -> &TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    /// Returns the span of the most recently consumed token.
    ///
    /// Falls back to the current span when nothing has been consumed yet.
    pub(super) fn previous_span(&self) -> Span {
        if self.pos == 0 {
            self.current_span()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Returns `true` if the current token matches `kind` without consuming it.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token and returns `true` if it matches `kind`.
    pub(super) fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the current token matches and was consumed
    /// * `Err(ParseError)` - If the current token does not match
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::unexpected_token(
                "identifier",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }
}
