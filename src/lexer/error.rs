//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can occur
//! during tokenization.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    /// Creates an error for a character that starts no token.
    pub(super) fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("Unexpected character '{}'", c),
            span,
        }
    }

    /// Creates an error for a lone `&` or `|` (only `&&` and `||` are operators).
    pub(super) fn incomplete_operator(c: char, span: Span) -> Self {
        LexError {
            message: format!("Incomplete operator: expected '{0}{0}', found a single '{0}'", c),
            span,
        }
    }

    /// Creates an error for running out of input where a token was expected.
    pub(super) fn unexpected_eof(span: Span) -> Self {
        LexError {
            message: "Unexpected end of input".to_string(),
            span,
        }
    }

    /// Creates an error for a float literal the host cannot represent.
    pub(super) fn invalid_float_literal(literal: &str, span: Span) -> Self {
        LexError {
            message: format!("Invalid float literal '{}'", literal),
            span,
        }
    }

    /// Creates an error for a string literal that never closes.
    pub(super) fn unterminated_string(quote: char, span: Span) -> Self {
        LexError {
            message: format!("Unterminated string literal: missing closing {}", quote),
            span,
        }
    }

    /// Creates an error for a block comment that never closes.
    pub(super) fn unterminated_block_comment(span: Span) -> Self {
        LexError {
            message: "Unterminated block comment: missing closing */".to_string(),
            span,
        }
    }

    /// Creates an error for an integer literal outside the `i64` range.
    pub(super) fn integer_out_of_range(literal: &str, span: Span) -> Self {
        LexError {
            message: format!("Integer literal '{}' is out of range", literal),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
