//! Parse error types.

use crate::token::Span;

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// Creates an error for an unexpected token.
    pub(super) fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        ParseError {
            message: format!("Expected {}, found {}", expected, found),
            span,
        }
    }

    /// Creates an error for a token that cannot start an expression.
    pub(super) fn unexpected_expression_start(found: &str, span: Span) -> Self {
        ParseError {
            message: format!("Expected an expression, found {}", found),
            span,
        }
    }

    /// Creates an error for assigning to something other than a variable.
    pub(super) fn invalid_assignment_target(span: Span) -> Self {
        ParseError {
            message: "Invalid assignment target: only variables can be assigned to".to_string(),
            span,
        }
    }

    /// Creates an error for `++`/`--` applied to a non-variable.
    pub(super) fn invalid_postfix_target(operator: &str, span: Span) -> Self {
        ParseError {
            message: format!(
                "Invalid {} target: expected a variable",
                operator
            ),
            span,
        }
    }

    /// Creates an error for calling something other than a named function.
    pub(super) fn invalid_call_target(span: Span) -> Self {
        ParseError {
            message: "Invalid function call target: only named functions can be called"
                .to_string(),
            span,
        }
    }

    /// Creates an error for a variable declared with type `void`.
    pub(super) fn void_variable(span: Span) -> Self {
        ParseError {
            message: "Variables cannot be declared with type 'void'".to_string(),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
