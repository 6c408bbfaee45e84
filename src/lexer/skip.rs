//! Whitespace and comment skipping for the lexer.
//!
//! This module provides methods for skipping over whitespace characters,
//! line comments, and block comments during tokenization.

use super::Lexer;
use super::error::LexError;
use crate::token::Span;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments in a loop.
    ///
    /// This method handles the case where a comment might be followed by
    /// whitespace, which might be followed by another comment, etc.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if a block comment is not terminated.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.skip_whitespace();
            if !self.skip_comment()? {
                return Ok(());
            }
        }
    }

    /// Skips consecutive whitespace characters, including newlines.
    ///
    /// Line and column tracking happens in [`advance`](Lexer::advance).
    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    /// Skips a comment if one is present at the current position.
    ///
    /// Line comments start with `//` and extend to the end of the line.
    /// Block comments start with `/*` and extend to the matching `*/`;
    /// they may span multiple lines but do not nest.
    ///
    /// # Returns
    ///
    /// `true` if a comment was skipped, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if a block comment reaches the end of input
    /// without a closing `*/`.
    fn skip_comment(&mut self) -> Result<bool, LexError> {
        if self.input[self.pos..].starts_with("//") {
            while let Some(c) = self.current_char() {
                if c == '\n' {
                    self.advance();
                    break;
                }
                self.advance();
            }
            return Ok(true);
        }

        if self.input[self.pos..].starts_with("/*") {
            let start = Span::new(self.pos, self.pos + 2, self.line, self.column);
            self.advance(); // consume '/'
            self.advance(); // consume '*'

            while !self.input[self.pos..].starts_with("*/") {
                if self.is_eof() {
                    return Err(LexError::unterminated_block_comment(start));
                }
                self.advance();
            }
            self.advance(); // consume '*'
            self.advance(); // consume '/'
            return Ok(true);
        }

        Ok(false)
    }
}
