//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading various token types from the input,
//! including identifiers, keywords, literals, operators, and punctuation.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Consumes one character and, if the next character is `next`, consumes
    /// that too and produces `two`; otherwise produces `one`.
    ///
    /// This implements maximal munch for the two-character operators, so
    /// `==` wins over `=` and `++` over `+`.
    fn one_or_two(
        &mut self,
        next: char,
        two: TokenKind,
        one: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let kind = if self.current_char() == Some(next) {
            self.advance();
            two
        } else {
            one
        };
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by [`tokenize`](super::Lexer::tokenize)
    /// to produce the token stream. It assumes that whitespace and comments
    /// have already been skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an unexpected character is encountered
    /// or if a literal is malformed.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let c = self.current_char().ok_or_else(|| {
            LexError::unexpected_eof(Span::new(self.pos, self.pos, self.line, self.column))
        })?;

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        if let Some(token) = self.next_operator_or_punctuation(c, start_pos, start_line, start_column)
        {
            return token;
        }

        match c {
            '"' | '\'' => self.read_string(c, start_pos, start_line, start_column),
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                Ok(self.read_identifier_or_keyword(start_pos, start_line, start_column))
            }
            _ => {
                let span = Span::new(self.pos, self.pos + c.len_utf8(), self.line, self.column);
                Err(LexError::unexpected_character(c, span))
            }
        }
    }

    /// Recognizes operator and punctuation tokens, or returns `None` when
    /// the character starts a literal, identifier, or nothing at all.
    fn next_operator_or_punctuation(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Result<Token, LexError>> {
        let token = match c {
            '(' => Ok(self.single_char_token(
                TokenKind::LeftParen,
                start_pos,
                start_line,
                start_column,
            )),
            ')' => Ok(self.single_char_token(
                TokenKind::RightParen,
                start_pos,
                start_line,
                start_column,
            )),
            '{' => Ok(self.single_char_token(
                TokenKind::LeftBrace,
                start_pos,
                start_line,
                start_column,
            )),
            '}' => Ok(self.single_char_token(
                TokenKind::RightBrace,
                start_pos,
                start_line,
                start_column,
            )),
            '[' => Ok(self.single_char_token(
                TokenKind::LeftBracket,
                start_pos,
                start_line,
                start_column,
            )),
            ']' => Ok(self.single_char_token(
                TokenKind::RightBracket,
                start_pos,
                start_line,
                start_column,
            )),
            ';' => Ok(self.single_char_token(
                TokenKind::Semicolon,
                start_pos,
                start_line,
                start_column,
            )),
            ',' => {
                Ok(self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column))
            }
            '.' => Ok(self.single_char_token(TokenKind::Dot, start_pos, start_line, start_column)),
            '=' => Ok(self.one_or_two(
                '=',
                TokenKind::EqualEqual,
                TokenKind::Assign,
                start_pos,
                start_line,
                start_column,
            )),
            '!' => Ok(self.one_or_two(
                '=',
                TokenKind::NotEqual,
                TokenKind::Not,
                start_pos,
                start_line,
                start_column,
            )),
            '<' => Ok(self.one_or_two(
                '=',
                TokenKind::LessEqual,
                TokenKind::LessThan,
                start_pos,
                start_line,
                start_column,
            )),
            '>' => Ok(self.one_or_two(
                '=',
                TokenKind::GreaterEqual,
                TokenKind::GreaterThan,
                start_pos,
                start_line,
                start_column,
            )),
            '*' => Ok(self.one_or_two(
                '=',
                TokenKind::StarEqual,
                TokenKind::Star,
                start_pos,
                start_line,
                start_column,
            )),
            '/' => {
                // Comments were skipped before next_token, so a '/' here is
                // division or divide-assign.
                Ok(self.one_or_two(
                    '=',
                    TokenKind::SlashEqual,
                    TokenKind::Slash,
                    start_pos,
                    start_line,
                    start_column,
                ))
            }
            '%' => Ok(self.one_or_two(
                '=',
                TokenKind::PercentEqual,
                TokenKind::Percent,
                start_pos,
                start_line,
                start_column,
            )),
            '+' => {
                self.advance();
                let kind = match self.current_char() {
                    Some('+') => {
                        self.advance();
                        TokenKind::PlusPlus
                    }
                    Some('=') => {
                        self.advance();
                        TokenKind::PlusEqual
                    }
                    _ => TokenKind::Plus,
                };
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Ok(Token::new(kind, span))
            }
            '-' => {
                self.advance();
                let kind = match self.current_char() {
                    Some('-') => {
                        self.advance();
                        TokenKind::MinusMinus
                    }
                    Some('=') => {
                        self.advance();
                        TokenKind::MinusEqual
                    }
                    _ => TokenKind::Minus,
                };
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Ok(Token::new(kind, span))
            }
            '&' => {
                self.advance();
                if self.current_char() == Some('&') {
                    self.advance();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    Ok(Token::new(TokenKind::And, span))
                } else {
                    Err(LexError::incomplete_operator(
                        '&',
                        Span::new(start_pos, self.pos, start_line, start_column),
                    ))
                }
            }
            '|' => {
                self.advance();
                if self.current_char() == Some('|') {
                    self.advance();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    Ok(Token::new(TokenKind::Or, span))
                } else {
                    Err(LexError::incomplete_operator(
                        '|',
                        Span::new(start_pos, self.pos, start_line, start_column),
                    ))
                }
            }
            _ => return None,
        };

        Some(token)
    }

    /// Reads a string literal from the input.
    ///
    /// The opening quote should be at the current position. Both `"…"` and
    /// `'…'` forms are recognized; the literal ends at the first matching
    /// quote. Wild strings have no escape sequences, so the bytes between
    /// the quotes are preserved verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the string reaches a newline, carriage
    /// return, or end of input before the closing quote.
    fn read_string(
        &mut self,
        quote: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // skip opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some(c) if c == quote => {
                    self.advance(); // skip closing quote
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StringLiteral(value), span));
                }
                Some('\n') | Some('\r') | None => {
                    return Err(LexError::unterminated_string(
                        quote,
                        Span::new(start_pos, self.pos, start_line, start_column),
                    ));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Reads an identifier, keyword, type name, or word operator.
    ///
    /// The whole `[a-zA-Z_][a-zA-Z0-9_]*` span is consumed first and then
    /// checked against the keyword table, so a keyword wins over an
    /// identifier only when both would match the same span (`breaker` is an
    /// identifier, not `break` followed by `er`).
    fn read_identifier_or_keyword(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value {
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "else" => TokenKind::Else,
            "false" => TokenKind::BoolLiteral(false),
            "for" => TokenKind::For,
            "if" => TokenKind::If,
            "null" => TokenKind::Null,
            "return" => TokenKind::Return,
            "true" => TokenKind::BoolLiteral(true),
            "void" => TokenKind::Void,
            "while" => TokenKind::While,
            "Int" => TokenKind::TypeInt,
            "Float" => TokenKind::TypeFloat,
            "String" => TokenKind::TypeString,
            "Boolean" => TokenKind::TypeBoolean,
            // Word forms of the logical operators.
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            _ => TokenKind::Identifier(value.to_string()),
        };

        Token::new(kind, span)
    }

    /// Reads a numeric literal from the input.
    ///
    /// Numeric literals are either:
    /// - Integer literals: one or more ASCII digits
    /// - Float literals: `digits '.' digits` with an optional exponent
    ///   (`e` or `E`, optional sign, one or more digits)
    ///
    /// A `.` not followed by a digit is left for the caller, so `1.foo()`
    /// lexes as an integer, a dot, and an identifier. Likewise an `e` not
    /// introducing a valid exponent is left alone, so `1.5ever` lexes as
    /// the float `1.5` followed by the identifier `ever`.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an integer literal does not fit in `i64`.
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Parse a float only when a dot is directly followed by a digit.
        let has_fraction =
            self.current_char() == Some('.') && self.peek_char().is_some_and(|c| c.is_ascii_digit());

        if has_fraction {
            self.advance(); // consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }

            self.consume_exponent();

            let value_str = &self.input[start_pos..self.pos];
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            let value: f64 = value_str.parse().map_err(|_: std::num::ParseFloatError| {
                LexError::invalid_float_literal(value_str, span)
            })?;
            return Ok(Token::new(TokenKind::FloatLiteral(value), span));
        }

        let value_str = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let value: i64 = value_str
            .parse()
            .map_err(|_: std::num::ParseIntError| LexError::integer_out_of_range(value_str, span))?;

        Ok(Token::new(TokenKind::IntLiteral(value), span))
    }

    /// Consumes an `e`/`E` exponent if one follows the fraction digits.
    ///
    /// The exponent is only consumed when it is well formed (`e` or `E`,
    /// an optional sign, and at least one digit); otherwise the cursor is
    /// left on the `e` so it lexes as an identifier.
    fn consume_exponent(&mut self) {
        if !matches!(self.current_char(), Some('e') | Some('E')) {
            return;
        }

        let after_e = self.peek_char();
        let digits_follow = match after_e {
            Some('+') | Some('-') => {
                let mut chars = self.input[self.pos..].chars();
                chars.next(); // 'e'
                chars.next(); // sign
                chars.next().is_some_and(|c| c.is_ascii_digit())
            }
            Some(c) => c.is_ascii_digit(),
            None => false,
        };

        if !digits_follow {
            return;
        }

        self.advance(); // consume 'e'
        if matches!(self.current_char(), Some('+') | Some('-')) {
            self.advance();
        }
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
