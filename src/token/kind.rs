//! Token kinds for the Wild lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Wild language.

/// The kind of token recognized by the lexer.
///
/// This enum represents all possible token types in the Wild language.
/// Literal and identifier variants carry their decoded payloads (e.g. the
/// parsed `i64` for an integer literal); the raw lexeme is recoverable
/// from the token's span.
///
/// Whitespace, newlines, and comments never appear in the token stream;
/// the lexer consumes them while tracking line and column positions.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords

    /// The `break` keyword for exiting loops.
    Break,

    /// The `continue` keyword for continuing to the next loop iteration.
    Continue,

    /// The `else` keyword for the alternate conditional branch.
    Else,

    /// The `for` keyword for counted loop statements.
    For,

    /// The `if` keyword for conditional branching.
    If,

    /// The `null` keyword, the explicit absent value.
    Null,

    /// The `return` keyword for returning from functions.
    Return,

    /// The `void` keyword, usable only as a function return type.
    Void,

    /// The `while` keyword for loop statements.
    While,

    // Type names

    /// The `Int` type name.
    TypeInt,

    /// The `Float` type name.
    TypeFloat,

    /// The `String` type name.
    TypeString,

    /// The `Boolean` type name.
    TypeBoolean,

    // Literals

    /// An integer literal (e.g. `42`, `100`).
    IntLiteral(i64),

    /// A float literal (e.g. `3.14`, `1.5e3`). The fraction is mandatory;
    /// the exponent is optional.
    FloatLiteral(f64),

    /// A string literal enclosed in double or single quotes.
    ///
    /// The contained `String` is the text between the quotes; Wild has no
    /// escape sequences, so the bytes are preserved verbatim.
    StringLiteral(String),

    /// A boolean literal (`true` or `false`).
    BoolLiteral(bool),

    // Operators

    /// Double equals `==` for equality comparison.
    EqualEqual,

    /// Not equals `!=` for inequality comparison.
    NotEqual,

    /// Plus-assign `+=`.
    PlusEqual,

    /// Minus-assign `-=`.
    MinusEqual,

    /// Times-assign `*=`.
    StarEqual,

    /// Divide-assign `/=`.
    SlashEqual,

    /// Modulo-assign `%=`.
    PercentEqual,

    /// Less than or equal `<=` for comparison.
    LessEqual,

    /// Greater than or equal `>=` for comparison.
    GreaterEqual,

    /// Logical AND, written `&&` or `and`.
    And,

    /// Logical OR, written `||` or `or`.
    Or,

    /// Increment `++` (postfix).
    PlusPlus,

    /// Decrement `--` (postfix).
    MinusMinus,

    /// Logical NOT, written `!` or `not`.
    Not,

    /// A plus sign `+` for addition and string concatenation.
    Plus,

    /// A minus sign `-` for subtraction and unary negation.
    Minus,

    /// An asterisk `*` for multiplication.
    Star,

    /// A forward slash `/` for division.
    Slash,

    /// A percent sign `%` for modulo.
    Percent,

    /// An equals sign `=` for declaration and assignment.
    Assign,

    /// Less than `<` for comparison.
    LessThan,

    /// Greater than `>` for comparison.
    GreaterThan,

    // Punctuation

    /// A left parenthesis `(`.
    LeftParen,

    /// A right parenthesis `)`.
    RightParen,

    /// A left brace `{`.
    LeftBrace,

    /// A right brace `}`.
    RightBrace,

    /// A left bracket `[` (reserved; no grammar production uses it yet).
    LeftBracket,

    /// A right bracket `]` (reserved).
    RightBracket,

    /// A semicolon `;`, the statement terminator.
    Semicolon,

    /// A comma `,`.
    Comma,

    /// A dot `.` for method calls and field access.
    Dot,

    /// An identifier (function name, variable name, etc.).
    ///
    /// Identifiers start with an ASCII alphabetic character or underscore,
    /// followed by any number of ASCII alphanumeric characters or
    /// underscores. Keywords and type names win over identifiers only when
    /// the whole span matches, so `breaker` is an identifier.
    Identifier(String),

    /// End of file marker.
    ///
    /// The lexer always appends this as the final token, ensuring
    /// the token vector is never empty.
    Eof,
}
