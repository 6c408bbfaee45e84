//! Pipeline orchestration for the Wild CLI.
//!
//! The driver reads a source file, runs it through the lexer, parser, and
//! interpreter, and hands any failure back to the binary with enough
//! context (filename and source text) for diagnostics rendering.

use std::fs;

use wild::interpreter::Interpreter;
use wild::lexer::{LexError, Lexer};
use wild::parser::{ParseError, Parser};
use wild::runtime::RuntimeError;

/// A failure from any phase of the run pipeline.
///
/// This enum unifies errors from file reading, lexical analysis, parsing,
/// and evaluation to simplify error handling in the binary.
pub(crate) enum RunError {
    /// Failed to read the source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// An error during lexical analysis.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::FileRead { path, source } => {
                write!(f, "Could not read file '{}': {}", path, source)
            }
            RunError::Lex(error) => write!(f, "{}", error),
            RunError::Parse(error) => write!(f, "{}", error),
            RunError::Runtime(error) => write!(f, "{}", error),
        }
    }
}

/// A [`RunError`] together with the filename and source it occurred in.
pub(crate) struct RunErrorWithContext {
    filename: String,
    source: String,
    error: RunError,
}

impl RunErrorWithContext {
    /// The filename the error occurred in.
    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    /// The source text the error occurred in (empty when the file could
    /// not be read).
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// The underlying error.
    pub(crate) fn error(&self) -> &RunError {
        &self.error
    }
}

/// Runs a Wild source file and returns its exit code.
///
/// The exit code is the Integer returned by the program's `main`
/// function, truncated to the platform's `i32` exit status.
///
/// # Errors
///
/// Returns an error with reporting context when the file cannot be read
/// or any pipeline phase fails.
pub(crate) fn run(path: &str) -> Result<i32, Box<RunErrorWithContext>> {
    let with_context = |source: &str, error: RunError| {
        Box::new(RunErrorWithContext {
            filename: path.to_string(),
            source: source.to_string(),
            error,
        })
    };

    let source = fs::read_to_string(path).map_err(|io_error| {
        with_context(
            "",
            RunError::FileRead {
                path: path.to_string(),
                source: io_error,
            },
        )
    })?;

    let tokens = Lexer::new(&source)
        .tokenize()
        .map_err(|error| with_context(&source, RunError::Lex(error)))?;

    let program = Parser::new(tokens)
        .parse()
        .map_err(|error| with_context(&source, RunError::Parse(error)))?;

    let mut interpreter = Interpreter::new();
    let exit_code = interpreter
        .run(&program)
        .map_err(|error| with_context(&source, RunError::Runtime(error)))?;

    Ok(exit_code as i32)
}
