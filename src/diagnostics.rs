//! Error rendering for the Wild CLI.
//!
//! Span-bearing errors (lexical and syntax) render as [`ariadne`] reports
//! over the offending source; runtime errors, which carry no span, print
//! as plain `Kind: message` lines on stderr.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::RunError;

/// Prints an ariadne report for a byte range of the source.
fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Reports a span-bearing error, falling back to a plain line when the
/// fancy report cannot be written.
fn report_span_error(
    filename: &str,
    source: &str,
    short_message: &str,
    message: &str,
    line: usize,
    column: usize,
    range: Range<usize>,
) {
    // Point at the end of the source when the span is empty (e.g. an
    // unexpected end of file).
    let range = if range.start >= range.end {
        let end = source.len();
        end.saturating_sub(1)..end
    } else {
        range
    };

    if let Err(report_err) = print_range_report(filename, source, range, short_message, message) {
        eprintln!("Error: {} (at {}:{})", message, line, column);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a pipeline error on stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &RunError) {
    match error {
        RunError::FileRead { .. } => {
            eprintln!("Error: {}", error);
        }
        RunError::Lex(lex_error) => {
            report_span_error(
                filename,
                source,
                "Lexical error",
                &lex_error.message,
                lex_error.span.line,
                lex_error.span.column,
                lex_error.span.start..lex_error.span.end,
            );
        }
        RunError::Parse(parse_error) => {
            report_span_error(
                filename,
                source,
                "Syntax error",
                &parse_error.message,
                parse_error.span.line,
                parse_error.span.column,
                parse_error.span.start..parse_error.span.end,
            );
        }
        RunError::Runtime(runtime_error) => {
            // Runtime errors carry no source location.
            eprintln!("{}", runtime_error);
        }
    }
}
