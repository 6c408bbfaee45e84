//! The Wild programming language interpreter CLI.
//!
//! This binary reads a Wild source file, runs it, and exits with the
//! Integer returned by the program's `main` function. Pipeline failures
//! are rendered by the diagnostics module and exit non-zero.
//!
//! # Usage
//!
//! ```text
//! wild <file.wild>
//! ```
//!
//! Invoked without a file, the interpreter prints a usage line to standard
//! output and exits with status 0.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Wild interpreter.
#[derive(Parser)]
#[command(name = "wild")]
#[command(about = "The Wild programming language", long_about = None)]
struct Cli {
    /// The source file to run (e.g., `program.wild`).
    file: Option<String>,
}

/// Entry point for the Wild interpreter.
fn main() {
    let cli = Cli::parse();

    let Some(file) = cli.file else {
        // Usage goes to stdout with a zero exit status.
        println!("Usage: wild <file_to_run>");
        return;
    };

    match driver::run(&file) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(error) => {
            diagnostics::report_error(error.filename(), error.source(), error.error());
            std::process::exit(1);
        }
    }
}
