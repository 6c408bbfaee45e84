//! The Wild programming language interpreter library.
//!
//! This library provides the core components of the Wild interpreter:
//! lexical analysis, parsing, and tree-walking evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`runtime`] - The value model, string methods, and runtime errors
//! - [`interpreter`] - The tree-walking evaluator
//!
//! # Example
//!
//! ```
//! use wild::interpreter::Interpreter;
//! use wild::lexer::Lexer;
//! use wild::parser::Parser;
//!
//! // Source code to run
//! let source = r#"
//!     Int main() {
//!         print("Hello, World!");
//!         return 0;
//!     }
//! "#;
//!
//! // Lexical analysis
//! let tokens = Lexer::new(source).tokenize().expect("Lexer error");
//!
//! // Parsing
//! let program = Parser::new(tokens).parse().expect("Parse error");
//!
//! // Evaluation; the Integer returned by main() is the exit code
//! let mut interpreter = Interpreter::new();
//! let exit_code = interpreter.run(&program).expect("Runtime error");
//! assert_eq!(exit_code, 0);
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod token;
