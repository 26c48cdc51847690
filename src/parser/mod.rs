//! JSON-like text parser
//!
//! This module turns text into a [`Node`](ast::Node) tree:
//! - [`lexer`]: Tokenization (characters → tokens, one per call)
//! - [`parse`]: Parsing (tokens → tree), predictive LL(1)
//! - [`ast`]: Tree node definitions
//! - [`error`]: Lexical and syntactic error types
//!
//! # Accepted Grammar
//!
//! - Values: strings, unsigned decimal numbers, `true`, `false`, `null`,
//!   arrays and objects
//! - Numbers: digits with an optional `.` fraction; no sign, no exponent
//! - Strings: backslash pairs are kept verbatim, not decoded
//! - Whitespace: space, tab and newline
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one token of lookahead; tokens are
//! requested from the lexer only as the grammar consumes them.

pub mod ast;
pub mod constants;
pub mod error;
pub mod lexer;
pub mod parse;
