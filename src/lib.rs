//! # Introduction
//!
//! lljson parses JSON-like text into an immutable syntax tree and rejects
//! malformed input with a single, precise diagnostic.
//!
//! ## Pipeline
//!
//! ```text
//! Text → Lexer → Parser → Node
//! ```
//!
//! 1. [`parser::lexer`] — scans characters into tokens, lazily, one per
//!    request from the parser.
//! 2. [`parser::parse`] — LL(1) recursive descent; one method per grammar
//!    production, no backtracking.
//! 3. [`parser::ast`] — the [`Node`] variants handed back to the caller.
//!
//! Numbers and strings keep their raw lexeme. Decoding them is left to the
//! consumer of the tree.
//!
//! ```
//! use lljson::{parse, Node};
//!
//! let tree = parse(r#"{"id": 7, "tags": ["a\n"]}"#).unwrap();
//! assert_eq!(tree.get("id"), Some(&Node::Number("7".to_string())));
//! assert_eq!(tree.get("tags").and_then(|t| t.index(0)).and_then(Node::as_str), Some(r"a\n"));
//! ```
//!
//! ## Errors
//!
//! A failed parse returns no tree and exactly one [`ParseError`]:
//! [`ParseError::InvalidToken`] for a malformed character sequence, or
//! [`ParseError::UnexpectedToken`] for a token the grammar does not allow
//! at that position.
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade
//! at `debug` and `trace` level. Install any logger to see them.

pub mod parser;

pub use parser::ast::{Node, SourceLocation};
pub use parser::error::{Expected, LexError, ParseError};
pub use parser::lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::parse::{parse, Parser};
