//! Error types for tokenizing and parsing
//!
//! Two tiers only: [`LexError`] for malformed character sequences and
//! [`ParseError::UnexpectedToken`] for a well-formed token in the wrong
//! place. Every error is terminal; nothing is recovered.

use std::fmt;

use thiserror::Error;

use crate::parser::constants::EXPECTED_VALUE;
use crate::parser::lexer::TokenKind;

/// Tokenizer error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token is found: expected {expected} but got {found}")]
pub struct LexError {
    /// Description of what could appear here
    pub expected: String,
    /// The character actually read, or `"EOF"`
    pub found: String,
}

impl LexError {
    pub(crate) fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// What the parser would have accepted at the point of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A single token kind, as required by `match`
    Token(TokenKind),
    /// Any token that starts a value
    Value,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Value => f.write_str(EXPECTED_VALUE),
        }
    }
}

/// Error returned by [`parse`](crate::parse)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Lexical failure
    #[error("invalid token is found: expected {expected} but got {found}")]
    InvalidToken { expected: String, found: String },

    /// Grammar failure
    #[error("unexpected token is found: expected {expected} but got {found}")]
    UnexpectedToken { expected: Expected, found: String },
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::InvalidToken {
            expected: err.expected,
            found: err.found,
        }
    }
}
