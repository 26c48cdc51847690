//! Predictive LL(1) parser
//!
//! Grammar, one method per production:
//!
//! ```text
//! document := value EOF
//! value    := number | string | boolean | null | array | object
//! array    := '[' ']' | '[' value (',' value)* ']'
//! object   := '{' '}' | '{' member (',' member)* '}'
//! member   := string ':' value
//! ```
//!
//! The parser holds exactly one token of lookahead and pulls the next one
//! from the [`Lexer`] only when the current one is matched. The lookahead
//! kind is the only thing that selects a production; there is no
//! backtracking. The first error aborts the whole parse.

use log::debug;
use rustc_hash::FxHashMap;

use crate::parser::ast::Node;
use crate::parser::error::{Expected, ParseError};
use crate::parser::lexer::{Lexer, Token, TokenKind};

/// Recursive descent parser over a single input
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    lookahead: Token,
}

impl Parser {
    /// Create a parser and read the first token.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token()?;
        Ok(Self { lexer, lookahead })
    }

    /// Parse the whole input as one value followed by end of input.
    ///
    /// Consumes the parser: neither a finished nor a failed parse can be
    /// resumed.
    pub fn parse_document(mut self) -> Result<Node, ParseError> {
        let result = self.document();
        if let Err(err) = &result {
            let loc = self.lookahead.location;
            debug!("parse failed near {}:{}: {}", loc.line, loc.column, err);
        }
        result
    }

    // document := value EOF
    fn document(&mut self) -> Result<Node, ParseError> {
        let node = self.value()?;
        self.expect(TokenKind::Eof)?;
        Ok(node)
    }

    // value := number | string | boolean | null | array | object
    fn value(&mut self) -> Result<Node, ParseError> {
        match self.lookahead.kind {
            TokenKind::Number => {
                let text = self.expect(TokenKind::Number)?;
                Ok(Node::Number(text))
            }
            TokenKind::String => {
                let text = self.expect(TokenKind::String)?;
                Ok(Node::String(text))
            }
            TokenKind::Boolean => {
                let value = self.lookahead.text.parse::<bool>().map_err(|_| {
                    ParseError::UnexpectedToken {
                        expected: Expected::Token(TokenKind::Boolean),
                        found: self.lookahead.text.clone(),
                    }
                })?;
                self.expect(TokenKind::Boolean)?;
                Ok(Node::Boolean(value))
            }
            TokenKind::Null => {
                self.expect(TokenKind::Null)?;
                Ok(Node::Null)
            }
            TokenKind::LeftBracket => self.array(),
            TokenKind::LeftBrace => self.object(),
            _ => Err(ParseError::UnexpectedToken {
                expected: Expected::Value,
                found: self.found(),
            }),
        }
    }

    // array := '[' ']' | '[' value (',' value)* ']'
    fn array(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LeftBracket)?;

        let mut elements = Vec::new();
        if self.check(TokenKind::RightBracket) {
            self.expect(TokenKind::RightBracket)?;
            return Ok(Node::Array(elements));
        }

        elements.push(self.value()?);
        while self.check(TokenKind::Comma) {
            self.expect(TokenKind::Comma)?;
            elements.push(self.value()?);
        }

        self.expect(TokenKind::RightBracket)?;
        Ok(Node::Array(elements))
    }

    // object := '{' '}' | '{' member (',' member)* '}'
    fn object(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LeftBrace)?;

        let mut entries = FxHashMap::default();
        if self.check(TokenKind::RightBrace) {
            self.expect(TokenKind::RightBrace)?;
            return Ok(Node::Object(entries));
        }

        let (key, value) = self.member()?;
        entries.insert(key, value);
        while self.check(TokenKind::Comma) {
            self.expect(TokenKind::Comma)?;
            // Last write wins on a repeated key
            let (key, value) = self.member()?;
            entries.insert(key, value);
        }

        self.expect(TokenKind::RightBrace)?;
        Ok(Node::Object(entries))
    }

    // member := string ':' value
    fn member(&mut self) -> Result<(String, Node), ParseError> {
        let key = self.expect(TokenKind::String)?;
        self.expect(TokenKind::Colon)?;
        let value = self.value()?;
        Ok((key, value))
    }

    // Lookahead primitives

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Match the lookahead against `kind` and advance, returning the
    /// matched lexeme.
    fn expect(&mut self, kind: TokenKind) -> Result<String, ParseError> {
        if !self.check(kind) {
            return Err(ParseError::UnexpectedToken {
                expected: Expected::Token(kind),
                found: self.found(),
            });
        }

        // At EOF the lexer keeps returning EOF, so advancing is harmless
        let next = self.lexer.next_token()?;
        let matched = std::mem::replace(&mut self.lookahead, next);
        Ok(matched.text)
    }

    /// Lookahead lexeme as reported in errors; empty at end of input
    fn found(&self) -> String {
        self.lookahead.text.clone()
    }
}

/// Parse `input` into a syntax tree.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    debug!("parsing {} characters", input.chars().count());
    let node = Parser::new(input)?.parse_document()?;
    debug!("parsed {}", node.kind_name());
    Ok(node)
}
