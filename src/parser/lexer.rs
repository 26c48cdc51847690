//! Lexer (tokenizer) for JSON-like text
//!
//! Produces one [`Token`] per call to [`Lexer::next_token`], on demand. The
//! cursor walks `char`s rather than bytes, so a multi-byte character is a
//! single unit everywhere, including in reported locations.
//!
//! Lexemes are kept raw: a number is its digit text and a string is the
//! text between its quotes with any backslash pairs left in place.

use std::fmt;

use log::{debug, trace};

use super::ast::SourceLocation;
use super::constants::*;
use super::error::LexError;

/// Token classes recognised by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    RightBrace,   // }
    Colon,        // :
    Comma,        // ,
    String,
    Number,
    Boolean,
    Null,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "bool",
            TokenKind::Null => "null",
            TokenKind::Eof => EOF_SENTINEL,
        };
        f.write_str(name)
    }
}

/// A classified lexeme.
///
/// Structural tokens carry their single character as `text`; the
/// end-of-input token carries an empty `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    fn eof(location: SourceLocation) -> Self {
        Self::new(TokenKind::Eof, String::new(), location)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Boolean => write!(f, "bool {}", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Pull-based lexer over a character sequence
#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    /// Set once an error is produced; every later call repeats it
    failed: Option<LexError>,
    /// Set once the iterator has yielded EOF or an error
    exhausted: bool,
}

impl Lexer {
    /// Create a new lexer for the given text.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            failed: None,
            exhausted: false,
        }
    }

    /// Scan the next token.
    ///
    /// At end of input this returns the EOF token, and keeps returning it
    /// on every later call. After an error the lexer is dead: the same
    /// error is returned again.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        match self.scan_token() {
            Ok(token) => {
                trace!(
                    "token {} {:?} at {}:{}",
                    token.kind,
                    token.text,
                    token.location.line,
                    token.location.column
                );
                Ok(token)
            }
            Err(err) => {
                let loc = self.current_location();
                debug!("lexical error at {}:{}: {}", loc.line, loc.column, err);
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::eof(loc)),
        };

        match ch {
            '0'..='9' => self.number_literal(ch, loc),
            't' => self.keyword(TRUE_LITERAL, TokenKind::Boolean, loc),
            'f' => self.keyword(FALSE_LITERAL, TokenKind::Boolean, loc),
            'n' => self.keyword(NULL_LITERAL, TokenKind::Null, loc),
            '"' => self.string_literal(loc),
            '[' => Ok(Token::new(TokenKind::LeftBracket, "[", loc)),
            ']' => Ok(Token::new(TokenKind::RightBracket, "]", loc)),
            '{' => Ok(Token::new(TokenKind::LeftBrace, "{", loc)),
            '}' => Ok(Token::new(TokenKind::RightBrace, "}", loc)),
            ':' => Ok(Token::new(TokenKind::Colon, ":", loc)),
            ',' => Ok(Token::new(TokenKind::Comma, ",", loc)),
            _ => Err(LexError::new(EXPECTED_LEADING, ch.to_string())),
        }
    }

    /// Digits, optionally followed by one `.` and at least one more digit
    fn number_literal(
        &mut self,
        first_digit: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first_digit);
        self.take_digits(&mut text);

        if self.peek() == Some('.') {
            self.advance();
            text.push('.');

            match self.peek() {
                Some(ch) if ch.is_ascii_digit() => self.take_digits(&mut text),
                Some(ch) => return Err(LexError::new(EXPECTED_FRACTION_DIGIT, ch.to_string())),
                None => return Err(LexError::new(EXPECTED_FRACTION_DIGIT, EOF_SENTINEL)),
            }

            if self.peek() == Some('.') {
                return Err(LexError::new(EXPECTED_NUMBER_END, "."));
            }
        }

        Ok(Token::new(TokenKind::Number, text, loc))
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.advance();
        }
    }

    /// Match the rest of `literal`; its first character is already consumed
    fn keyword(
        &mut self,
        literal: &'static str,
        kind: TokenKind,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        for expected in literal.chars().skip(1) {
            match self.advance() {
                Some(ch) if ch == expected => {}
                Some(ch) => return Err(LexError::new(expected.to_string(), ch.to_string())),
                None => return Err(LexError::new(expected.to_string(), EOF_SENTINEL)),
            }
        }

        Ok(Token::new(kind, literal, loc))
    }

    /// Everything up to the closing quote; `\x` pairs are copied verbatim
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::new();

        loop {
            match self.advance() {
                Some('"') => return Ok(Token::new(TokenKind::String, text, loc)),
                Some('\\') => {
                    text.push('\\');
                    let escaped = self
                        .advance()
                        .ok_or_else(|| LexError::new(EXPECTED_STRING_CHAR, EOF_SENTINEL))?;
                    text.push(escaped);
                }
                Some(ch) => text.push(ch),
                None => return Err(LexError::new(EXPECTED_STRING_CHAR, EOF_SENTINEL)),
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !WHITESPACE.contains(&ch) {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Yields tokens up to and including EOF, or up to the first error.
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let result = self.next_token();
        if matches!(&result, Ok(token) if token.is_eof()) || result.is_err() {
            self.exhausted = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer {}

/// Tokenize the entire input. The last token is always EOF.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn single(input: &str) -> Token {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert!(lexer.next_token().unwrap().is_eof());
        token
    }

    fn lex_error(input: &str) -> LexError {
        let mut lexer = Lexer::new(input);
        loop {
            match lexer.next_token() {
                Ok(token) if token.is_eof() => panic!("Expected lexical error for {:?}", input),
                Ok(_) => continue,
                Err(err) => return err,
            }
        }
    }

    #[test]
    fn test_all_punctuation() {
        assert_eq!(
            kinds("[]{}:,"),
            vec![
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Eof,
            ]
        );

        let tokens = tokenize(",").unwrap();
        assert_eq!(tokens[0].text, ",");
        assert_eq!(tokens[1].text, "");
    }

    #[test]
    fn test_integer() {
        let token = single("0123456789");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.text, "0123456789");
    }

    #[test]
    fn test_decimal() {
        let token = single("1.1");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.text, "1.1");
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(lex_error("1."), LexError::new("number or .", "EOF"));
        assert_eq!(lex_error("1..1"), LexError::new("number or .", "."));
        assert_eq!(lex_error("1.2.3"), LexError::new("number", "."));
        assert_eq!(lex_error(".1"), LexError::new(EXPECTED_LEADING, "."));
        assert_eq!(lex_error("-1"), LexError::new(EXPECTED_LEADING, "-"));
    }

    #[test]
    fn test_keywords() {
        let token = single("true");
        assert_eq!((token.kind, token.text.as_str()), (TokenKind::Boolean, "true"));
        let token = single("false");
        assert_eq!((token.kind, token.text.as_str()), (TokenKind::Boolean, "false"));
        let token = single("null");
        assert_eq!((token.kind, token.text.as_str()), (TokenKind::Null, "null"));
    }

    #[test]
    fn test_keyword_mismatch_reports_character() {
        assert_eq!(lex_error("trux"), LexError::new("e", "x"));
        assert_eq!(lex_error("fals"), LexError::new("e", "EOF"));
        assert_eq!(lex_error("nil"), LexError::new("u", "i"));
    }

    #[test]
    fn test_string_keeps_escapes() {
        let token = single(r#""abcde\"fgh""#);
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, r#"abcde\"fgh"#);

        let token = single(r#""a\\b\q""#);
        assert_eq!(token.text, r#"a\\b\q"#);
    }

    #[test]
    fn test_string_multibyte() {
        let token = single("\"あいうえお\"");
        assert_eq!(token.text, "あいうえお");
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(lex_error("\"abc"), LexError::new("other than EOF", "EOF"));
        assert_eq!(lex_error("\"abc\\"), LexError::new("other than EOF", "EOF"));
    }

    #[test]
    fn test_invalid_leading_character() {
        assert_eq!(lex_error("abc"), LexError::new(EXPECTED_LEADING, "a"));
        assert_eq!(lex_error("\r"), LexError::new(EXPECTED_LEADING, "\r"));
    }

    #[test]
    fn test_whitespace_and_locations() {
        let tokens = tokenize(" [\n\t\"ü\" ,1 ]\n").unwrap();
        let locs: Vec<(usize, usize)> = tokens
            .iter()
            .map(|t| (t.location.line, t.location.column))
            .collect();
        assert_eq!(locs, vec![(1, 2), (2, 2), (2, 6), (2, 7), (2, 9), (3, 1)]);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("  ");
        for _ in 0..3 {
            assert!(lexer.next_token().unwrap().is_eof());
        }
    }

    #[test]
    fn test_error_is_terminal() {
        let mut lexer = Lexer::new("x []");
        let first = lexer.next_token().unwrap_err();
        assert_eq!(lexer.next_token().unwrap_err(), first);
    }

    #[test]
    fn test_iterator_stops_after_eof_or_error() {
        let mut lexer = Lexer::new("null");
        assert!(matches!(lexer.next(), Some(Ok(ref t)) if t.kind == TokenKind::Null));
        assert!(matches!(lexer.next(), Some(Ok(ref t)) if t.is_eof()));
        assert!(lexer.next().is_none());

        let mut lexer = Lexer::new("[?");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }
}
