use lljson::{tokenize, Lexer, TokenKind};

#[test]
fn test_token_stream_for_document() {
    let tokens = tokenize(r#"{"k": [1.5, true]}"#).expect("Tokenizing failed");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBrace,
            TokenKind::String,
            TokenKind::Colon,
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Boolean,
            TokenKind::RightBracket,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );

    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["{", "k", ":", "[", "1.5", ",", "true", "]", "}", ""]);
}

#[test]
fn test_lexer_is_pull_based() {
    // The bad character is never reached when only the first token is read
    let mut lexer = Lexer::new("[ @");
    let first = lexer.next_token().expect("First token failed");

    assert_eq!(first.kind, TokenKind::LeftBracket);
    assert!(lexer.next_token().is_err());
}

#[test]
fn test_tokenize_reports_first_error() {
    let err = tokenize("[true, fa1se]").unwrap_err();

    assert_eq!(err.expected, "l");
    assert_eq!(err.found, "1");
}

#[test]
fn test_token_display() {
    let tokens = tokenize(r#""s" 12 false null ,"#).expect("Tokenizing failed");
    let shown: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();

    assert_eq!(
        shown,
        vec!["string \"s\"", "number 12", "bool false", "null", ",", "EOF"]
    );
}
