//! Syntax tree produced by the parser
//!
//! [`Node`] is a closed set of variants. Scalars keep their raw lexeme:
//! numbers are not converted and string escapes are not decoded, so a
//! consumer decides how to interpret them.

use rustc_hash::FxHashMap;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A parsed value. The tree is never mutated after the parser returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text between the quotes, escapes kept verbatim
    String(String),
    /// Unsigned decimal lexeme such as `12` or `3.25`
    Number(String),
    Boolean(bool),
    Null,
    Array(Vec<Node>),
    /// Key -> value; a repeated key keeps the last value
    Object(FxHashMap<String, Node>),
}

impl Node {
    /// Name of the variant, as used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::String(_) => "string",
            Node::Number(_) => "number",
            Node::Boolean(_) => "boolean",
            Node::Null => "null",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Raw string lexeme, returns None if not a String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(text) => Some(text),
            _ => None,
        }
    }

    /// Raw numeric lexeme, returns None if not a Number
    pub fn as_number_text(&self) -> Option<&str> {
        match self {
            Node::Number(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&FxHashMap<String, Node>> {
        match self {
            Node::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a member of an object
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Look up an element of an array
    pub fn index(&self, i: usize) -> Option<&Node> {
        self.as_array().and_then(|elements| elements.get(i))
    }
}
