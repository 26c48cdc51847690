// Lexical tables for the tokenizer

/// Characters skipped between tokens
pub const WHITESPACE: [char; 3] = [' ', '\t', '\n'];

pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";
pub const NULL_LITERAL: &str = "null";

/// Reported as `found` when the input ends where a character was required
pub const EOF_SENTINEL: &str = "EOF";

/// Every character that may start a token
pub const EXPECTED_LEADING: &str = "number, t, f, n, \", [, ], {, }, : or ,";

/// A dot must be followed by at least one digit
pub const EXPECTED_FRACTION_DIGIT: &str = "number or .";

/// A number may contain at most one dot
pub const EXPECTED_NUMBER_END: &str = "number";

/// A string must be closed before the input ends
pub const EXPECTED_STRING_CHAR: &str = "other than EOF";

/// Lookahead kinds that can start a value
pub const EXPECTED_VALUE: &str = "number, string, boolean, null, [ or {";
