//! Token types for the boolean expression lexer.

use serde::{Deserialize, Serialize};

/// A token kind in the closed expression grammar.
///
/// The grammar admits exactly the literals `0` and `1`, identifiers, the
/// keyword operators `and`/`or`/`xor`/`not` (case-insensitive, VHDL
/// convention), and parentheses. Identifier text is not stored in the
/// token; it is retrieved from the expression text using the token's
/// offsets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ExprToken {
    /// The literal `0`.
    Zero,
    /// The literal `1`.
    One,
    /// A signal identifier.
    Identifier,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `not`
    Not,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End of expression.
    Eof,
}

/// A lexed token with its kind and byte offsets into the expression text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Token {
    /// The kind of this token.
    pub kind: ExprToken,
    /// Byte offset of the start of the token (inclusive).
    pub start: u32,
    /// Byte offset of the end of the token (exclusive).
    pub end: u32,
}

impl Token {
    /// Returns the source text covered by this token.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }
}

/// Looks up a keyword operator from a lowercase identifier string.
///
/// Returns `None` if the string is a regular identifier.
pub fn lookup_keyword(s: &str) -> Option<ExprToken> {
    match s {
        "and" => Some(ExprToken::And),
        "or" => Some(ExprToken::Or),
        "xor" => Some(ExprToken::Xor),
        "not" => Some(ExprToken::Not),
        _ => None,
    }
}
