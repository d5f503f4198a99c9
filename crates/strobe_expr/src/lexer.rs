//! Lexical analyzer for boolean expression text.
//!
//! Converts expression text into a sequence of [`Token`]s over the closed
//! grammar `0 1 identifier and or not xor ( )`. Keywords are matched
//! case-insensitively; identifiers keep their original spelling. Anything
//! outside the grammar is a hard [`EvalError`], not a recoverable token,
//! since a single expression is the whole input.

use crate::error::EvalError;
use crate::token::{lookup_keyword, ExprToken, Token};

/// Lexes expression text into tokens.
///
/// Whitespace is skipped. The returned vector always ends with an
/// [`ExprToken::Eof`] token.
pub fn lex(source: &str) -> Result<Vec<Token>, EvalError> {
    let mut lexer = Lexer {
        source: source.as_bytes(),
        text: source,
        pos: 0,
    };
    lexer.lex_all()
}

struct Lexer<'a> {
    source: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl Lexer<'_> {
    fn lex_all(&mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();
        loop {
            while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.source.len() {
                tokens.push(self.token_at(ExprToken::Eof, self.pos));
                return Ok(tokens);
            }
            tokens.push(self.next_token()?);
        }
    }

    fn next_token(&mut self) -> Result<Token, EvalError> {
        let start = self.pos;
        let b = self.source[self.pos];

        if b == b'(' {
            self.pos += 1;
            return Ok(self.token_at(ExprToken::LeftParen, start));
        }
        if b == b')' {
            self.pos += 1;
            return Ok(self.token_at(ExprToken::RightParen, start));
        }

        // Literals: a lone 0 or 1 not glued to an identifier tail.
        if b.is_ascii_digit() {
            if (b == b'0' || b == b'1') && !is_ident_char(self.peek_at(1)) {
                self.pos += 1;
                let kind = if b == b'0' {
                    ExprToken::Zero
                } else {
                    ExprToken::One
                };
                return Ok(self.token_at(kind, start));
            }
            return Err(self.unexpected_char(start));
        }

        if is_ident_start(b) {
            while self.pos < self.source.len() && is_ident_char(self.source[self.pos]) {
                self.pos += 1;
            }
            let word = &self.text[start..self.pos];
            let kind = lookup_keyword(&word.to_ascii_lowercase()).unwrap_or(ExprToken::Identifier);
            return Ok(self.token_at(kind, start));
        }

        Err(self.unexpected_char(start))
    }

    fn token_at(&self, kind: ExprToken, start: usize) -> Token {
        Token {
            kind,
            start: start as u32,
            end: self.pos as u32,
        }
    }

    fn unexpected_char(&self, offset: usize) -> EvalError {
        let ch = self.text[offset..].chars().next().unwrap_or('\0');
        EvalError::UnexpectedChar { ch, offset }
    }

    fn peek_at(&self, offset: usize) -> u8 {
        let idx = self.pos + offset;
        if idx < self.source.len() {
            self.source[idx]
        } else {
            0
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
