//! Evaluation error types.
//!
//! Every way an expression can fail to produce a value is a variant of
//! [`EvalError`]. The test runner absorbs these per vector; nothing here
//! aborts a batch.

/// Errors that can occur while lexing, parsing, or evaluating an expression.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A character outside the expression grammar was encountered.
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the expression text.
        offset: usize,
    },

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken {
        /// Human-readable description of the offending token.
        found: String,
        /// Byte offset of the token in the expression text.
        offset: usize,
    },

    /// The expression ended in the middle of a construct.
    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    /// Input remained after a complete expression was parsed.
    #[error("trailing input after expression at offset {offset}")]
    TrailingInput {
        /// Byte offset where the trailing input begins.
        offset: usize,
    },

    /// An identifier had no binding in the input map.
    #[error("unresolved identifier '{0}'")]
    UnresolvedIdent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unresolved() {
        let err = EvalError::UnresolvedIdent("sel".to_string());
        assert_eq!(format!("{err}"), "unresolved identifier 'sel'");
    }

    #[test]
    fn display_unexpected_char() {
        let err = EvalError::UnexpectedChar { ch: '&', offset: 2 };
        assert_eq!(format!("{err}"), "unexpected character '&' at offset 2");
    }

    #[test]
    fn display_trailing_input() {
        let err = EvalError::TrailingInput { offset: 4 };
        assert_eq!(format!("{err}"), "trailing input after expression at offset 4");
    }
}
