//! The extracted signal assignment.

use serde::{Deserialize, Serialize};

/// One `target <= expression;` statement lifted out of a source document.
///
/// Both fields are raw text: `target` is the identifier on the left of the
/// assignment token, `expression` is everything between `<=` and the
/// terminating `;`, with surrounding whitespace trimmed. The expression is
/// not parsed here; that is the expression engine's job.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Assignment {
    /// The driven signal name.
    pub target: String,
    /// The raw right-hand-side expression text.
    pub expression: String,
}
