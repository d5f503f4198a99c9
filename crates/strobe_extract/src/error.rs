//! Error types for assignment extraction.

/// Errors that can occur while extracting an assignment from a document.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The document contains no `target <= expression;` statement.
    #[error("no logic assignment found in document")]
    NoAssignmentFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", ExtractError::NoAssignmentFound),
            "no logic assignment found in document"
        );
    }
}
