//! Assignment extraction from HDL documents.
//!
//! Strobe's source model is deliberately narrow: a document is interesting
//! only for its first concurrent signal assignment of the form
//! `target <= expression;`. This crate scans raw source text for that
//! pattern, skipping VHDL line comments, and returns the target signal name
//! and the raw right-hand-side expression text.
//!
//! [`extract`] returns the first assignment; [`scan_assignments`] returns
//! all of them, for callers that want to diagnose documents carrying more
//! than one.

#![warn(missing_docs)]

pub mod assignment;
pub mod error;
pub mod scanner;

pub use assignment::Assignment;
pub use error::ExtractError;
pub use scanner::scan_assignments;

/// Extracts the first signal assignment from a source document.
///
/// Pure function over the document text. Later assignments are ignored;
/// callers that want to diagnose them should use [`scan_assignments`].
pub fn extract(source: &str) -> Result<Assignment, ExtractError> {
    scan_assignments(source)
        .into_iter()
        .next()
        .ok_or(ExtractError::NoAssignmentFound)
}
