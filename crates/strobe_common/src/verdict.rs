//! Per-vector pass/fail classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of comparing one vector's computed output to its expectation.
///
/// `MissingExpected` is distinct from `Fail`: it means the vector file
/// carried no `expected_<target>` entry at all, which is a test-data
/// problem, not a logic mismatch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Verdict {
    /// Computed output matched the expected value exactly.
    Pass,
    /// Computed output did not match the expected value.
    Fail,
    /// The vector had no expected value for the target signal.
    MissingExpected,
}

impl Verdict {
    /// Returns `true` only for [`Verdict::Pass`].
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
            Verdict::MissingExpected => write!(f, "MISSING_EXPECTED"),
        }
    }
}
