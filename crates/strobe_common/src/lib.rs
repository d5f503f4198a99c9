//! Shared foundational types used across the Strobe simulator.
//!
//! This crate provides the two-state logic value used by the expression
//! engine and the per-vector verdict type used by the test runner and CLI.

#![warn(missing_docs)]

pub mod bit;
pub mod verdict;

pub use bit::{Bit, ParseBitError};
pub use verdict::Verdict;
