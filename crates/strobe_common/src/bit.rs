//! Two-state logic values with truth-table-based operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// A single driven logic value.
///
/// Strobe simulates purely combinational assignments over driven inputs, so
/// only the two driven states exist. The `X` seen in reports is a sentinel
/// for "no expectation given", rendered by the runner; it is never a value
/// the engine computes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
}

impl Bit {
    /// Converts a character to a [`Bit`]. Accepts `'0'` and `'1'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }
}

/// Error returned when parsing a string that is not `"0"` or `"1"`.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("not a logic value: {text:?}")]
pub struct ParseBitError {
    /// The rejected input text.
    pub text: String,
}

impl FromStr for Bit {
    type Err = ParseBitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Bit::from_char(c),
            _ => None,
        }
        .ok_or_else(|| ParseBitError {
            text: s.to_string(),
        })
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

/// AND truth table:
/// ```text
///     0  1
/// 0 | 0  0
/// 1 | 0  1
/// ```
impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Bit::One, Bit::One) => Bit::One,
            _ => Bit::Zero,
        }
    }
}

/// OR truth table:
/// ```text
///     0  1
/// 0 | 0  1
/// 1 | 1  1
/// ```
impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Bit::Zero, Bit::Zero) => Bit::Zero,
            _ => Bit::One,
        }
    }
}

/// XOR truth table:
/// ```text
///     0  1
/// 0 | 0  1
/// 1 | 1  0
/// ```
impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        if self == rhs {
            Bit::Zero
        } else {
            Bit::One
        }
    }
}

/// NOT: `!0 = 1`, `!1 = 0`.
impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}
