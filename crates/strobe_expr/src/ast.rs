//! AST node types for boolean expressions.

use serde::{Deserialize, Serialize};
use strobe_common::Bit;

/// A binary logic operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
}

/// A unary logic operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `not`
    Not,
}

/// A parsed boolean expression.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Expr {
    /// A `0` or `1` literal.
    Literal(Bit),
    /// A signal reference, resolved against the input bindings at
    /// evaluation time.
    Ident(String),
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand expression.
        operand: Box<Expr>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
}
