//! Boolean expression engine over a closed grammar.
//!
//! Evaluates the right-hand side of an extracted assignment against a map
//! of input values. The grammar is exactly `0`, `1`, identifiers, `and`,
//! `or`, `not`, `xor`, and parentheses; anything else fails to lex.
//! Identifiers are bound against the input map at evaluation time, never
//! substituted into the expression text.
//!
//! # Architecture
//!
//! - **Lexer** ([`lexer`]): expression text to tokens, case-insensitive
//!   keywords.
//! - **Parser** ([`parser`]): Pratt parser producing an [`Expr`] AST.
//! - **Evaluator** ([`eval`]): AST walk over [`Bit`] operands.

#![warn(missing_docs)]

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::EvalError;
pub use eval::{eval_expr, Bindings};
pub use token::{ExprToken, Token};

use strobe_common::Bit;

/// Parses and evaluates an expression against the given input bindings.
///
/// Pure function: the same expression and bindings always produce the same
/// result. All failure modes — foreign characters, malformed syntax,
/// unresolved identifiers — surface as [`EvalError`]; callers running
/// batches absorb the error per vector rather than aborting.
pub fn evaluate(expression: &str, inputs: &Bindings) -> Result<Bit, EvalError> {
    let expr = parser::parse(expression)?;
    eval_expr(&expr, inputs)
}
