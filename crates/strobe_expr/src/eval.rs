//! AST evaluation against input bindings.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::EvalError;
use std::collections::BTreeMap;
use strobe_common::Bit;

/// Input bindings: signal name to driven value.
pub type Bindings = BTreeMap<String, Bit>;

/// Evaluates a parsed expression against the given bindings.
///
/// Identifiers resolve by exact name; an identifier with no binding is an
/// [`EvalError::UnresolvedIdent`]. Signals are whole tokens, so a binding
/// for `a` never touches a signal named `ab`.
pub fn eval_expr(expr: &Expr, inputs: &Bindings) -> Result<Bit, EvalError> {
    match expr {
        Expr::Literal(bit) => Ok(*bit),
        Expr::Ident(name) => inputs
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnresolvedIdent(name.clone())),
        Expr::Unary { op, operand } => {
            let value = eval_expr(operand, inputs)?;
            match op {
                UnaryOp::Not => Ok(!value),
            }
        }
        Expr::Binary { op, left, right } => {
            let l = eval_expr(left, inputs)?;
            let r = eval_expr(right, inputs)?;
            Ok(match op {
                BinaryOp::And => l & r,
                BinaryOp::Or => l | r,
                BinaryOp::Xor => l ^ r,
            })
        }
    }
}
