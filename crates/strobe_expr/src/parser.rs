//! Pratt parser for boolean expressions.
//!
//! Implements operator-precedence parsing with the following binding powers
//! (lowest to highest):
//!
//! 1. `and/or/xor` — one shared level, left-associative (VHDL treats the
//!    logical operators as one precedence class)
//! 2. `not` — unary prefix

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::EvalError;
use crate::lexer;
use crate::token::{ExprToken, Token};
use strobe_common::Bit;

/// Binding power for binary operators. Returns (left_bp, right_bp).
/// Left-associative: left_bp < right_bp.
fn infix_binding_power(op: &BinaryOp) -> (u8, u8) {
    match op {
        BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => (1, 2),
    }
}

/// Prefix binding power for unary operators.
fn prefix_binding_power(_op: &UnaryOp) -> u8 {
    3
}

/// Parses expression text into an [`Expr`] AST.
///
/// The whole input must be one expression; trailing tokens are an error.
pub fn parse(source: &str) -> Result<Expr, EvalError> {
    let tokens = lexer::lex(source)?;
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
    };
    let expr = parser.parse_expr_bp(0)?;
    let trailing = parser.current();
    if trailing.kind != ExprToken::Eof {
        return Err(EvalError::TrailingInput {
            offset: trailing.start as usize,
        });
    }
    Ok(expr)
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, EvalError> {
        let mut lhs = self.parse_prefix_expr()?;

        loop {
            let op = match self.current_as_binary_op() {
                Some(op) => op,
                None => break,
            };

            let (l_bp, r_bp) = infix_binding_power(&op);
            if l_bp < min_bp {
                break;
            }

            self.advance(); // consume operator token
            let rhs = self.parse_expr_bp(r_bp)?;
            lhs = Expr::Binary {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix_expr(&mut self) -> Result<Expr, EvalError> {
        let token = self.current();
        match token.kind {
            ExprToken::Not => {
                self.advance();
                let bp = prefix_binding_power(&UnaryOp::Not);
                let operand = self.parse_expr_bp(bp)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                })
            }
            ExprToken::Zero => {
                self.advance();
                Ok(Expr::Literal(Bit::Zero))
            }
            ExprToken::One => {
                self.advance();
                Ok(Expr::Literal(Bit::One))
            }
            ExprToken::Identifier => {
                self.advance();
                Ok(Expr::Ident(token.text(self.source).to_string()))
            }
            ExprToken::LeftParen => {
                self.advance();
                let inner = self.parse_expr_bp(0)?;
                let close = self.current();
                if close.kind != ExprToken::RightParen {
                    return Err(self.unexpected(close));
                }
                self.advance();
                Ok(inner)
            }
            ExprToken::Eof => Err(EvalError::UnexpectedEnd),
            _ => Err(self.unexpected(token)),
        }
    }

    fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn current_as_binary_op(&self) -> Option<BinaryOp> {
        match self.current().kind {
            ExprToken::And => Some(BinaryOp::And),
            ExprToken::Or => Some(BinaryOp::Or),
            ExprToken::Xor => Some(BinaryOp::Xor),
            _ => None,
        }
    }

    fn unexpected(&self, token: Token) -> EvalError {
        if token.kind == ExprToken::Eof {
            return EvalError::UnexpectedEnd;
        }
        EvalError::UnexpectedToken {
            found: format!("'{}'", token.text(self.source)),
            offset: token.start as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ident() {
        assert_eq!(parse("a").unwrap(), Expr::Ident("a".to_string()));
    }

    #[test]
    fn binary_and() {
        let expr = parse("a and b").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::And,
                left: Box::new(Expr::Ident("a".to_string())),
                right: Box::new(Expr::Ident("b".to_string())),
            }
        );
    }

    #[test]
    fn chain_is_left_associative() {
        // a or b or c  ==  (a or b) or c
        let expr = parse("a or b or c").unwrap();
        match expr {
            Expr::Binary { op, left, right } => {
                assert_eq!(op, BinaryOp::Or);
                assert!(matches!(*left, Expr::Binary { .. }));
                assert_eq!(*right, Expr::Ident("c".to_string()));
            }
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn not_binds_tighter_than_and() {
        // not a and b  ==  (not a) and b
        let expr = parse("not a and b").unwrap();
        match expr {
            Expr::Binary { op, left, .. } => {
                assert_eq!(op, BinaryOp::And);
                assert!(matches!(*left, Expr::Unary { .. }));
            }
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn parens_group() {
        // not (a and b) applies not to the whole conjunction
        let expr = parse("not (a and b)").unwrap();
        match expr {
            Expr::Unary { op, operand } => {
                assert_eq!(op, UnaryOp::Not);
                assert!(matches!(*operand, Expr::Binary { .. }));
            }
            other => panic!("expected unary node, got {other:?}"),
        }
    }

    #[test]
    fn literals() {
        let expr = parse("0 xor 1").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Xor,
                left: Box::new(Expr::Literal(Bit::Zero)),
                right: Box::new(Expr::Literal(Bit::One)),
            }
        );
    }

    #[test]
    fn double_not() {
        let expr = parse("not not a").unwrap();
        match expr {
            Expr::Unary { operand, .. } => assert!(matches!(*operand, Expr::Unary { .. })),
            other => panic!("expected unary node, got {other:?}"),
        }
    }

    #[test]
    fn empty_expression_fails() {
        assert_eq!(parse("").unwrap_err(), EvalError::UnexpectedEnd);
    }

    #[test]
    fn dangling_operator_fails() {
        assert_eq!(parse("a and").unwrap_err(), EvalError::UnexpectedEnd);
    }

    #[test]
    fn leading_operator_fails() {
        assert!(matches!(
            parse("and b").unwrap_err(),
            EvalError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn unclosed_paren_fails() {
        assert!(matches!(
            parse("(a or b").unwrap_err(),
            EvalError::UnexpectedToken { .. } | EvalError::UnexpectedEnd
        ));
    }

    #[test]
    fn adjacent_operands_fail() {
        assert_eq!(
            parse("a b").unwrap_err(),
            EvalError::TrailingInput { offset: 2 }
        );
    }
}
