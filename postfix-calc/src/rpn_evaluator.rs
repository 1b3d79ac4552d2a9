use thiserror::Error;
use tracing::{debug, trace};

use crate::tokenizer::{Op, Token, TokenizedInput};

pub struct RpnEvaluator {}

/// Ways a token sequence can fail to reduce to exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RpnEvaluatorError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("not enough operands for '{op}' at position {position}")]
    NotEnoughOperands { op: Op, position: usize },
    #[error("too many operands: {remaining} values left on the stack")]
    TooManyOperands { remaining: usize },
}

impl RpnEvaluator {
    /// Evaluates a postfix token sequence in a single pass.
    ///
    /// Numbers are pushed onto the evaluation stack. An operator pops its right
    /// operand first and its left operand second, then pushes `left op right`.
    /// The expression is well-formed only if exactly one value is left at the end.
    pub fn evaluate(tokens: &TokenizedInput) -> Result<f64, RpnEvaluatorError> {
        if tokens.is_empty() {
            return Err(RpnEvaluatorError::EmptyExpression);
        }

        let mut eval_stack: Vec<f64> = Vec::with_capacity(tokens.len());

        for (position, token) in tokens.iter().enumerate() {
            match *token {
                Token::Number(num) => {
                    trace!(target: "postfix_calc::rpn_evaluator", position, num, "push");
                    eval_stack.push(num);
                }
                Token::BinaryOp(op) => {
                    let (Some(b), Some(a)) = (eval_stack.pop(), eval_stack.pop()) else {
                        return Err(RpnEvaluatorError::NotEnoughOperands { op, position });
                    };
                    let result = op.apply(a, b);
                    trace!(
                        target: "postfix_calc::rpn_evaluator",
                        position,
                        lhs = a,
                        rhs = b,
                        op = op.symbol(),
                        result,
                        "reduce"
                    );
                    eval_stack.push(result);
                }
            }
        }

        match eval_stack.as_slice() {
            [result] => {
                debug!(result = *result, "evaluated expression");
                Ok(*result)
            }
            rest => Err(RpnEvaluatorError::TooManyOperands {
                remaining: rest.len(),
            }),
        }
    }
}
