//! Postfix (reverse Polish) arithmetic over `f64`.
//!
//! An expression is a whitespace-separated sequence of numerals and the binary
//! operators `+ - * /`, where every operator follows its two operands.

pub mod config;
pub mod ffi;
pub mod rpn_evaluator;
pub mod session;
pub mod tokenizer;

use thiserror::Error;

use crate::rpn_evaluator::{RpnEvaluator, RpnEvaluatorError};
use crate::tokenizer::{Tokenizer, TokenizerError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Tokenize(#[from] TokenizerError),
    #[error("malformed expression: {0}")]
    Evaluate(#[from] RpnEvaluatorError),
}

impl Error {
    /// True for tokens that are neither numerals nor operators.
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, Error::Tokenize(TokenizerError::InvalidToken { .. }))
    }

    /// True when the tokens are valid but do not reduce to exactly one value.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Evaluate(_))
    }
}

/// Evaluates a whitespace-separated postfix expression.
///
/// ```
/// assert_eq!(postfix_calc::evaluate("3").unwrap(), 3.0);
/// assert_eq!(postfix_calc::evaluate("1 3 + 2 7 - /").unwrap(), -0.8);
/// assert!(postfix_calc::evaluate("1 +").unwrap_err().is_malformed());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let tokens = Tokenizer::new().tokenize(expression)?;
    Ok(RpnEvaluator::evaluate(&tokens)?)
}

/// Renders a result for display.
///
/// With a precision the value is printed with that many fractional digits.
/// Without one, the shortest representation that parses back to the same
/// value is used, keeping a trailing `.0` on integral values.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => format!("{:?}", value),
    }
}
