use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Mult,
    Div,
}

impl Op {
    /// Returns the operator denoted by `symbol`, if any.
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Plus),
            "-" => Some(Op::Minus),
            "*" => Some(Op::Mult),
            "/" => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Mult => "*",
            Op::Div => "/",
        }
    }

    /// Applies the operator with `lhs` on the left and `rhs` on the right.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Plus => lhs + rhs,
            Op::Minus => lhs - rhs,
            Op::Mult => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    BinaryOp(Op),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A token that is neither a numeral nor one of `+ - * /`.
    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct TokenizedInput(pub Vec<Token>);

impl std::ops::Deref for TokenizedInput {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for TokenizedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, token) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match token {
                Token::Number(num) => write!(f, "{}", num)?,
                Token::BinaryOp(op) => write!(f, "{}", op)?,
            }
        }
        Ok(())
    }
}

/// Splits a postfix expression into tokens.
///
/// Tokens are separated by whitespace. Every token must be either an operator
/// symbol or something `f64::from_str` accepts; anything else is rejected up
/// front instead of being skipped.
#[derive(Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, input: &str) -> Result<TokenizedInput, TokenizerError> {
        let tokens = input
            .split_whitespace()
            .enumerate()
            .map(|(position, raw)| Self::classify(position, raw))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = tokens.len(), "tokenized expression");

        Ok(TokenizedInput(tokens))
    }

    fn classify(position: usize, raw: &str) -> Result<Token, TokenizerError> {
        // Operators first: "-" alone must never reach the float parser.
        if let Some(op) = Op::from_symbol(raw) {
            return Ok(Token::BinaryOp(op));
        }

        raw.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| TokenizerError::InvalidToken {
                token: raw.to_string(),
                position,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("3 2.2 * 1 + 1 2 / -").unwrap(),
            TokenizedInput(vec![
                Token::Number(3.0),
                Token::Number(2.2),
                Token::BinaryOp(Op::Mult),
                Token::Number(1.0),
                Token::BinaryOp(Op::Plus),
                Token::Number(1.0),
                Token::Number(2.0),
                Token::BinaryOp(Op::Div),
                Token::BinaryOp(Op::Minus),
            ])
        );
    }

    #[test]
    fn test_tokenizer_mixed_whitespace() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("  1\t2\n+  ").unwrap(),
            TokenizedInput(vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::BinaryOp(Op::Plus),
            ])
        );
    }

    #[test]
    fn test_tokenizer_signed_and_exponent_numerals() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("-3 +4 1e3 .5").unwrap(),
            TokenizedInput(vec![
                Token::Number(-3.0),
                Token::Number(4.0),
                Token::Number(1000.0),
                Token::Number(0.5),
            ])
        );
    }

    #[test]
    fn test_tokenizer_rejects_digit_separators() {
        // Numerals follow `f64::from_str`, which has no `_` separators.
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("1_000 2 +").unwrap_err(),
            TokenizerError::InvalidToken {
                token: "1_000".to_string(),
                position: 0,
            }
        );
    }

    #[test]
    fn test_tokenizer_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_tokenizer_invalid_token() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("1 2 ^").unwrap_err(),
            TokenizerError::InvalidToken {
                token: "^".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn test_tokenizer_glued_operator_is_invalid() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("1 2+").unwrap_err(),
            TokenizerError::InvalidToken {
                token: "2+".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_display_round_trips_through_tokenizer() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("1 3   + 2.5 7 - /").unwrap();
        assert_eq!(tokens.to_string(), "1 3 + 2.5 7 - /");
        assert_eq!(tokenizer.tokenize(&tokens.to_string()).unwrap(), tokens);
    }

    #[test]
    fn test_op_apply_binds_left_operand_first() {
        assert_eq!(Op::Minus.apply(1.0, 3.0), -2.0);
        assert_eq!(Op::Div.apply(1.0, 4.0), 0.25);
        assert_eq!(Op::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(Op::Div.apply(0.0, 0.0).is_nan());
    }
}
