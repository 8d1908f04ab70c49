//! Strict left-to-right evaluation of token sequences.
//!
//! There is no operator precedence: `2+3x4` is `(2+3)x4 = 20`.

use serde::Serialize;
use tracing::debug;

use super::buffer::MAX_LEN;
use super::error::CalcError;
use super::math::{MAX_NUM_LEN, fit_to_width, format_number, operate_fit};
use super::tokenizer::{Token, combine_numbers};

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// The expression reduced to a single finite number.
    Success {
        /// The expression as typed.
        expression: String,
        /// The numeric value.
        value: f64,
        /// The value as shown on the display.
        display_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The expression as typed.
        expression: String,
        /// Why evaluation failed.
        #[serde(serialize_with = "serialize_error")]
        error: CalcError,
    },
}

fn serialize_error<S: serde::Serializer>(error: &CalcError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.to_string())
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error sentinel).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { error, .. } => error.sentinel(),
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success { display_result, .. } => Some(display_result),
            Self::Error { .. } => None,
        }
    }

    /// The error, if evaluation failed.
    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

/// Tokenize and evaluate a display snapshot.
pub fn evaluate_expression(input: &str) -> CalcResult {
    evaluate_expression_fit(input, MAX_NUM_LEN, MAX_LEN)
}

/// Tokenize and evaluate a display snapshot.
///
/// Quotients are rounded to `quotient_width` characters and the final
/// value to `display_width`, so a result always fits the display.
pub fn evaluate_expression_fit(
    input: &str,
    quotient_width: usize,
    display_width: usize,
) -> CalcResult {
    let expression = input.to_string();

    let outcome = combine_numbers(input)
        .and_then(|tokens| {
            debug!(?tokens, "combined expression");
            evaluate_tokens_fit(&tokens, quotient_width)
        })
        .and_then(|value| fit_to_display(value, display_width));

    match outcome {
        Ok((value, display_result)) => CalcResult::Success {
            expression,
            display_result,
            value,
        },
        Err(error) => CalcResult::Error { expression, error },
    }
}

/// Round a final value to `width` and render it.
fn fit_to_display(value: f64, width: usize) -> Result<(f64, String), CalcError> {
    let value = fit_to_width(value, width);
    let text = format_number(value);
    if text.chars().count() > width {
        return Err(CalcError::Overflow(text));
    }
    Ok((value, text))
}

/// Reduce `tokens` strictly left to right.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, CalcError> {
    evaluate_tokens_fit(tokens, MAX_NUM_LEN)
}

/// Reduce `tokens` strictly left to right, rounding quotients to `width`.
///
/// The sequence must alternate number, operator, number, ... and start and
/// end with a number. The first failing step ends the evaluation.
pub fn evaluate_tokens_fit(tokens: &[Token], width: usize) -> Result<f64, CalcError> {
    let (first, rest) = tokens
        .split_first()
        .ok_or(CalcError::MalformedExpression { tokens: 0 })?;

    let mut acc = parse_operand(first)?;
    let mut pairs = rest.chunks_exact(2);
    for pair in &mut pairs {
        let operator = match &pair[0] {
            Token::Operator(op) => *op,
            Token::Number(text) => return Err(CalcError::ExpectedOperator(text.clone())),
        };
        let operand = parse_operand(&pair[1])?;
        acc = operate_fit(acc, operator, operand, width)?;
    }

    // a dangling operator leaves one token unconsumed
    if !pairs.remainder().is_empty() {
        return Err(CalcError::MalformedExpression {
            tokens: 1 + pairs.remainder().len(),
        });
    }

    Ok(acc)
}

fn parse_operand(token: &Token) -> Result<f64, CalcError> {
    match token {
        Token::Number(text) => text
            .parse::<f64>()
            .map_err(|_| CalcError::UnparsableNumber(text.clone())),
        Token::Operator(op) => Err(CalcError::UnparsableNumber(op.symbol().to_string())),
    }
}
