//! Evaluation errors and the display sentinels they map to.

use thiserror::Error;

/// Sentinel shown for any malformed expression.
pub const INVALID: &str = "#INVALID";

/// Sentinel shown when dividing by zero.
pub const DIV_BY_ZERO: &str = "#DIV BY 0";

/// Why an expression could not be evaluated.
///
/// The variants carry enough detail for logging; the display only ever
/// shows the [`sentinel`](CalcError::sentinel) for the error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("number {0:?} has more than one decimal point")]
    MultipleDecimalPoints(String),

    #[error("unexpected character {0:?} in expression")]
    UnexpectedCharacter(char),

    #[error("expression reduced to {tokens} tokens instead of one")]
    MalformedExpression { tokens: usize },

    #[error("{0:?} is not a number")]
    UnparsableNumber(String),

    #[error("expected an operator, found {0:?}")]
    ExpectedOperator(String),

    #[error("operation produced a value that is not a finite number")]
    NotANumber,

    #[error("result {0:?} does not fit the display")]
    Overflow(String),

    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// The display sentinel for this error.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::DivisionByZero => DIV_BY_ZERO,
            _ => INVALID,
        }
    }
}
