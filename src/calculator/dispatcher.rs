//! Routing of keypad inputs to the display buffer and the evaluator.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use super::buffer::{DisplayBuffer, MAX_LEN};
use super::classify::{CharClass, Operator, classify};
use super::evaluation::{CalcResult, evaluate_expression_fit};
use super::math::MAX_NUM_LEN;

/// Error for input tokens the calculator does not recognise.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown input {0:?}")]
    Unknown(String),
}

/// A single keypad action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Digit(char),
    Decimal,
    Operator(Operator),
    /// The `(-)` key: types a minus sign.
    Negate,
    Clear,
    Back,
    Enter,
}

impl Input {
    /// True for inputs that type a character onto the display.
    pub fn is_append(self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Decimal | Self::Operator(_) | Self::Negate
        )
    }
}

impl FromStr for Input {
    type Err = InputError;

    /// Parse a keypad token: `0`-`9`, `.`, `+`, `-`, `x`, `÷`, `(-)`,
    /// `CLEAR`, `BACK`/`BACKSPACE` or `ENTER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "(-)" {
            return Ok(Self::Negate);
        }

        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            match classify(ch) {
                CharClass::Digit => return Ok(Self::Digit(ch)),
                CharClass::Decimal => return Ok(Self::Decimal),
                CharClass::Operator(op) => return Ok(Self::Operator(op)),
                CharClass::Sign => return Ok(Self::Operator(Operator::Subtract)),
                CharClass::Other => {}
            }
        }

        match s.to_ascii_uppercase().as_str() {
            "CLEAR" => Ok(Self::Clear),
            "BACK" | "BACKSPACE" => Ok(Self::Back),
            "ENTER" => Ok(Self::Enter),
            _ => Err(InputError::Unknown(s.to_string())),
        }
    }
}

/// Options that shape calculator behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Maximum number of characters that can be typed.
    pub max_len: usize,
    /// Display budget for rounding quotients.
    pub max_result_len: usize,
    /// Whether typing after a numeric result starts a new expression.
    pub clear_on_result: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            max_len: MAX_LEN,
            max_result_len: MAX_NUM_LEN,
            clear_on_result: false,
        }
    }
}

/// A calculator instance: the display plus the last evaluation.
///
/// Inputs are applied one at a time. Error sentinels are cleared by any
/// following input. Numeric results stay on the display and further typing
/// appends to them unless `clear_on_result` is set.
#[derive(Clone, Debug)]
pub struct Calculator {
    buffer: DisplayBuffer,
    options: CalculatorOptions,
    last_result: Option<CalcResult>,
    showing_result: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_options(CalculatorOptions::default())
    }

    pub fn with_options(options: CalculatorOptions) -> Self {
        Self {
            buffer: DisplayBuffer::with_max_len(options.max_len),
            options,
            last_result: None,
            showing_result: false,
        }
    }

    /// Parse and apply one input token.
    pub fn submit_input(&mut self, token: &str) -> Result<(), InputError> {
        let input = token.parse::<Input>().inspect_err(|e| {
            warn!(error = %e, "rejected input");
        })?;
        self.apply(input);
        Ok(())
    }

    /// Apply one input.
    pub fn apply(&mut self, input: Input) {
        if self.buffer.is_error() {
            self.buffer.clear();
        } else if self.showing_result && self.options.clear_on_result && input.is_append() {
            self.buffer.clear();
        }
        self.showing_result = false;

        let appended = match input {
            Input::Digit(ch) => self.buffer.append(ch),
            Input::Decimal => self.buffer.append('.'),
            Input::Operator(op) => self.buffer.append(op.symbol()),
            Input::Negate => self.buffer.negate(),
            Input::Clear => {
                self.buffer.clear();
                true
            }
            Input::Back => {
                self.buffer.delete_last();
                true
            }
            Input::Enter => {
                self.evaluate();
                true
            }
        };

        if !appended {
            debug!(?input, max_len = self.buffer.max_len(), "display full");
        }
    }

    fn evaluate(&mut self) {
        let result = evaluate_expression_fit(
            self.buffer.as_str(),
            self.options.max_result_len,
            self.options.max_len,
        );
        match result.error() {
            None => debug!(
                expression = result.expression(),
                result = result.display(),
                "evaluated"
            ),
            Some(error) => warn!(
                expression = result.expression(),
                %error,
                "evaluation failed"
            ),
        }

        self.buffer.set_result(result.display());
        self.showing_result = result.is_success();
        self.last_result = Some(result);
    }

    /// Text to render on the display.
    pub fn display_text(&self) -> &str {
        self.buffer.as_str()
    }

    /// The outcome of the most recent ENTER, if any.
    pub fn last_result(&self) -> Option<&CalcResult> {
        self.last_result.as_ref()
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }
}
