//! Calculator module for keypad-driven arithmetic.
//!
//! This module provides functionality to:
//! - Accumulate keypad input in a bounded display buffer
//! - Combine the display text into number and operator tokens
//! - Evaluate tokens strictly left to right
//! - Copy results to the clipboard

mod buffer;
mod classify;
mod clipboard;
mod dispatcher;
mod error;
mod evaluation;
mod math;
mod tokenizer;

pub use buffer::{DisplayBuffer, MAX_LEN};
pub use classify::{CharClass, Operator, classify};
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use dispatcher::{Calculator, CalculatorOptions, Input, InputError};
pub use error::{CalcError, DIV_BY_ZERO, INVALID};
pub use evaluation::{
    CalcResult, evaluate_expression, evaluate_expression_fit, evaluate_tokens, evaluate_tokens_fit,
};
pub use math::{
    MAX_NUM_LEN, add, divide, divide_fit, fit_to_width, format_number, multiply, operate,
    operate_fit, subtract,
};
pub use tokenizer::{Token, combine_numbers};
