//! Keystroke-driven pocket calculator engine.
//!
//! Keypad inputs accumulate in a bounded display buffer. On ENTER the
//! display text is combined into number and operator tokens and reduced
//! strictly left to right, with no operator precedence. Failures show as
//! the sentinels `#INVALID` and `#DIV BY 0` instead of escaping to the
//! caller.

pub mod calculator;
pub mod config;
pub mod input;

pub use calculator::{CalcResult, Calculator, CalculatorOptions, Input};
pub use config::Config;
