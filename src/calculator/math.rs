//! Arithmetic primitives and number rendering.

use super::classify::Operator;
use super::error::CalcError;

/// Widest quotient, in characters, that division leaves unrounded.
pub const MAX_NUM_LEN: usize = 9;

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Divide two numbers, rounding the quotient to fit [`MAX_NUM_LEN`].
pub fn divide(x: f64, y: f64) -> Result<f64, CalcError> {
    divide_fit(x, y, MAX_NUM_LEN)
}

/// Divide two numbers, rounding the quotient so it renders in at most
/// `width` characters where the integer part allows.
pub fn divide_fit(x: f64, y: f64, width: usize) -> Result<f64, CalcError> {
    // -0.0 == 0.0, so a negative zero divisor is caught too
    if y == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(fit_to_width(x / y, width))
}

/// Apply `operator` to two operands.
pub fn operate(num1: f64, operator: Operator, num2: f64) -> Result<f64, CalcError> {
    operate_fit(num1, operator, num2, MAX_NUM_LEN)
}

/// Apply `operator` to two operands, with `width` as the division display budget.
pub fn operate_fit(
    num1: f64,
    operator: Operator,
    num2: f64,
    width: usize,
) -> Result<f64, CalcError> {
    let result = match operator {
        Operator::Add => add(num1, num2),
        Operator::Subtract => subtract(num1, num2),
        Operator::Multiply => multiply(num1, num2),
        Operator::Divide => divide_fit(num1, num2, width)?,
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NotANumber)
    }
}

/// Round `value` so its rendering is at most `width` characters long.
///
/// The integer part (sign included) is never shortened; only decimal
/// places are dropped. When the integer part alone is too wide the value
/// is rounded to a whole number.
pub fn fit_to_width(value: f64, width: usize) -> f64 {
    let text = format_number(value);
    if text.len() <= width {
        return value;
    }

    let int_len = text.split('.').next().map_or(text.len(), str::len);
    // one column goes to the decimal point itself
    let decimals = width.saturating_sub(int_len + 1);
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Render a number the way the calculator display shows it.
///
/// Whole numbers have no trailing `.0`, negative zero shows as `0`, and
/// very large or very small magnitudes switch to exponent notation
/// (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}
