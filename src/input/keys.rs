//! Keyboard key mapping.
//!
//! Keyboards have no `÷` or `x` keys, so `/` and `*` stand in for them.
//! Named keys follow the usual browser key names.

use crate::calculator::{Input, Operator};

/// Map a typed character to a calculator input.
pub fn char_to_input(ch: char) -> Option<Input> {
    match ch {
        '0'..='9' => Some(Input::Digit(ch)),
        '.' => Some(Input::Decimal),
        '*' => Some(Input::Operator(Operator::Multiply)),
        '/' => Some(Input::Operator(Operator::Divide)),
        other => Operator::from_symbol(other).map(Input::Operator),
    }
}

/// Map a key name (`Enter`, `Backspace`, `Escape`) or a single character
/// key to a calculator input. Unmapped keys return `None`.
pub fn key_to_input(key: &str) -> Option<Input> {
    let mut chars = key.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return char_to_input(ch);
    }

    match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => Some(Input::Enter),
        "backspace" => Some(Input::Back),
        "escape" | "esc" => Some(Input::Clear),
        _ => None,
    }
}
