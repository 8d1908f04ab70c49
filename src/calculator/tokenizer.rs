//! Splitting display text into numbers and operators.

use std::fmt;

use super::classify::{CharClass, Operator, classify};
use super::error::CalcError;

/// A unit of a calculator expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Digits with at most one decimal point and an optional leading `-`.
    Number(String),
    Operator(Operator),
}

impl Token {
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// Combine the characters of `expression` into tokens.
///
/// Consecutive digits and decimal points become one number. A `-` becomes
/// part of the following number when a digit follows it and it starts the
/// expression or comes right after another operator; otherwise it is the
/// subtraction operator.
///
/// Fails when a number contains two decimal points or when the text holds
/// a character that is neither numeric nor an operator.
pub fn combine_numbers(expression: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let class = classify(ch);
        let followed_by_digit = chars
            .get(i + 1)
            .is_some_and(|&next| classify(next) == CharClass::Digit);
        let negative = class == CharClass::Sign
            && followed_by_digit
            && tokens.last().is_none_or(Token::is_operator);

        if negative || class.is_numeric() {
            let (number, end) = read_number(&chars, i, negative)?;
            tokens.push(Token::Number(number));
            i = end;
            continue;
        }

        match class {
            CharClass::Operator(op) => tokens.push(Token::Operator(op)),
            CharClass::Sign => tokens.push(Token::Operator(Operator::Subtract)),
            _ => return Err(CalcError::UnexpectedCharacter(ch)),
        }
        i += 1;
    }

    Ok(tokens)
}

/// Read a number starting at `start`, returning it and the index after it.
fn read_number(
    chars: &[char],
    start: usize,
    negative: bool,
) -> Result<(String, usize), CalcError> {
    let mut number = String::new();
    let mut i = start;
    if negative {
        number.push('-');
        i += 1;
    }

    let mut has_decimal = false;
    while let Some(&ch) = chars.get(i)
        && classify(ch).is_numeric()
    {
        if ch == '.' {
            if has_decimal {
                number.push(ch);
                return Err(CalcError::MultipleDecimalPoints(number));
            }
            has_decimal = true;
        }
        number.push(ch);
        i += 1;
    }

    Ok((number, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    fn combined(expression: &str) -> Vec<String> {
        render(&combine_numbers(expression).unwrap())
    }

    #[test]
    fn test_merges_digits() {
        assert_eq!(combined("12+345"), ["12", "+", "345"]);
        assert_eq!(combined("9÷3"), ["9", "÷", "3"]);
        assert_eq!(combined("1.5x2"), ["1.5", "x", "2"]);
        assert_eq!(combined(".5+5."), [".5", "+", "5."]);
    }

    #[test]
    fn test_negative_after_operator() {
        assert_eq!(combined("5+-3"), ["5", "+", "-3"]);
        assert_eq!(combined("12x-4÷2"), ["12", "x", "-4", "÷", "2"]);
        assert_eq!(combined("5--3"), ["5", "-", "-3"]);
    }

    #[test]
    fn test_subtraction_after_digit() {
        assert_eq!(combined("5-3"), ["5", "-", "3"]);
        assert_eq!(combined("3-"), ["3", "-"]);
    }

    #[test]
    fn test_leading_negative() {
        assert_eq!(combined("-3"), ["-3"]);
        assert_eq!(combined("-3.25+1"), ["-3.25", "+", "1"]);
    }

    #[test]
    fn test_minus_without_digit_stays_operator() {
        assert_eq!(combined("-"), ["-"]);
        assert_eq!(combined("--3"), ["-", "-3"]);
        assert_eq!(combined("-.5"), ["-", ".5"]);
        assert_eq!(
            combine_numbers("-").unwrap(),
            vec![Token::Operator(Operator::Subtract)]
        );
    }

    #[test]
    fn test_empty_expression() {
        assert!(combine_numbers("").unwrap().is_empty());
    }

    #[test]
    fn test_multiple_decimal_points() {
        assert_eq!(
            combine_numbers("1.2.3"),
            Err(CalcError::MultipleDecimalPoints("1.2.".into()))
        );
        assert!(combine_numbers(".5.3").is_err());
        assert!(combine_numbers("4+1..").is_err());
    }

    #[test]
    fn test_decimal_points_in_separate_numbers() {
        assert_eq!(combined("1.5+2.5"), ["1.5", "+", "2.5"]);
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            combine_numbers("2*3"),
            Err(CalcError::UnexpectedCharacter('*'))
        );
    }

    #[test]
    fn test_operators_only() {
        assert_eq!(combined("+x÷"), ["+", "x", "÷"]);
    }
}
