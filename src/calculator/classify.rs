//! Character classification for calculator input.
//!
//! Every character that can appear on the display falls into one of a
//! handful of categories. The tokenizer works purely in terms of these.

/// An arithmetic operator shown on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol used for this operator on the display.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'x',
            Self::Divide => '÷',
        }
    }

    /// Look up an operator by its display symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            'x' => Some(Self::Multiply),
            '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Category of a single display character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// `0`-`9`
    Digit,
    /// `.`
    Decimal,
    /// `+`, `x` or `÷`
    Operator(Operator),
    /// `-`, which is either subtraction or a negative sign depending on context.
    Sign,
    /// Anything the calculator does not understand.
    Other,
}

impl CharClass {
    /// True for characters that act as binary operators (including `-`).
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Operator(_) | Self::Sign)
    }

    /// True for characters that can continue a number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Digit | Self::Decimal)
    }
}

/// Classify a single display character.
pub fn classify(ch: char) -> CharClass {
    match ch {
        '0'..='9' => CharClass::Digit,
        '.' => CharClass::Decimal,
        '-' => CharClass::Sign,
        other => match Operator::from_symbol(other) {
            Some(op) => CharClass::Operator(op),
            None => CharClass::Other,
        },
    }
}
