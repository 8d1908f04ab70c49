//! The calculator display buffer.

/// Default number of characters the user can type.
pub const MAX_LEN: usize = 10;

/// Bounded text accumulator behind the calculator display.
///
/// Holds either the expression being typed, the last numeric result, or an
/// error sentinel (text starting with `#`). Typing into an error sentinel
/// replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
    max_len: usize,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::with_max_len(MAX_LEN)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters (`÷` counts as one).
    pub fn len(&self) -> usize {
        self.chars().count()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True when the buffer holds an error sentinel.
    pub fn is_error(&self) -> bool {
        self.text.starts_with('#')
    }

    /// Append a character, replacing an error sentinel first.
    ///
    /// Returns `false` when the buffer is full and nothing was appended.
    pub fn append(&mut self, ch: char) -> bool {
        if self.is_error() {
            self.clear();
        }
        if self.len() >= self.max_len {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Append a `-` sign. Its meaning is decided at tokenization time.
    pub fn negate(&mut self) -> bool {
        self.append('-')
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Remove the last character, or the whole sentinel in an error state.
    pub fn delete_last(&mut self) {
        if self.is_error() {
            self.clear();
        } else {
            self.text.pop();
        }
    }

    /// Replace the contents with an evaluation outcome.
    ///
    /// Callers fit results to `max_len` before storing them.
    pub fn set_result(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::error::{DIV_BY_ZERO, INVALID};

    fn buffer_with(text: &str) -> DisplayBuffer {
        let mut buffer = DisplayBuffer::new();
        for ch in text.chars() {
            buffer.append(ch);
        }
        buffer
    }

    #[test]
    fn test_append_respects_max_len() {
        let mut buffer = buffer_with("1234567890");
        assert_eq!(buffer.len(), 10);
        assert!(!buffer.append('1'));
        assert_eq!(buffer.as_str(), "1234567890");
    }

    #[test]
    fn test_divide_symbol_counts_as_one() {
        let buffer = buffer_with("12÷34567890");
        assert_eq!(buffer.as_str(), "12÷3456789");
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn test_delete_last() {
        let mut buffer = buffer_with("12÷");
        buffer.delete_last();
        assert_eq!(buffer.as_str(), "12");
        buffer.delete_last();
        buffer.delete_last();
        assert!(buffer.is_empty());
        buffer.delete_last();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_delete_last_clears_sentinels() {
        let mut buffer = DisplayBuffer::new();
        buffer.set_result(INVALID);
        buffer.delete_last();
        assert!(buffer.is_empty());

        buffer.set_result(DIV_BY_ZERO);
        buffer.delete_last();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_append_replaces_sentinel() {
        let mut buffer = DisplayBuffer::new();
        buffer.set_result(DIV_BY_ZERO);
        assert!(buffer.is_error());
        buffer.append('7');
        assert_eq!(buffer.as_str(), "7");
    }

    #[test]
    fn test_negate_appends_minus_anywhere() {
        let mut buffer = buffer_with("5+");
        buffer.negate();
        buffer.negate();
        assert_eq!(buffer.as_str(), "5+--");
    }

    #[test]
    fn test_numeric_result_is_not_an_error() {
        let mut buffer = DisplayBuffer::new();
        buffer.set_result("-2");
        assert!(!buffer.is_error());
        buffer.append('1');
        assert_eq!(buffer.as_str(), "-21");
    }

    #[test]
    fn test_custom_max_len() {
        let mut buffer = DisplayBuffer::with_max_len(3);
        for ch in "12345".chars() {
            buffer.append(ch);
        }
        assert_eq!(buffer.as_str(), "123");
        assert_eq!(buffer.max_len(), 3);
    }
}
