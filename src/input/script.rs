//! # Input Scripts
//!
//! A line-based format for feeding the calculator a sequence of inputs,
//! used by the command line and for deterministic tests.
//!
//! ## Format
//!
//! - Blank lines and lines starting with `#` are skipped; a word starting
//!   with `#` ends the line.
//! - Command words: `ENTER`, `CLEAR`, `BACK`, `BACKSPACE`, `(-)`
//!   (case-insensitive).
//! - Key names: `Enter`, `Escape`, `Backspace`.
//! - Any other word is typed one key at a time, so `12+-3` is five keys.
//!   `*` and `/` type `x` and `÷`.
//! - A line wrapped in double quotes is typed one key at a time, spaces
//!   ignored.
//!
//! ## Example
//!
//! ```text
//! # five plus negative three
//! 5 + (-) 3
//! ENTER
//! ```

use thiserror::Error;

use super::keys::{char_to_input, key_to_input};
use crate::calculator::Input;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("empty script")]
    EmptyScript,
}

/// A parsed sequence of calculator inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    inputs: Vec<Input>,
}

impl InputScript {
    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, ScriptError> {
        let mut inputs = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            inputs.extend(Self::parse_line(line, line_num + 1)?);
        }

        if inputs.is_empty() {
            return Err(ScriptError::EmptyScript);
        }

        Ok(Self { inputs })
    }

    /// Parses command line words as if they formed one script line.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, ScriptError> {
        let line = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_text(&line)
    }

    /// Parses a single line. Blank and comment lines yield no inputs.
    pub fn parse_line(line: &str, line_num: usize) -> Result<Vec<Input>, ScriptError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Vec::new());
        }

        if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
            let text = &line[1..line.len() - 1];
            return Self::type_keys(text.chars().filter(|c| !c.is_whitespace()), line_num);
        }

        let mut inputs = Vec::new();
        for word in line.split_whitespace() {
            if word.starts_with('#') {
                break;
            }
            match Self::parse_word(word) {
                Some(input) => inputs.push(input),
                None => inputs.extend(Self::type_keys(word.chars(), line_num)?),
            }
        }
        Ok(inputs)
    }

    /// Parses a word that stands for one input.
    fn parse_word(word: &str) -> Option<Input> {
        word.parse::<Input>().ok().or_else(|| key_to_input(word))
    }

    /// Types characters one key at a time.
    fn type_keys(
        chars: impl Iterator<Item = char>,
        line_num: usize,
    ) -> Result<Vec<Input>, ScriptError> {
        chars
            .map(|ch| {
                char_to_input(ch).ok_or_else(|| ScriptError::Parse {
                    line: line_num,
                    message: format!("unknown key {:?}", ch),
                })
            })
            .collect()
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl IntoIterator for InputScript {
    type Item = Input;
    type IntoIter = std::vec::IntoIter<Input>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.into_iter()
    }
}
