//! Turning keyboard keys and scripted text into calculator inputs.

pub mod keys;
pub mod script;

pub use keys::{char_to_input, key_to_input};
pub use script::{InputScript, ScriptError};
