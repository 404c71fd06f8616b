//! Top-level JSON tokens.

use std::fmt;

/// Structural delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delim {
    OpenObject,
    CloseObject,
    OpenArray,
    CloseArray,
}

impl Delim {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Delim::OpenObject),
            b'}' => Some(Delim::CloseObject),
            b'[' => Some(Delim::OpenArray),
            b']' => Some(Delim::CloseArray),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delim::OpenObject => '{',
            Delim::CloseObject => '}',
            Delim::OpenArray => '[',
            Delim::CloseArray => ']',
        }
    }
}

/// A token read from the top level of a catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Delimiter(Delim),
    /// A decoded (unescaped) JSON string.
    String(String),
    /// Anything else: numbers, literals, stray separators.
    Other(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Delimiter(delim) => write!(f, "{}", delim.as_char()),
            Token::String(value) => write!(f, "{:?}", value),
            Token::Other(raw) => write!(f, "{}", raw),
        }
    }
}
