use crate::value::Position;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Kind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected token '{actual}'{}", expected_suffix(.expected))]
    UnexpectedToken {
        expected: Option<char>,
        actual: char,
    },
    #[error("trailing comma before '}}'")]
    TrailingComma,
    #[error("expected ',' or '{closing}', found '{actual}'")]
    ExpectedDelimiter { closing: char, actual: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscapeSequence(char),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("nesting deeper than {0} levels")]
    RecursionLimit(usize),
    #[error("unexpected characters after the root object: {0}")]
    CharsAfterRoot(String),
}

fn expected_suffix(expected: &Option<char>) -> String {
    match expected {
        Some(c) => format!(", expected '{}'", c),
        None => String::new(),
    }
}

/// A parse failure. `offset` is the byte offset where the failure was
/// detected and `position` is the same place as line and column.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("{kind} at {position}")]
pub struct Error {
    pub kind: Kind,
    pub offset: usize,
    pub position: Position,
}

impl Error {
    pub fn new(text: &str, offset: usize, kind: Kind) -> Self {
        Self {
            kind,
            offset,
            position: Position::from_offset(text, offset),
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }
}
