use nom::{
    character::complete::{char, digit0, multispace0},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

use crate::error::{Error, Kind};

type NomResult<'a, O> = IResult<&'a str, O, nom::error::Error<&'a str>>;

/// Deepest allowed nesting of objects and arrays, root object included.
pub const MAX_DEPTH: usize = 128;

/// Position tracker over the input of a single parse.
///
/// `offset` is a byte offset that always sits on a char boundary of `text`,
/// or equals `text.len()` once the input is exhausted.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            depth: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    pub fn error(&self, kind: Kind) -> Error {
        self.error_at(self.offset, kind)
    }

    pub fn error_at(&self, offset: usize, kind: Kind) -> Error {
        Error::new(self.text, offset, kind)
    }

    /// Enters an object or array. Fails once nesting goes past [`MAX_DEPTH`].
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(Kind::RecursionLimit(MAX_DEPTH)));
        }
        self.depth += 1;

        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn advance_to(&mut self, rest: &'a str) {
        self.offset = self.text.len() - rest.len();
    }

    /// Moves past space, tab, newline and carriage return.
    pub fn skip_whitespace(&mut self) {
        let skipped: NomResult<'a, &'a str> = multispace0(self.rest());

        if let Ok((rest, _)) = skipped {
            self.advance_to(rest);
        }
    }

    /// Character at the offset, no whitespace skipping.
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character at the offset and moves past it.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.current()?;
        self.offset += c.len_utf8();

        Some(c)
    }

    pub fn peek(&mut self) -> Result<char, Error> {
        self.skip_whitespace();

        self.current()
            .ok_or_else(|| self.error(Kind::UnexpectedEndOfInput))
    }

    /// Matches `expected` at the offset exactly, without skipping whitespace.
    pub fn bump(&mut self, expected: char) -> Result<(), Error> {
        match self.current() {
            None => Err(self.error(Kind::UnexpectedEndOfInput)),
            Some(actual) if actual != expected => Err(self.error(Kind::UnexpectedToken {
                expected: Some(expected),
                actual,
            })),
            Some(actual) => {
                self.offset += actual.len_utf8();
                Ok(())
            }
        }
    }

    /// Structural token consumption: whitespace on both sides is skipped.
    pub fn consume(&mut self, expected: char) -> Result<(), Error> {
        self.skip_whitespace();
        self.bump(expected)?;
        self.skip_whitespace();

        Ok(())
    }

    /// Takes the longest run of `-? digits (. digits)?` at the offset.
    pub fn number_lexeme(&mut self) -> &'a str {
        let lexeme: NomResult<'a, &'a str> = recognize(tuple((
            opt(char('-')),
            digit0,
            opt(pair(char('.'), digit0)),
        )))(self.rest());

        match lexeme {
            Ok((rest, lexeme)) => {
                self.advance_to(rest);
                lexeme
            }
            Err(_) => "",
        }
    }
}
