use crate::cursor::Cursor;
use crate::error::{Error, Kind};
use crate::value::{Map, Value};

pub type ParseResult<T> = std::result::Result<T, Error>;

fn literal(cursor: &mut Cursor, word: &str) -> ParseResult<()> {
    cursor.skip_whitespace();

    for expected in word.chars() {
        cursor.bump(expected)?;
    }

    cursor.skip_whitespace();

    Ok(())
}

fn boolean(cursor: &mut Cursor) -> ParseResult<bool> {
    match cursor.peek()? {
        't' => literal(cursor, "true").map(|_| true),
        _ => literal(cursor, "false").map(|_| false),
    }
}

fn null(cursor: &mut Cursor) -> ParseResult<()> {
    literal(cursor, "null")
}

fn escape(cursor: &mut Cursor, string_start: usize) -> ParseResult<char> {
    let escape_start = cursor.offset();

    cursor.bump('\\')?;

    let c = cursor
        .next_char()
        .ok_or_else(|| cursor.error_at(string_start, Kind::UnterminatedString))?;

    Ok(match c {
        '"' | '\\' | '/' => c,
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        // \uXXXX lands here as well
        c => return Err(cursor.error_at(escape_start, Kind::InvalidEscapeSequence(c))),
    })
}

fn string(cursor: &mut Cursor) -> ParseResult<String> {
    cursor.skip_whitespace();

    let start = cursor.offset();

    cursor.bump('"')?;

    let mut string = String::new();

    loop {
        match cursor.current() {
            None => return Err(cursor.error_at(start, Kind::UnterminatedString)),
            Some('"') => {
                cursor.bump('"')?;
                break;
            }
            Some('\\') => string.push(escape(cursor, start)?),
            Some(c) => {
                string.push(c);
                cursor.next_char();
            }
        }
    }

    cursor.skip_whitespace();

    Ok(string)
}

fn number(cursor: &mut Cursor) -> ParseResult<Value> {
    cursor.skip_whitespace();

    let start = cursor.offset();
    let lexeme = cursor.number_lexeme();

    if let Ok(num) = lexeme.parse::<i32>() {
        return Ok(Value::Integer(num));
    }

    // Out of i32 range or fractional
    lexeme
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| cursor.error_at(start, Kind::InvalidNumber(lexeme.to_owned())))
}

fn array(cursor: &mut Cursor) -> ParseResult<Vec<Value>> {
    cursor.descend()?;
    cursor.consume('[')?;

    let mut array = Vec::new();

    if cursor.peek()? != ']' {
        loop {
            array.push(json_value(cursor)?);

            // A comma always commits to another value, so `[1,]` fails in json_value
            match cursor.peek()? {
                ',' => cursor.consume(',')?,
                ']' => break,
                actual => {
                    return Err(cursor.error(Kind::ExpectedDelimiter {
                        closing: ']',
                        actual,
                    }))
                }
            }
        }
    }

    cursor.consume(']')?;
    cursor.ascend();

    Ok(array)
}

fn object(cursor: &mut Cursor) -> ParseResult<Map> {
    cursor.descend()?;
    cursor.consume('{')?;

    let mut map = Map::new();

    while cursor.peek()? != '}' {
        let key = string(cursor)?;

        cursor.consume(':')?;

        let value = json_value(cursor)?;

        // Last write wins on duplicate keys
        map.insert(key, value);

        match cursor.peek()? {
            ',' => {
                cursor.consume(',')?;

                if cursor.peek()? == '}' {
                    return Err(cursor.error(Kind::TrailingComma));
                }
            }
            '}' => break,
            actual => {
                return Err(cursor.error(Kind::ExpectedDelimiter {
                    closing: '}',
                    actual,
                }))
            }
        }
    }

    cursor.consume('}')?;
    cursor.ascend();

    Ok(map)
}

fn json_value(cursor: &mut Cursor) -> ParseResult<Value> {
    let first_char = cursor.peek()?;

    match first_char {
        '-' | '0'..='9' => number(cursor),
        '"' => string(cursor).map(Value::String),
        't' | 'f' => boolean(cursor).map(Value::Bool),
        'n' => null(cursor).map(|_| Value::Null),
        '{' => object(cursor).map(Value::Object),
        '[' => array(cursor).map(Value::Array),
        actual => Err(cursor.error(Kind::UnexpectedToken {
            expected: None,
            actual,
        })),
    }
}

fn end_chars(cursor: &mut Cursor) -> ParseResult<()> {
    cursor.skip_whitespace();

    if cursor.is_at_end() {
        return Ok(());
    }

    Err(cursor.error(Kind::CharsAfterRoot(cursor.rest().to_owned())))
}

/// Parses `text` into a value tree. The root must be an object.
pub fn parse(text: &str) -> ParseResult<Value> {
    trace!(len = text.len(), "parsing document");

    let mut cursor = Cursor::new(text);

    let result = object(&mut cursor).and_then(|map| {
        end_chars(&mut cursor)?;

        Ok(Value::Object(map))
    });

    if let Err(_error) = &result {
        debug!(error = %_error, "failed to parse document");
    } else {
        trace!(offset = cursor.offset(), "document parsed");
    }

    result
}

impl std::str::FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse(s)
    }
}
