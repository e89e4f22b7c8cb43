use std::fmt::Display;

use bytecount::num_chars;
use indexmap::IndexMap;
use memchr::memrchr;

/// Object storage. Keys keep the order of their first appearance.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i32),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// Writes `str` as a quoted JSON string.
fn write_json_str(f: &mut std::fmt::Formatter<'_>, str: &str) -> std::fmt::Result {
    write!(f, "\"")?;

    for c in str.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            '\x08' => write!(f, "\\b")?,
            '\x0C' => write!(f, "\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }

    write!(f, "\"")
}

/// JSON text for the tree. Floats always carry a fraction so `Float(10.0)`
/// stays distinguishable from `Integer(10)`.
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(bool) => write!(f, "{}", bool),
            Self::Integer(num) => write!(f, "{}", num),
            Self::Float(num) if num.is_finite() && num.fract() == 0.0 => write!(f, "{:.1}", num),
            Self::Float(num) => write!(f, "{}", num),
            Self::String(str) => write_json_str(f, str),
            Self::Array(array) => {
                write!(f, "[")?;
                for (i, value) in array.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Self::Object(object) => {
                write!(f, "{{")?;
                for (i, (key, value)) in object.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_json_str(f, key)?;
                    write!(f, ":{}", value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Value {
    /// Looks up `key` when `self` is an object. A key mapped to `null` gives
    /// `Some(&Value::Null)`, a missing key gives `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(bool) => Some(*bool),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Integer(num) => Some(*num),
            _ => None,
        }
    }

    /// Integers widen losslessly.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(num) => Some(f64::from(*num)),
            Self::Float(num) => Some(*num),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(str) => Some(str),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn unwrap_null(&self) {
        match self {
            Self::Null => (),
            _ => panic!("Try to get null, but value is not null: {}", self),
        }
    }

    pub fn unwrap_bool(&self) -> bool {
        match self {
            Self::Bool(bool) => *bool,
            _ => panic!("Try to get bool, but value is not a bool: {}", self),
        }
    }

    pub fn unwrap_integer(&self) -> i32 {
        match self {
            Self::Integer(num) => *num,
            _ => panic!("Try to get integer, but value is not an integer: {}", self),
        }
    }

    pub fn unwrap_float(&self) -> f64 {
        match self {
            Self::Float(num) => *num,
            _ => panic!("Try to get float, but value is not a float: {}", self),
        }
    }

    pub fn unwrap_string(&self) -> &str {
        match self {
            Self::String(str) => str,
            _ => panic!("Try to get string, but value is not a string: {}", self),
        }
    }

    pub fn unwrap_array(&self) -> &Vec<Value> {
        match self {
            Self::Array(array) => array,
            _ => panic!("Try to get array, but value is not a array: {}", self),
        }
    }

    pub fn unwrap_object(&self) -> &Map {
        match self {
            Self::Object(obj) => obj,
            _ => panic!("Try to get object, but value is not a object: {}", self),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

/// Line and column of a character in the input, both starting at 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl Position {
    /// `offset` is a byte offset and must lie on a char boundary of `text`.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let before = &text.as_bytes()[..offset.min(text.len())];

        let line = 1 + bytecount::count(before, b'\n');

        let line_start = memrchr(b'\n', before).map(|i| i + 1).unwrap_or(0);

        // Columns count chars, not bytes
        let col = num_chars(&before[line_start..]) + 1;

        Self { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}
