#![forbid(unsafe_code)]
#![warn(clippy::all)]
//! A strict recursive-descent JSON parser. It reads a whole JSON text held in memory and
//! returns an owned tree of [`Value`]s, or an [`Error`] pointing at the line and column where
//! the input stopped making sense.
//!
//! ## How to use it ?
//!
//! ```rust
//! use descent_json::{parse, Value};
//!
//! let parsed = parse(r#"{"name": "John", "age": 30, "tags": ["a", "b"]}"#).unwrap();
//!
//! assert_eq!(parsed.get("name").and_then(Value::as_str), Some("John"));
//! assert_eq!(parsed.get("age"), Some(&Value::Integer(30)));
//! ```
//!
//! The root of a document must be an object. Numbers that fit in an `i32` come back as
//! [`Value::Integer`], every other number as [`Value::Float`].
//!
//! ### Errors
//!
//! ```rust
//! use descent_json::{error::Kind, parse};
//!
//! let error = parse(r#"{"a": 1,}"#).unwrap_err();
//!
//! assert_eq!(error.kind, Kind::TrailingComma);
//! assert_eq!(error.position.col, 9);
//! ```
//!
//! ### Serializing in a struct
//!
//! [`Value`] implements [Serialize](https://docs.rs/serde/latest/serde/ser/trait.Serialize.html),
//! so it can be handed to any serde data format:
//!
//! ```rust
//! let parsed = descent_json::parse(r#"{"hello": "world"}"#).unwrap();
//!
//! let json = serde_json::to_value(&parsed).unwrap();
//!
//! assert_eq!(json["hello"], "world");
//! ```
//!
//! ## Logging
//!
//! Enable the `tracing` feature to get `trace`/`debug` events for every parse.

extern crate bytecount;
extern crate memchr;
extern crate nom;
extern crate serde;

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug;
#[allow(unused_imports)]
pub(crate) use trace;

mod cursor;
mod parser;
mod ser;

pub mod error;
pub mod value;

pub use error::Error;
pub use parser::parse;
pub use value::{Map, Position, Value};
