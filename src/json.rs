//! JSON helpers shared by the card value types.
//!
//! [`to_string`] writes JSON with a space after every `:` and `,`, and
//! leaves non-ASCII characters such as suit glyphs unescaped:
//!
//! ```
//! use trumpy::{Suit, json};
//!
//! assert_eq!(
//!     json::to_string(&Suit::CLUB).unwrap(),
//!     r#"{"id": 3, "name": "club", "label": "♣"}"#
//! );
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use std::io;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};

/// A [`Formatter`] that separates items with `", "` and keys from values
/// with `": "`, on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `value` to a JSON string using [`SpacedFormatter`].
///
/// # Errors
///
/// Returns an error if `value`'s `Serialize` implementation fails.
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(64);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Describes the kind of a JSON value, as reported by
/// [`Error::InvalidType`](crate::Error::InvalidType).
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
