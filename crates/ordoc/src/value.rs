//! Tree value types.
//!
//! This module defines the [`Value`] enum, which represents any value a
//! finished document tree can hold, and the string-escaping helper used when
//! rendering values as text.

use crate::document::Document;

/// An ordered sequence of values.
pub type Array = Vec<Value>;

/// A single node in a document tree.
///
/// A `Value` is either a scalar, an [`Array`] of values, or a nested
/// [`Document`]. Integers keep their width: the mapping layer above this
/// crate coerces host integers to either 32 or 64 bits before writing them.
///
/// # Examples
///
/// ```
/// use ordoc::{doc, Value};
///
/// let v = Value::Document(doc! { "key": "value" });
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A 32-bit signed integer.
    Int32(i32),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A 64-bit IEEE 754 floating point number.
    Double(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A nested document with insertion-ordered fields.
    Document(Document),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Self::Document(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// assert!(Value::Array(vec![Value::Null]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Document`].
    ///
    /// [`Document`]: Value::Document
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::{doc, Value};
    ///
    /// assert!(Value::Document(doc! {}).is_document());
    /// assert!(!Value::Null.is_document());
    /// ```
    #[must_use]
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document(..))
    }

    /// Returns the boolean if the value is [`Boolean`], else `None`.
    ///
    /// [`Boolean`]: Value::Boolean
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    /// assert_eq!(Value::Null.as_bool(), None);
    /// ```
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if the value is [`Int32`], else `None`.
    ///
    /// [`Int32`]: Value::Int32
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// assert_eq!(Value::Int32(7).as_i32(), Some(7));
    /// assert_eq!(Value::Int64(7).as_i32(), None);
    /// ```
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the integer if the value is [`Int64`], else `None`.
    ///
    /// This does not widen an [`Int32`]; the two widths are distinct values.
    ///
    /// [`Int32`]: Value::Int32
    /// [`Int64`]: Value::Int64
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// assert_eq!(Value::Int64(7).as_i64(), Some(7));
    /// assert_eq!(Value::Int32(7).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if the value is [`Double`], else `None`.
    ///
    /// [`Double`]: Value::Double
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// assert_eq!(Value::Double(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Int32(2).as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the string slice if the value is [`String`], else `None`.
    ///
    /// [`String`]: Value::String
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::Value;
    ///
    /// let v = Value::from("hello");
    /// assert_eq!(v.as_str(), Some("hello"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the elements if the value is [`Array`], else `None`.
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::{array, Value};
    ///
    /// let v = Value::Array(array![1, 2]);
    /// assert_eq!(v.as_array().map(Vec::len), Some(2));
    /// assert_eq!(Value::Null.as_array(), None);
    /// ```
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the document if the value is [`Document`], else `None`.
    ///
    /// [`Document`]: Value::Document
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::{doc, Value};
    ///
    /// let v = Value::Document(doc! { "a": 1 });
    /// assert_eq!(v.as_document().map(ordoc::Document::len), Some(1));
    /// ```
    #[must_use]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(d) => Some(d),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a rendered string literal.
///
/// Quotes, backslashes and control characters are replaced with their
/// two-character or `\uXXXX` escape sequences; everything else is written
/// verbatim.
pub(crate) fn write_escaped_string<W: std::fmt::Write>(src: &str, f: &mut W) -> std::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() && c as u32 <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int32(i) => write!(f, "{i}"),
            Value::Int64(i) => write!(f, "{i}"),
            // `{:?}` keeps the decimal point on round floats, so `Double(1.0)`
            // renders as `1.0` and stays distinguishable from `Int64(1)`.
            Value::Double(d) => write!(f, "{d:?}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Document(doc) => std::fmt::Display::fmt(doc, f),
        }
    }
}
