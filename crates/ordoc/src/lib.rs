//! A structural writer for ordered, nested document trees.
//!
//! The entry point is [`DocumentWriter`]: a stateful builder driven by
//! primitive write calls (start/end document, start/end array, name, value)
//! that assembles one well-formed top-level [`Document`] and rejects any
//! structurally invalid call sequence with a typed [`WriterError`]. Field
//! order is preserved exactly as written, and writing an existing name
//! again replaces its value in place.
//!
//! # Examples
//!
//! ```rust
//! use ordoc::{doc, DocumentWriter};
//!
//! let mut writer = DocumentWriter::new();
//! writer.start_document()?;
//! writer.write("first", "Gilbert")?;
//! writer.start_array_named("scores")?;
//! writer.write_value(8)?;
//! writer.write_value(10)?;
//! writer.end_array()?;
//! writer.end_document()?;
//!
//! assert_eq!(
//!     writer.finish()?,
//!     doc! { "first": "Gilbert", "scores": vec![8, 10] }
//! );
//! # Ok::<(), ordoc::WriterError>(())
//! ```

mod document;
mod error;
mod scoped;
mod value;
mod writer;

#[cfg(any(test, feature = "serde"))]
mod serde;

#[cfg(test)]
mod tests;

pub use document::{Document, IntoIter, Iter, Keys, Values};
pub use error::WriterError;
pub use scoped::{array, array_named, document, document_named};
pub use value::{Array, Value};
pub use writer::DocumentWriter;

/// Builds a [`Document`] from `"name": value` pairs in order.
///
/// Values may be anything convertible into a [`Value`], including nested
/// `doc!` invocations. Repeating a name replaces the earlier value without
/// moving the field.
///
/// ```rust
/// use ordoc::{doc, Value};
///
/// let d = doc! {
///     "title": "Dune",
///     "year": 1965,
///     "tags": vec!["sf", "classic"],
///     "ratings": doc! { "mean": 4.5 },
/// };
/// assert_eq!(d["year"], Value::Int32(1965));
/// assert_eq!(d.to_string(), r#"{"title":"Dune","year":1965,"tags":["sf","classic"],"ratings":{"mean":4.5}}"#);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };
    ( $( $name:literal : $value:expr ),+ $(,)? ) => {{
        let mut doc = $crate::Document::new();
        $( doc.insert($name, $value); )+
        doc
    }};
}

/// Builds an [`Array`] from a heterogeneous list of values.
///
/// Each element is converted with [`Value::from`], so scalars, documents
/// and nested arrays can be mixed freely.
///
/// ```rust
/// use ordoc::{array, Value};
///
/// let a = array!["hello", 42, true];
/// assert_eq!(
///     a,
///     vec![Value::from("hello"), Value::Int32(42), Value::Boolean(true)]
/// );
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ( $( $elem:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::Value::from($elem) ),+ ]
    };
}
