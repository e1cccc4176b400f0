//! Closure-scoped building helpers.
//!
//! Builder code that nests documents and arrays by hand has to keep every
//! start call paired with its end call. The helpers in this module take a
//! closure instead: they open the container, run the closure against the
//! writer, and close the container, so the pairing cannot be forgotten.
//!
//! ```
//! use ordoc::{array_named, doc, document, document_named, DocumentWriter};
//!
//! let mut writer = DocumentWriter::new();
//! document(&mut writer, |w| {
//!     document_named(w, "$group", |w| {
//!         w.write("_id", "$author")?;
//!         array_named(w, "books", |w| w.write_value("$title"))
//!     })
//! })?;
//!
//! let document = writer.finish()?;
//! assert_eq!(
//!     document,
//!     doc! { "$group": doc! { "_id": "$author", "books": vec!["$title"] } }
//! );
//! # Ok::<(), ordoc::WriterError>(())
//! ```

use crate::{error::WriterError, writer::DocumentWriter};

/// Runs `f` between [`start_document`] and [`end_document`].
///
/// # Errors
///
/// Propagates the first error from the start call, the closure, or the end
/// call; closing is not attempted after the closure fails.
///
/// [`start_document`]: DocumentWriter::start_document
/// [`end_document`]: DocumentWriter::end_document
pub fn document<F>(writer: &mut DocumentWriter, f: F) -> Result<(), WriterError>
where
    F: FnOnce(&mut DocumentWriter) -> Result<(), WriterError>,
{
    writer.start_document()?;
    f(writer)?;
    writer.end_document()
}

/// Runs `f` between [`start_document_named`] and [`end_document`].
///
/// # Errors
///
/// Propagates the first error from the start call, the closure, or the end
/// call.
///
/// [`start_document_named`]: DocumentWriter::start_document_named
/// [`end_document`]: DocumentWriter::end_document
pub fn document_named<F>(
    writer: &mut DocumentWriter,
    name: impl Into<String>,
    f: F,
) -> Result<(), WriterError>
where
    F: FnOnce(&mut DocumentWriter) -> Result<(), WriterError>,
{
    writer.start_document_named(name)?;
    f(writer)?;
    writer.end_document()
}

/// Runs `f` between [`start_array`] and [`end_array`].
///
/// # Errors
///
/// Propagates the first error from the start call, the closure, or the end
/// call.
///
/// [`start_array`]: DocumentWriter::start_array
/// [`end_array`]: DocumentWriter::end_array
pub fn array<F>(writer: &mut DocumentWriter, f: F) -> Result<(), WriterError>
where
    F: FnOnce(&mut DocumentWriter) -> Result<(), WriterError>,
{
    writer.start_array()?;
    f(writer)?;
    writer.end_array()
}

/// Runs `f` between [`start_array_named`] and [`end_array`].
///
/// # Errors
///
/// Propagates the first error from the start call, the closure, or the end
/// call.
///
/// [`start_array_named`]: DocumentWriter::start_array_named
/// [`end_array`]: DocumentWriter::end_array
pub fn array_named<F>(
    writer: &mut DocumentWriter,
    name: impl Into<String>,
    f: F,
) -> Result<(), WriterError>
where
    F: FnOnce(&mut DocumentWriter) -> Result<(), WriterError>,
{
    writer.start_array_named(name)?;
    f(writer)?;
    writer.end_array()
}
