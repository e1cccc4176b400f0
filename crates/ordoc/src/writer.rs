//! The structural document writer.
//!
//! This module provides [`DocumentWriter`], a stateful builder that turns a
//! sequence of primitive write calls into a nested tree of documents and
//! arrays, rejecting any call that is illegal in the current position.
//!
//! # Examples
//!
//! ```rust
//! use ordoc::DocumentWriter;
//!
//! let mut writer = DocumentWriter::new();
//! writer.start_document()?;
//! writer.start_array_named("stuff")?;
//! writer.write_value("hello")?;
//! writer.write_value(42)?;
//! writer.end_array()?;
//! writer.write("next", "something simple")?;
//! writer.end_document()?;
//!
//! let document = writer.finish()?;
//! assert_eq!(
//!     document.to_string(),
//!     r#"{"stuff":["hello",42],"next":"something simple"}"#
//! );
//! # Ok::<(), ordoc::WriterError>(())
//! ```

use std::mem;

use crate::{
    document::Document,
    error::WriterError,
    value::{Array, Value},
};

/// One open container on the writer's stack.
///
/// A frame owns the container it is populating until the matching end call,
/// at which point the container is handed to the parent frame. Document
/// frames additionally track the field name awaiting its value, if any.
#[derive(Debug)]
enum Frame {
    Document {
        container: Document,
        pending_name: Option<String>,
    },
    Array {
        container: Array,
    },
}

impl Frame {
    fn new_document() -> Self {
        Frame::Document {
            container: Document::new(),
            pending_name: None,
        }
    }

    fn new_array() -> Self {
        Frame::Array {
            container: Array::new(),
        }
    }

    /// Receives a completed child value into this frame's container.
    ///
    /// A document frame files the child under its recorded name; an array
    /// frame appends it.
    fn attach(&mut self, value: Value) {
        match self {
            Frame::Document {
                container,
                pending_name,
            } => {
                container.insert(pending_name.take().unwrap_or_default(), value);
            }
            Frame::Array { container } => container.push(value),
        }
    }

    /// The container built so far, cloned.
    fn snapshot_value(&self) -> Value {
        match self {
            Frame::Document { container, .. } => Value::Document(container.clone()),
            Frame::Array { container } => Value::Array(container.clone()),
        }
    }

    /// The container built so far, cloned, with the still-open child placed
    /// where it will land when it closes.
    fn snapshot_with_child(&self, child: Value) -> Value {
        match self {
            Frame::Document {
                container,
                pending_name,
            } => {
                let mut document = container.clone();
                document.insert(pending_name.clone().unwrap_or_default(), child);
                Value::Document(document)
            }
            Frame::Array { container } => {
                let mut array = container.clone();
                array.push(child);
                Value::Array(array)
            }
        }
    }
}

/// A stateful builder assembling write calls into one top-level [`Document`].
///
/// The writer starts at the root, is driven through paired start/end calls
/// with names and values in between, and yields the finished document once
/// every container is closed. Each call is validated against the current
/// position before anything is mutated, so a rejected call leaves the writer
/// exactly as it was.
///
/// A writer produces a single top-level document: [`finish`] consumes it.
///
/// # Examples
///
/// ```
/// use ordoc::{doc, DocumentWriter};
///
/// let mut writer = DocumentWriter::new();
/// writer.start_document()?;
/// writer.write("title", "dune")?;
/// writer.start_document_named("author")?;
/// writer.write("last", "herbert")?;
/// writer.end_document()?;
/// writer.end_document()?;
///
/// let document = writer.finish()?;
/// assert_eq!(document, doc! { "title": "dune", "author": doc! { "last": "herbert" } });
/// # Ok::<(), ordoc::WriterError>(())
/// ```
///
/// [`finish`]: DocumentWriter::finish
#[derive(Debug, Default)]
pub struct DocumentWriter {
    stack: Vec<Frame>,
    finished: Option<Document>,
}

impl DocumentWriter {
    /// Creates a writer positioned at the root, before the top-level
    /// document is started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            finished: None,
        }
    }

    /// Opens the top-level document, or a nested document as the next value.
    ///
    /// Legal at the root (once), inside a document after a name was written,
    /// and inside an array.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] anywhere else: inside a
    /// document with no name pending, or after the top-level document was
    /// already closed.
    pub fn start_document(&mut self) -> Result<(), WriterError> {
        match self.stack.last() {
            None if self.finished.is_none() => {}
            Some(Frame::Array { .. } | Frame::Document { pending_name: Some(_), .. }) => {}
            _ => return Err(self.illegal("start_document")),
        }
        self.stack.push(Frame::new_document());
        Ok(())
    }

    /// Writes `name` and opens a nested document as its value.
    ///
    /// Equivalent to [`write_name`] followed by [`start_document`].
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] unless the writer is
    /// inside a document with no name pending.
    ///
    /// [`write_name`]: DocumentWriter::write_name
    /// [`start_document`]: DocumentWriter::start_document
    pub fn start_document_named(&mut self, name: impl Into<String>) -> Result<(), WriterError> {
        self.write_name(name)?;
        self.start_document()
    }

    /// Closes the current document and hands it to the parent container.
    ///
    /// Closing the top-level document makes the finished value available
    /// through [`finish`].
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] if the current container
    /// is not a document, and [`WriterError::DanglingName`] if a field name
    /// was written without a value.
    ///
    /// [`finish`]: DocumentWriter::finish
    pub fn end_document(&mut self) -> Result<(), WriterError> {
        let Some(Frame::Document {
            container,
            pending_name,
        }) = self.stack.last_mut()
        else {
            return Err(self.illegal("end_document"));
        };
        if let Some(name) = pending_name {
            return Err(WriterError::DanglingName { name: name.clone() });
        }
        let document = mem::take(container);
        self.stack.pop();
        match self.stack.last_mut() {
            Some(parent) => parent.attach(Value::Document(document)),
            None => self.finished = Some(document),
        }
        Ok(())
    }

    /// Opens an array as the next value.
    ///
    /// Legal inside a document after a name was written and inside an array.
    /// The top-level value is always a document, so an array cannot be
    /// started at the root.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] in any other position.
    pub fn start_array(&mut self) -> Result<(), WriterError> {
        match self.stack.last() {
            Some(Frame::Array { .. } | Frame::Document { pending_name: Some(_), .. }) => {}
            _ => return Err(self.illegal("start_array")),
        }
        self.stack.push(Frame::new_array());
        Ok(())
    }

    /// Writes `name` and opens an array as its value.
    ///
    /// Equivalent to [`write_name`] followed by [`start_array`].
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] unless the writer is
    /// inside a document with no name pending.
    ///
    /// [`write_name`]: DocumentWriter::write_name
    /// [`start_array`]: DocumentWriter::start_array
    pub fn start_array_named(&mut self, name: impl Into<String>) -> Result<(), WriterError> {
        self.write_name(name)?;
        self.start_array()
    }

    /// Closes the current array and hands it to the parent container.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] if the current container
    /// is not an array.
    pub fn end_array(&mut self) -> Result<(), WriterError> {
        let Some(Frame::Array { container }) = self.stack.last_mut() else {
            return Err(self.illegal("end_array"));
        };
        let array = mem::take(container);
        self.stack.pop();
        // an array frame always sits above the root document, so a parent exists
        if let Some(parent) = self.stack.last_mut() {
            parent.attach(Value::Array(array));
        }
        Ok(())
    }

    /// Records `name` as the field the next value will be written under.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] if the current container
    /// is not a document, or if a name is already pending.
    pub fn write_name(&mut self, name: impl Into<String>) -> Result<(), WriterError> {
        match self.stack.last_mut() {
            Some(Frame::Document { pending_name, .. }) if pending_name.is_none() => {
                *pending_name = Some(name.into());
                Ok(())
            }
            _ => Err(self.illegal("write_name")),
        }
    }

    /// Writes a value into the current container.
    ///
    /// Inside an array the value is appended; inside a document it is filed
    /// under the pending name, which is consumed. Writing an existing name
    /// again replaces its value without moving the field.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] at the root, and inside a
    /// document when no name is pending.
    pub fn write_value(&mut self, value: impl Into<Value>) -> Result<(), WriterError> {
        let value = value.into();
        match self.stack.last_mut() {
            Some(Frame::Array { container }) => {
                container.push(value);
                Ok(())
            }
            Some(Frame::Document {
                container,
                pending_name,
            }) => {
                let Some(name) = pending_name.take() else {
                    return Err(self.illegal("write_value"));
                };
                container.insert(name, value);
                Ok(())
            }
            None => Err(self.illegal("write_value")),
        }
    }

    /// Writes a named field in one call.
    ///
    /// Equivalent to [`write_name`] followed by [`write_value`].
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::IllegalTransition`] unless the writer is
    /// inside a document with no name pending.
    ///
    /// [`write_name`]: DocumentWriter::write_name
    /// [`write_value`]: DocumentWriter::write_value
    pub fn write(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), WriterError> {
        self.write_name(name)?;
        self.write_value(value)
    }

    /// The number of document containers currently open.
    #[must_use]
    pub fn document_level(&self) -> usize {
        self.stack
            .iter()
            .filter(|frame| matches!(frame, Frame::Document { .. }))
            .count()
    }

    /// The number of array containers currently open.
    #[must_use]
    pub fn array_level(&self) -> usize {
        self.stack
            .iter()
            .filter(|frame| matches!(frame, Frame::Array { .. }))
            .count()
    }

    /// A clone of the tree built so far, including still-open containers.
    ///
    /// Returns `None` before the top-level document is started. Open
    /// containers appear in the place they will occupy once closed; a
    /// pending name with no value yet does not appear. Intended for
    /// diagnostics, not for extracting the result: use [`finish`] for that.
    ///
    /// [`finish`]: DocumentWriter::finish
    ///
    /// # Examples
    ///
    /// ```
    /// use ordoc::DocumentWriter;
    ///
    /// let mut writer = DocumentWriter::new();
    /// writer.start_document()?;
    /// writer.start_array_named("tags")?;
    /// writer.write_value("a")?;
    ///
    /// let partial = writer.snapshot().map(|v| v.to_string());
    /// assert_eq!(partial.as_deref(), Some(r#"{"tags":["a"]}"#));
    /// # Ok::<(), ordoc::WriterError>(())
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Option<Value> {
        if let Some(document) = &self.finished {
            return Some(Value::Document(document.clone()));
        }
        let mut frames = self.stack.iter().rev();
        let mut value = frames.next()?.snapshot_value();
        for frame in frames {
            value = frame.snapshot_with_child(value);
        }
        Some(value)
    }

    /// Consumes the writer and returns the finished top-level document.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::UnfinishedDocument`] if any container is still
    /// open, or if the top-level document was never started.
    pub fn finish(self) -> Result<Document, WriterError> {
        let document_level = self.document_level();
        let array_level = self.array_level();
        match self.finished {
            Some(document) if document_level == 0 && array_level == 0 => Ok(document),
            _ => Err(WriterError::UnfinishedDocument {
                document_level,
                array_level,
            }),
        }
    }

    fn illegal(&self, op: &'static str) -> WriterError {
        WriterError::IllegalTransition {
            op,
            state: self.state_description(),
        }
    }

    /// Describes the current position for error messages.
    fn state_description(&self) -> String {
        match self.stack.last() {
            Some(Frame::Document {
                pending_name: Some(name),
                ..
            }) => {
                format!("inside a document awaiting the value for \"{name}\"")
            }
            Some(Frame::Document {
                pending_name: None, ..
            }) => String::from("inside a document with no field name pending"),
            Some(Frame::Array { .. }) => String::from("inside an array"),
            None if self.finished.is_some() => {
                String::from("after the top-level document was closed")
            }
            None => String::from("at the root"),
        }
    }
}
