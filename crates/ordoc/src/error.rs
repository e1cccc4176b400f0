//! Writer contract-violation errors.

use thiserror::Error;

/// An error raised by [`DocumentWriter`] when a call sequence is
/// structurally invalid.
///
/// Every variant is a contract violation by the caller, never a transient
/// condition: the offending call is rejected before any mutation, so the
/// writer's position is exactly what it was before the call.
///
/// [`DocumentWriter`]: crate::DocumentWriter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriterError {
    /// A write call was invoked in a position that forbids it, for example
    /// a value write at the root or an end call for the wrong container.
    #[error("{op} is not valid {state}")]
    IllegalTransition {
        /// The rejected operation.
        op: &'static str,
        /// A description of the writer's position at the time of the call.
        state: String,
    },

    /// The finished document was requested while containers are still open,
    /// or before the top-level document was ever started.
    #[error(
        "document is not finished: {document_level} document(s) and {array_level} array(s) open"
    )]
    UnfinishedDocument {
        /// Number of document containers still open.
        document_level: usize,
        /// Number of array containers still open.
        array_level: usize,
    },

    /// A document was closed while a field name was still awaiting its value.
    #[error("field name \"{name}\" was written without a value")]
    DanglingName {
        /// The name that never received a value.
        name: String,
    },
}
