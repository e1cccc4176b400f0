mod write_bad;

use crate::DocumentWriter;

/// Asserts the number of open document and array containers.
pub(crate) fn assert_levels(writer: &DocumentWriter, documents: usize, arrays: usize) {
    assert_eq!(writer.document_level(), documents, "document level");
    assert_eq!(writer.array_level(), arrays, "array level");
}
