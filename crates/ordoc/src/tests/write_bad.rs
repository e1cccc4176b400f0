use super::assert_levels;
use crate::{DocumentWriter, WriterError, doc};

#[test]
fn value_at_the_root_is_rejected() {
    let mut writer = DocumentWriter::new();
    let err = writer.write_value(1).unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "write_value", .. }
    ));
    assert_levels(&writer, 0, 0);
}

#[test]
fn name_at_the_root_is_rejected() {
    let mut writer = DocumentWriter::new();
    let err = writer.write_name("a").unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "write_name", .. }
    ));
    assert_levels(&writer, 0, 0);
}

#[test]
fn array_at_the_root_is_rejected() {
    let mut writer = DocumentWriter::new();
    let err = writer.start_array().unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "start_array", .. }
    ));
    assert_levels(&writer, 0, 0);
}

#[test]
fn second_name_without_value_is_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.write_name("a").unwrap();
    let err = writer.write_name("b").unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "write_name", .. }
    ));
    assert_levels(&writer, 1, 0);

    // the first name is still the pending one
    writer.write_value(1).unwrap();
    writer.end_document().unwrap();
    assert_eq!(writer.finish().unwrap(), doc! { "a": 1 });
}

#[test]
fn name_inside_an_array_is_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.start_array_named("xs").unwrap();
    let err = writer.write_name("a").unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "write_name", .. }
    ));
    assert_levels(&writer, 1, 1);
}

#[test]
fn value_without_a_name_inside_a_document_is_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    let err = writer.write_value(1).unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "write_value", .. }
    ));
    assert_levels(&writer, 1, 0);
}

#[test]
fn unnamed_document_inside_a_document_is_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    let err = writer.start_document().unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "start_document", .. }
    ));
    assert_levels(&writer, 1, 0);
}

#[test]
fn end_at_the_root_is_rejected() {
    let mut writer = DocumentWriter::new();
    assert!(matches!(
        writer.end_document().unwrap_err(),
        WriterError::IllegalTransition { op: "end_document", .. }
    ));
    assert!(matches!(
        writer.end_array().unwrap_err(),
        WriterError::IllegalTransition { op: "end_array", .. }
    ));
    assert_levels(&writer, 0, 0);
}

#[test]
fn end_calls_must_match_the_open_container() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    let err = writer.end_array().unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "end_array", .. }
    ));
    assert_levels(&writer, 1, 0);

    writer.start_array_named("xs").unwrap();
    let err = writer.end_document().unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "end_document", .. }
    ));
    assert_levels(&writer, 1, 1);
}

#[test]
fn second_top_level_document_is_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.end_document().unwrap();
    let err = writer.start_document().unwrap_err();
    assert!(matches!(
        err,
        WriterError::IllegalTransition { op: "start_document", .. }
    ));
    assert_levels(&writer, 0, 0);

    // the completed document is unaffected
    assert!(writer.finish().is_ok());
}

#[test]
fn writes_after_the_top_level_closes_are_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.end_document().unwrap();

    assert!(matches!(
        writer.write_name("a").unwrap_err(),
        WriterError::IllegalTransition { op: "write_name", .. }
    ));
    assert!(matches!(
        writer.write_value(1).unwrap_err(),
        WriterError::IllegalTransition { op: "write_value", .. }
    ));
    assert!(matches!(
        writer.start_array().unwrap_err(),
        WriterError::IllegalTransition { op: "start_array", .. }
    ));
    assert_levels(&writer, 0, 0);
}

#[test]
fn closing_with_a_pending_name_is_rejected() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.write_name("orphan").unwrap();
    let err = writer.end_document().unwrap_err();
    assert_eq!(err, WriterError::DanglingName { name: "orphan".into() });
    assert_levels(&writer, 1, 0);

    // supplying the value afterwards completes the document
    writer.write_value(1).unwrap();
    writer.end_document().unwrap();
    assert_eq!(writer.finish().unwrap(), doc! { "orphan": 1 });
}

#[test]
fn finish_with_open_containers_reports_levels() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.start_array_named("xs").unwrap();
    let err = writer.finish().unwrap_err();
    assert_eq!(
        err,
        WriterError::UnfinishedDocument { document_level: 1, array_level: 1 }
    );
}

#[test]
fn finish_without_starting_is_rejected() {
    let writer = DocumentWriter::new();
    let err = writer.finish().unwrap_err();
    assert_eq!(
        err,
        WriterError::UnfinishedDocument { document_level: 0, array_level: 0 }
    );
}
