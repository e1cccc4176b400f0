//! Snapshots of the rendered text for finished documents, partial trees,
//! and error messages.

use insta::assert_snapshot;
use ordoc::{DocumentWriter, Value, array, doc};

#[test]
fn renders_compact_text() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.start_array_named("stuff").unwrap();
    writer.write_value("hello").unwrap();
    writer.write_value(42).unwrap();
    writer.end_array().unwrap();
    writer.write("next", "something simple").unwrap();
    writer.end_document().unwrap();

    assert_snapshot!(
        writer.finish().unwrap(),
        @r#"{"stuff":["hello",42],"next":"something simple"}"#
    );
}

#[test]
fn renders_every_scalar_kind() {
    let document = doc! {
        "null": Value::Null,
        "flag": true,
        "small": 7,
        "big": 7_000_000_000i64,
        "ratio": 0.5,
        "name": "ada",
    };
    assert_snapshot!(
        document,
        @r#"{"null":null,"flag":true,"small":7,"big":7000000000,"ratio":0.5,"name":"ada"}"#
    );
}

#[test]
fn round_doubles_keep_their_decimal_point() {
    assert_snapshot!(Value::Double(1.0), @"1.0");
    assert_snapshot!(Value::Double(-2.5), @"-2.5");
    assert_snapshot!(Value::Int64(1), @"1");
}

#[test]
fn arrays_render_bracketed() {
    let value = Value::Array(array![1, "two", doc! { "three": 3 }]);
    assert_snapshot!(value, @r#"[1,"two",{"three":3}]"#);
}

#[test]
fn escapes_strings_when_rendering() {
    let document = doc! { "text": "line one\nline \"two\"\ttabbed", "path": "C:\\data" };
    assert_snapshot!(
        document,
        @r#"{"text":"line one\nline \"two\"\ttabbed","path":"C:\\data"}"#
    );
}

#[test]
fn control_characters_render_as_unicode_escapes() {
    let document = doc! { "ctl": "a\u{1}b" };
    assert_snapshot!(document, @r#"{"ctl":"a\u0001b"}"#);
}

#[test]
fn debug_shows_the_map_entries() {
    let document = doc! { "a": 1, "flag": true };
    assert_snapshot!(format!("{document:?}"), @r#"{"a": Int32(1), "flag": Boolean(true)}"#);
}

#[test]
fn partial_trees_render_with_open_containers_in_place() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.write("done", 1).unwrap();
    writer.start_array_named("open").unwrap();
    writer.write_value(2).unwrap();
    writer.start_document().unwrap();
    writer.write("deep", 3).unwrap();

    let partial = writer.snapshot().unwrap();
    assert_snapshot!(partial, @r#"{"done":1,"open":[2,{"deep":3}]}"#);
}

#[test]
fn error_messages_name_the_call_and_the_position() {
    let mut writer = DocumentWriter::new();
    assert_snapshot!(
        writer.write_value(1).unwrap_err(),
        @"write_value is not valid at the root"
    );

    writer.start_document().unwrap();
    assert_snapshot!(
        writer.write_value(1).unwrap_err(),
        @"write_value is not valid inside a document with no field name pending"
    );

    writer.write_name("a").unwrap();
    assert_snapshot!(
        writer.write_name("b").unwrap_err(),
        @r#"write_name is not valid inside a document awaiting the value for "a""#
    );

    writer.start_array().unwrap();
    assert_snapshot!(
        writer.write_name("c").unwrap_err(),
        @"write_name is not valid inside an array"
    );
    writer.end_array().unwrap();
    writer.end_document().unwrap();

    assert_snapshot!(
        writer.start_document().unwrap_err(),
        @"start_document is not valid after the top-level document was closed"
    );
}

#[test]
fn dangling_and_unfinished_errors_carry_details() {
    let mut writer = DocumentWriter::new();
    writer.start_document().unwrap();
    writer.write_name("orphan").unwrap();
    assert_snapshot!(
        writer.end_document().unwrap_err(),
        @r#"field name "orphan" was written without a value"#
    );

    writer.write_value(1).unwrap();
    writer.start_array_named("xs").unwrap();
    assert_snapshot!(
        writer.finish().unwrap_err(),
        @"document is not finished: 1 document(s) and 1 array(s) open"
    );

    assert_snapshot!(
        DocumentWriter::new().finish().unwrap_err(),
        @"document is not finished: 0 document(s) and 0 array(s) open"
    );
}
