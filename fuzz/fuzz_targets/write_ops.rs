#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use ordoc::{DocumentWriter, Value};

#[derive(Arbitrary, Debug)]
enum Op {
    StartDocument,
    StartDocumentNamed(String),
    EndDocument,
    StartArray,
    StartArrayNamed(String),
    EndArray,
    WriteName(String),
    WriteNull,
    WriteBool(bool),
    WriteInt(i64),
    WriteDouble(f64),
    WriteString(String),
    Write(String, i32),
}

/// Feeds an arbitrary call sequence to a writer and checks that the levels
/// it reports always agree with counters kept from the accepted calls, and
/// that a rejected call changes nothing.
fn drive(ops: Vec<Op>) {
    let mut writer = DocumentWriter::new();
    let mut documents = 0usize;
    let mut arrays = 0usize;

    for op in &ops {
        let before = (writer.document_level(), writer.array_level());
        let outcome = match op {
            Op::StartDocument => writer.start_document(),
            Op::StartDocumentNamed(name) => writer.start_document_named(name.as_str()),
            Op::EndDocument => writer.end_document(),
            Op::StartArray => writer.start_array(),
            Op::StartArrayNamed(name) => writer.start_array_named(name.as_str()),
            Op::EndArray => writer.end_array(),
            Op::WriteName(name) => writer.write_name(name.as_str()),
            Op::WriteNull => writer.write_value(Value::Null),
            Op::WriteBool(v) => writer.write_value(*v),
            Op::WriteInt(v) => writer.write_value(*v),
            Op::WriteDouble(v) => writer.write_value(*v),
            Op::WriteString(v) => writer.write_value(v.as_str()),
            Op::Write(name, value) => writer.write(name.as_str(), *value),
        };

        match outcome {
            Ok(()) => match op {
                Op::StartDocument | Op::StartDocumentNamed(_) => documents += 1,
                Op::EndDocument => documents -= 1,
                Op::StartArray | Op::StartArrayNamed(_) => arrays += 1,
                Op::EndArray => arrays -= 1,
                _ => {}
            },
            Err(_) => {
                assert_eq!((writer.document_level(), writer.array_level()), before);
            }
        }
        assert_eq!(writer.document_level(), documents);
        assert_eq!(writer.array_level(), arrays);

        // cloning the partial tree must never panic, whatever the state
        let _ = writer.snapshot();
    }

    let _ = writer.finish();
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    if let Ok(ops) = Vec::<Op>::arbitrary(&mut u) {
        drive(ops);
    }
});
