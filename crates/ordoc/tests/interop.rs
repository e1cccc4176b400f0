//! Round-trips between documents and serde_json values and text.

use ordoc::{Document, Value, doc};
use serde_json::json;

#[test]
fn serializes_as_natural_json() {
    let document = doc! {
        "name": "ada",
        "tags": vec!["a", "b"],
        "meta": doc! { "n": 1 },
    };

    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json, json!({ "name": "ada", "tags": ["a", "b"], "meta": { "n": 1 } }));

    // preserve_order keeps the field order observable on the serde_json side
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["name", "tags", "meta"]);
}

#[test]
fn null_and_scalars_map_to_their_json_shapes() {
    let document = doc! {
        "absent": Value::Null,
        "flag": false,
        "ratio": 1.5,
    };
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        json!({ "absent": null, "flag": false, "ratio": 1.5 })
    );
}

#[test]
fn integers_narrow_on_the_way_in() {
    let document: Document =
        serde_json::from_value(json!({ "small": 1, "big": 7_000_000_000_i64 })).unwrap();
    assert_eq!(document["small"], Value::Int32(1));
    assert_eq!(document["big"], Value::Int64(7_000_000_000));
}

#[test]
fn round_trips_through_json_text() {
    let document = doc! {
        "a": 1,
        "b": doc! { "c": vec![1.5, 2.5] },
        "d": Value::Null,
    };

    let text = serde_json::to_string(&document).unwrap();
    let back: Document = serde_json::from_str(&text).unwrap();
    assert_eq!(back, document);
}

#[test]
fn values_deserialize_at_the_top_level() {
    let value: Value = serde_json::from_str(r#"[1, null, {"k": "v"}]"#).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Int32(1),
            Value::Null,
            Value::Document(doc! { "k": "v" }),
        ])
    );
}

#[derive(serde::Serialize)]
struct Book {
    title: String,
    year: i32,
}

#[test]
fn derived_structs_convert_to_documents() {
    let book = Book { title: "Dune".into(), year: 1965 };
    let document: Document =
        serde_json::from_value(serde_json::to_value(&book).unwrap()).unwrap();
    assert_eq!(document, doc! { "title": "Dune", "year": 1965 });
}
