//! Conversion tests against the serde_json adapter: representative document
//! roundtrips, failure propagation, and the depth guard.

#![cfg(feature = "json")]

use docval_core::{
    export, export_with_depth, import, import_with_depth, ConvertError, DocValue, JsonScalar,
    JsonValue, Kind, Map, NodeClass, Ordinal, Scalar, SourceNode, MAX_DEPTH,
};
use serde_json::json;

/// Assert that import → export reproduces the document exactly.
fn assert_roundtrip(doc: serde_json::Value) {
    let value: JsonValue = import(&doc).expect("import failed");
    let back: serde_json::Value = export(&value, &mut ()).expect("export failed");
    assert_eq!(
        back, doc,
        "roundtrip mismatch:\n  input:  {doc}\n  output: {back}"
    );
}

/// Helper: a variant holding an integer scalar.
fn int(n: i64) -> JsonValue {
    DocValue::variant(JsonScalar::from(n))
}

// ============================================================================
// Representative document roundtrips
// ============================================================================

#[test]
fn roundtrip_empty_object() {
    assert_roundtrip(json!({}));
}

#[test]
fn roundtrip_empty_array() {
    assert_roundtrip(json!([]));
}

#[test]
fn roundtrip_nested_object_with_number_array() {
    assert_roundtrip(json!({"metrics": {"samples": [1, 2, 3], "rate": 44100}}));
}

#[test]
fn roundtrip_array_of_mixed_scalars() {
    assert_roundtrip(json!(["text", 42, -7, 3.25, true, false, null]));
}

#[test]
fn roundtrip_deeply_nested_object_in_array_in_object() {
    assert_roundtrip(json!({"outer": [{"inner": {"leaf": [null, "x"]}}]}));
}

#[test]
fn roundtrip_root_scalars() {
    assert_roundtrip(json!(null));
    assert_roundtrip(json!(true));
    assert_roundtrip(json!(-12));
    assert_roundtrip(json!(2.5));
    assert_roundtrip(json!("solo"));
    assert_roundtrip(json!(""));
}

#[test]
fn roundtrip_unicode_strings() {
    assert_roundtrip(json!({"name": "caf\u{00e9}", "greeting": "\u{4f60}\u{597d}"}));
}

#[test]
fn roundtrip_preserves_number_representation() {
    // Integer-typed and float-typed numbers stay what they were.
    let doc = json!({"int": 5, "float": 5.0, "big": u64::MAX});
    let value: JsonValue = import(&doc).unwrap();
    let back: serde_json::Value = export(&value, &mut ()).unwrap();
    assert_eq!(back, doc);
    assert!(back["int"].is_i64());
    assert!(back["float"].is_f64());
    assert_eq!(back["big"].as_u64(), Some(u64::MAX));
}

// ============================================================================
// Shape mapping
// ============================================================================

#[test]
fn null_imports_as_empty_variant() {
    let value: JsonValue = import(&json!(null)).unwrap();
    assert_eq!(value.kind(), Kind::Variant);
    assert!(value.as_variant().unwrap().is_empty());
}

#[test]
fn empty_value_exports_as_null() {
    let value: JsonValue = JsonValue::default();
    let back: serde_json::Value = export(&value, &mut ()).unwrap();
    assert_eq!(back, json!(null));
}

#[test]
fn import_classifies_shapes() {
    let value: JsonValue = import(&json!({"a": [true]})).unwrap();
    assert!(value.is_map());
    assert!(value.get("a").unwrap().unwrap().is_array());

    // The adapter's own classification, for completeness.
    assert_eq!(json!({}).class(), NodeClass::Object);
    assert_eq!(json!([]).class(), NodeClass::Array);
    assert_eq!(json!(null).class(), NodeClass::Null);
    assert_eq!(json!(1).class(), NodeClass::Scalar);
}

#[test]
fn export_attaches_members_in_map_order() {
    // Source order b, a; the ordinal map reorders to a, b on export.
    let doc: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
    let value: JsonValue = import(&doc).unwrap();
    let back: serde_json::Value = export(&value, &mut ()).unwrap();

    let keys: Vec<&String> = back.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);
    // Still the same document under structural equality.
    assert_eq!(back, doc);
}

#[test]
fn handbuilt_map_exports_and_reimports() {
    let mut entries = Map::new();
    entries.insert("a".into(), int(1));
    entries.insert(
        "b".into(),
        JsonValue::array(vec![int(2), int(3)]).unwrap(),
    );
    let value = JsonValue::map(entries).unwrap();

    let back: serde_json::Value = export(&value, &mut ()).unwrap();
    assert_eq!(back, json!({"a": 1, "b": [2, 3]}));
    let keys: Vec<&String> = back.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);

    let reimported: JsonValue = import(&back).unwrap();
    assert_eq!(reimported, value);
}

// ============================================================================
// Failure propagation
// ============================================================================

/// A restricted scalar that only understands numbers; everything else
/// decodes to the empty scalar and fails the import.
#[derive(Clone, Debug, Default, PartialEq)]
struct NumberOnly(Option<f64>);

impl Scalar for NumberOnly {
    type Tag = ();

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn tag(&self) -> Self::Tag {}
}

impl docval_core::DecodeScalar<serde_json::Value> for NumberOnly {
    fn decode(node: &serde_json::Value) -> Self {
        NumberOnly(node.as_f64())
    }
}

#[test]
fn unrecognized_scalar_fails_the_whole_import() {
    let doc = json!({"ok": 1.5, "bad": "not a number"});
    let err = import::<_, NumberOnly, Ordinal>(&doc).unwrap_err();
    assert_eq!(err, ConvertError::UnrecognizedScalar);
}

#[test]
fn restricted_scalar_accepts_its_own_repertoire() {
    let doc = json!([1, 2.5, -3]);
    let value: DocValue<NumberOnly> = import(&doc).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn non_finite_float_fails_export() {
    let value: JsonValue = JsonValue::variant(JsonScalar::Float(f64::NAN));
    let err = export::<serde_json::Value, _, _>(&value, &mut ()).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedScalar(_)));

    // Nested: the failure aborts the containing structure too.
    let inf = JsonValue::variant(JsonScalar::Float(f64::INFINITY));
    let nested = JsonValue::array(vec![int(1), inf]).unwrap();
    assert!(export::<serde_json::Value, _, _>(&nested, &mut ()).is_err());
}

// ============================================================================
// Depth guard
// ============================================================================

/// Build `{"k": {"k": ... null ...}}` nested `levels` objects deep.
fn nested_doc(levels: usize) -> serde_json::Value {
    let mut doc = json!(null);
    for _ in 0..levels {
        doc = json!({ "k": doc });
    }
    doc
}

#[test]
fn import_rejects_pathological_nesting() {
    let doc = nested_doc(MAX_DEPTH + 10);
    let err = import::<_, JsonScalar, Ordinal>(&doc).unwrap_err();
    assert_eq!(err, ConvertError::DepthLimit { limit: MAX_DEPTH });
}

#[test]
fn import_within_custom_limit_succeeds() {
    let doc = nested_doc(MAX_DEPTH + 10);
    let value: JsonValue = import_with_depth(&doc, MAX_DEPTH + 32).unwrap();
    let back: serde_json::Value = export_with_depth(&value, &mut (), MAX_DEPTH + 32).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn export_enforces_the_limit_symmetrically() {
    // Hand-build a value four levels deep, then export with a tight limit.
    let level3 = JsonValue::array(vec![int(1)]).unwrap();
    let level2 = JsonValue::array(vec![level3]).unwrap();
    let deep = JsonValue::array(vec![level2]).unwrap();
    let err = export_with_depth::<serde_json::Value, _, _>(&deep, &mut (), 3).unwrap_err();
    assert_eq!(err, ConvertError::DepthLimit { limit: 3 });
    assert!(export_with_depth::<serde_json::Value, _, _>(&deep, &mut (), 4).is_ok());
}
