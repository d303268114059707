use super::*;

fn opts() -> Options {
    Options::default()
}

#[test]
fn repaired_output_decodes() {
    let v = crate::repair_to_value("{a: 'b', c: [1,2,3,],}", &opts()).unwrap();
    assert_eq!(v, serde_json::json!({"a": "b", "c": [1, 2, 3]}));
}

#[test]
fn jsonp_and_vendor_types_decode() {
    let v = crate::repair_to_value("cb({\"_id\": ObjectId(\"42\")});", &opts()).unwrap();
    assert_eq!(v, serde_json::json!({"_id": "42"}));
}

#[test]
fn unrepairable_input_surfaces_a_located_decode_error() {
    let err = crate::repair_to_value("{\"a\": 1", &opts()).unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.column > 0);
    assert!(!err.message.is_empty());
}

#[test]
fn bare_literal_key_fails_at_decode_stage() {
    // the repair pass leaves `true` bare in key position on purpose
    assert!(crate::repair_to_value("{true: 1}", &opts()).is_err());
}

#[test]
fn repaired_text_agrees_with_the_source_map() {
    let repaired = crate::repair_to_string("{a: 1, b: [2, 3]}", &opts());
    serde_json::from_str::<serde_json::Value>(&repaired).unwrap();
    assert!(build_map(&repaired).is_ok());
}
