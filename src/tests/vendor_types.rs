use super::*;

fn opts() -> Options {
    Options::default()
}

#[test]
fn objectid_unwraps_to_its_string() {
    let out = crate::repair_to_string(
        "{\"_id\": ObjectId(\"507f1f77bcf86cd799439011\")}",
        &opts(),
    );
    assert_eq!(out, "{\"_id\": \"507f1f77bcf86cd799439011\"}");
}

#[test]
fn numeric_argument_is_kept_verbatim() {
    let out = crate::repair_to_string("{a: NumberLong(2)}", &opts());
    assert_eq!(out, "{\"a\": 2}");
}

#[test]
fn single_quoted_argument_is_normalized() {
    let out = crate::repair_to_string("{d: ISODate('2012-12-19T06:01:17.171Z')}", &opts());
    assert_eq!(out, "{\"d\": \"2012-12-19T06:01:17.171Z\"}");
}

#[test]
fn missing_closing_paren_reconstructs_the_call() {
    let out = crate::repair_to_string("{a: Foo(1}", &opts());
    assert_eq!(out, "{\"a\": Foo(1}");
}

#[test]
fn identifier_without_parens_flows_through() {
    let out = crate::repair_to_string("{a: undefined}", &opts());
    assert_eq!(out, "{\"a\": undefined}");
}

#[test]
fn unwrapping_can_be_disabled() {
    let mut o = opts();
    o.unwrap_vendor_types = false;
    let out = crate::repair_to_string("{a: NumberLong(2)}", &o);
    assert_eq!(out, "{\"a\": NumberLong(2)}");
}

#[test]
fn constructor_after_open_bracket_unwraps() {
    let out = crate::repair_to_string("[ObjectId(\"aa\")]", &opts());
    assert_eq!(out, "[\"aa\"]");
}

#[test]
fn identifier_after_comma_is_key_position() {
    // rule order: after `,` an identifier run is quoted like a key, even
    // inside an array; constructors only unwrap after `[` or `:`
    let out = crate::repair_to_string("[a, b]", &opts());
    assert_eq!(out, "[a, \"b\"]");
    let out = crate::repair_to_string("[ObjectId(\"aa\"), NumberInt(7)]", &opts());
    assert_eq!(out, "[\"aa\", \"NumberInt\"(7)]");
}
