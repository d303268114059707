use super::*;

fn opts() -> Options {
    Options::default()
}

#[test]
fn block_comment_is_dropped() {
    let out = crate::repair_to_string("{/* note */ \"a\": 1}", &opts());
    assert_eq!(out, "{ \"a\": 1}");
}

#[test]
fn line_comment_stops_before_newline() {
    let out = crate::repair_to_string("{\"a\": 1 // note\n}", &opts());
    assert_eq!(out, "{\"a\": 1 \n}");
}

#[test]
fn line_comment_at_end_of_input() {
    let out = crate::repair_to_string("[1] // tail", &opts());
    assert_eq!(out, "[1] ");
}

#[test]
fn unclosed_block_comment_consumes_rest() {
    let out = crate::repair_to_string("[1] /* tail", &opts());
    assert_eq!(out, "[1] ");
}

#[test]
fn comment_markers_inside_strings_survive() {
    let input = "{\"url\": \"http://example.com/*x*/\"}";
    assert_eq!(crate::repair_to_string(input, &opts()), input);
}

#[test]
fn single_slash_is_copied() {
    let input = "\"a\" / \"b\"";
    assert_eq!(crate::repair_to_string(input, &opts()), input);
}

#[test]
fn special_whitespace_becomes_plain_space() {
    let out = crate::repair_to_string("{\u{00A0}\"a\":\u{3000}1}", &opts());
    assert_eq!(out, "{ \"a\": 1}");
    let out = crate::repair_to_string("[1,\u{2009}2,\u{202F}3]", &opts());
    assert_eq!(out, "[1, 2, 3]");
}

#[test]
fn special_whitespace_inside_strings_is_kept() {
    let input = "{\"a\": \"x\u{00A0}y\"}";
    assert_eq!(crate::repair_to_string(input, &opts()), input);
}

#[test]
fn comment_between_key_and_value() {
    let out = crate::repair_to_string("{a: /* why */ 1}", &opts());
    assert_eq!(out, "{\"a\":  1}");
}
