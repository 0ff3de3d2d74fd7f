//! Tolerant JSON parser tests.
//!
//! The parser accepts strict JSON plus comments, trailing commas and a
//! leading byte-order mark. Everything else is rejected with a position.

use json_scss_importer::json::{format_number, parse, parse_with_limits, JsonValue, Limits};
use json_scss_importer::JsonError;

// ============================================================================
// Strict JSON
// ============================================================================

#[test]
fn parses_every_value_kind() {
    let value = parse(r#"{"s": "x", "n": -1.5e2, "t": true, "f": false, "z": null, "a": [], "o": {}}"#)
        .unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.get("s"), Some(&JsonValue::from("x")));
    assert_eq!(map.get("n"), Some(&JsonValue::Number(-150.0)));
    assert_eq!(map.get("t"), Some(&JsonValue::Bool(true)));
    assert_eq!(map.get("f"), Some(&JsonValue::Bool(false)));
    assert_eq!(map.get("z"), Some(&JsonValue::Null));
    assert!(map.get("a").is_some_and(JsonValue::is_array));
    assert!(map.get("o").is_some_and(JsonValue::is_object));
}

#[test]
fn preserves_key_order() {
    let value = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn duplicate_key_keeps_first_position_and_last_value() {
    let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let map = value.as_object().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(map.get("a"), Some(&JsonValue::Number(3.0)));
}

#[test]
fn decodes_escapes_and_surrogate_pairs() {
    let value = parse(r#""tab\t quote\" slash\/ é 😀""#).unwrap();
    assert_eq!(value.as_str(), Some("tab\t quote\" slash/ \u{e9} \u{1F600}"));
}

#[test]
fn unpaired_surrogates_rejected() {
    for input in [r#""\uD800""#, r#""\uDC00""#, r#""\uD800A""#] {
        assert!(
            matches!(parse(input), Err(JsonError::InvalidEscape { .. })),
            "{} should be rejected",
            input
        );
    }
}

#[test]
fn raw_control_characters_rejected() {
    let result = parse("\"line\nbreak\"");
    assert!(
        matches!(result, Err(JsonError::ControlCharacter { codepoint: 0x0A, .. })),
        "{:?}",
        result
    );
}

#[test]
fn out_of_range_numbers_accepted() {
    let value = parse(r#"{"big": 1e400, "tiny": 1e-400, "low": -1e400}"#).unwrap();
    assert_eq!(value.get("big"), Some(&JsonValue::Number(f64::INFINITY)));
    assert_eq!(value.get("tiny"), Some(&JsonValue::Number(0.0)));
    assert_eq!(value.get("low"), Some(&JsonValue::Number(f64::NEG_INFINITY)));
}

#[test]
fn malformed_numbers_rejected() {
    for input in ["01", "1.", ".5", "-", "1e", "+1"] {
        assert!(parse(input).is_err(), "{} should be rejected", input);
    }
}

// ============================================================================
// Tolerated extensions
// ============================================================================

#[test]
fn line_and_block_comments_allowed() {
    let input = r#"
        // leading comment
        {
            /* before key */ "a": 1, // after value
            "b": /* inline */ 2
        }
        /* trailing comment */
    "#;
    let value = parse(input).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn trailing_commas_allowed() {
    let value = parse(r#"{"list": [1, 2, 3,], "map": {"k": "v",},}"#).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(
        map.get("list"),
        Some(&JsonValue::from(vec![
            JsonValue::Number(1.0),
            JsonValue::Number(2.0),
            JsonValue::Number(3.0),
        ]))
    );
}

#[test]
fn leading_byte_order_mark_skipped() {
    let value = parse("\u{FEFF}{\"a\": 1}").unwrap();
    assert!(value.is_object());
}

#[test]
fn empty_elements_rejected() {
    for input in ["[,]", "[1,,2]", "{,}", r#"{"a": 1,,}"#] {
        assert!(parse(input).is_err(), "{} should be rejected", input);
    }
}

// ============================================================================
// Error positions
// ============================================================================

#[test]
fn unquoted_key_reports_position() {
    let err = parse("{\n  color: 1\n}").unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedCharacter { found: 'c', .. }));
    assert_eq!(err.to_string(), "unexpected character 'c' at line 2, column 3");
}

#[test]
fn missing_closing_brace_is_unexpected_end() {
    let err = parse("{\"a\": 1").unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedEnd { .. }), "{:?}", err);
}

#[test]
fn unterminated_comment_rejected() {
    assert!(matches!(
        parse("{} /* open"),
        Err(JsonError::UnterminatedComment { .. })
    ));
}

#[test]
fn content_after_value_rejected() {
    assert!(matches!(
        parse("{} {}"),
        Err(JsonError::TrailingContent { .. })
    ));
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn input_size_limit_enforced() {
    let limits = Limits {
        max_input_size: 8,
        ..Limits::standard()
    };
    assert!(matches!(
        parse_with_limits(r#"{"key": "value"}"#, limits),
        Err(JsonError::InputTooLarge { size: 16, limit: 8 })
    ));
}

#[test]
fn nesting_limit_enforced() {
    let deep = format!("{}{}", "[".repeat(40), "]".repeat(40));
    assert!(parse(&deep).is_ok());
    assert!(matches!(
        parse_with_limits(&deep, Limits::strict()),
        Err(JsonError::NestingTooDeep { limit: 32, .. })
    ));
}

// ============================================================================
// Number formatting
// ============================================================================

#[test]
fn numbers_format_like_css_literals() {
    let cases = [
        (0.0, "0"),
        (-0.0, "0"),
        (12.0, "12"),
        (1.5, "1.5"),
        (-0.25, "-0.25"),
        (100000.0, "100000"),
        (1e21, "1e+21"),
        (1.5e-7, "1.5e-7"),
    ];
    for (value, expected) in cases {
        assert_eq!(format_number(value).as_deref(), Some(expected), "{}", value);
    }
    assert_eq!(format_number(f64::NAN), None);
    assert_eq!(format_number(f64::INFINITY), None);
}
