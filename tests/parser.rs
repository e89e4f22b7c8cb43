use descent_json::{error::Kind, parse, Map, Value};
use rstest::rstest;

#[test]
fn parse_basics() {
    let data = r#"
    {
        "hello": "world",
        "vec": [
            {
        "num1": 1,
        "num2": 1.2,
        "num3": -12
    }
        ],
    "is": false,
    "is_not": true,
    "empty": null
    }
    "#;

    let parsed = parse(data).unwrap();
    let object = parsed.unwrap_object();

    assert_eq!(object.len(), 6);
    assert_eq!(object["hello"].unwrap_string(), "world");

    let inner = object["vec"].unwrap_array()[0].unwrap_object();

    assert_eq!(inner["num1"].unwrap_integer(), 1);
    assert_eq!(inner["num2"].unwrap_float(), 1.2);
    assert_eq!(inner["num3"].unwrap_integer(), -12);
    assert!(!object["is"].unwrap_bool());
    assert!(object["is_not"].unwrap_bool());
    object["empty"].unwrap_null();
}

#[test]
fn keys_keep_insertion_order() {
    let parsed = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = parsed.unwrap_object().keys().map(String::as_str).collect();

    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let parsed = parse(r#"{"a":1,"a":2}"#).unwrap();
    let object = parsed.unwrap_object();

    assert_eq!(object.len(), 1);
    assert_eq!(object["a"], Value::Integer(2));
}

#[test]
fn empty_containers() {
    assert_eq!(parse("{}").unwrap(), Value::Object(Map::new()));

    let parsed = parse(r#"{"x":[]}"#).unwrap();

    assert_eq!(parsed.get("x"), Some(&Value::Array(Vec::new())));
}

#[test]
fn whitespace_is_insignificant_between_tokens() {
    assert_eq!(
        parse("{ \"k\" : 1 }").unwrap(),
        parse("{\"k\":1}").unwrap()
    );
    assert_eq!(
        parse("\r\n\t{\n\t\"k\"\n:\n[ 1 ,\t2 ]\n}\r\n").unwrap(),
        parse("{\"k\":[1,2]}").unwrap()
    );
}

#[test]
fn escaped_quote_in_string() {
    let parsed = parse("{\"m\":\"a\\\"b\"}").unwrap();

    assert_eq!(parsed.get("m").and_then(Value::as_str), Some("a\"b"));
}

#[test]
fn escaped_string_in_message() {
    let parsed = parse(r#"{"message":"Hello, \"world\"!"}"#).unwrap();

    assert_eq!(parsed.get("message").unwrap().unwrap_string(), "Hello, \"world\"!");
}

#[test]
fn escapes_in_keys_are_decoded() {
    let parsed = parse(r#"{"a\tb": true}"#).unwrap();

    assert_eq!(parsed.get("a\tb"), Some(&Value::Bool(true)));
}

#[test]
fn non_ascii_text_is_kept() {
    let parsed = parse(r#"{"名前": "Zoë"}"#).unwrap();

    assert_eq!(parsed.get("名前").and_then(Value::as_str), Some("Zoë"));
}

#[test]
fn number_classification() {
    let integer = parse(r#"{"n":10}"#).unwrap();
    let float = parse(r#"{"n":10.5}"#).unwrap();

    assert_eq!(integer.get("n"), Some(&Value::Integer(10)));
    assert_eq!(float.get("n"), Some(&Value::Float(10.5)));
}

#[test]
fn null_is_distinct_from_missing_key() {
    let parsed = parse(r#"{"k":null}"#).unwrap();

    assert_eq!(parsed.get("k"), Some(&Value::Null));
    assert!(parsed.get("k").unwrap().is_null());
    assert_eq!(parsed.get("other"), None);
}

#[test]
fn nested_objects() {
    let parsed = parse(r#"{"person":{"name":"John","age":30},"isActive":true}"#).unwrap();
    let person = parsed.get("person").unwrap();

    assert_eq!(person.get("name").and_then(Value::as_str), Some("John"));
    assert_eq!(person.get("age").and_then(Value::as_i32), Some(30));
    assert_eq!(parsed.get("isActive").and_then(Value::as_bool), Some(true));
}

#[test]
fn array_of_mixed_values() {
    let parsed = parse(r#"{"a":[1, -2.5, "s", true, false, null, {}, [[]]]}"#).unwrap();

    assert_eq!(
        parsed.get("a").unwrap(),
        &Value::Array(vec![
            1.into(),
            (-2.5).into(),
            "s".into(),
            true.into(),
            false.into(),
            Value::Null,
            Value::Object(Map::new()),
            Value::Array(vec![Value::Array(Vec::new())]),
        ])
    );
}

#[test]
fn from_str_delegates_to_parse() {
    let parsed: Value = r#"{"a": [1]}"#.parse().unwrap();

    assert_eq!(parsed, parse(r#"{"a":[1]}"#).unwrap());
}

#[rstest]
#[case::trailing_comma_in_object(r#"{"a":1,}"#, Kind::TrailingComma)]
#[case::trailing_comma_before_spaces(r#"{"a":1 ,  }"#, Kind::TrailingComma)]
#[case::missing_comma(r#"{"a":1 "b":2}"#, Kind::ExpectedDelimiter { closing: '}', actual: '"' })]
#[case::missing_comma_in_array(r#"{"a":[1 2]}"#, Kind::ExpectedDelimiter { closing: ']', actual: '2' })]
#[case::trailing_comma_in_array(r#"{"a":[1,]}"#, Kind::UnexpectedToken { expected: None, actual: ']' })]
#[case::missing_colon(r#"{"a" 1}"#, Kind::UnexpectedToken { expected: Some(':'), actual: '1' })]
#[case::unquoted_key(r#"{a:1}"#, Kind::UnexpectedToken { expected: Some('"'), actual: 'a' })]
#[case::single_quotes(r#"{"a":'x'}"#, Kind::UnexpectedToken { expected: None, actual: '\'' })]
#[case::bad_literal(r#"{"a":tru}"#, Kind::UnexpectedToken { expected: Some('e'), actual: '}' })]
#[case::capitalized_literal(r#"{"a":True}"#, Kind::UnexpectedToken { expected: None, actual: 'T' })]
#[case::unterminated_string(r#"{"a":"abc"#, Kind::UnterminatedString)]
#[case::unknown_escape(r#"{"a":"\x"}"#, Kind::InvalidEscapeSequence('x'))]
#[case::unicode_escape(r#"{"a":"\u00e9"}"#, Kind::InvalidEscapeSequence('u'))]
#[case::lone_minus(r#"{"a":-}"#, Kind::InvalidNumber("-".into()))]
#[case::exponent(r#"{"a":1e10}"#, Kind::ExpectedDelimiter { closing: '}', actual: 'e' })]
#[case::empty_input("", Kind::UnexpectedEndOfInput)]
#[case::unclosed_object(r#"{"a":1"#, Kind::UnexpectedEndOfInput)]
#[case::unclosed_array(r#"{"a":[1,2"#, Kind::UnexpectedEndOfInput)]
#[case::chars_after_root(r#"{"a":1} x"#, Kind::CharsAfterRoot("x".into()))]
fn rejects_malformed_input(#[case] input: &str, #[case] expected: Kind) {
    let error = parse(input).unwrap_err();

    assert_eq!(error.kind, expected);
}

#[rstest]
#[case::array("[1, 2]")]
#[case::string(r#""hello""#)]
#[case::number("42")]
#[case::literal("null")]
fn rejects_non_object_root(#[case] input: &str) {
    let error = parse(input).unwrap_err();

    assert!(matches!(
        error.kind,
        Kind::UnexpectedToken {
            expected: Some('{'),
            ..
        }
    ));
}

#[test]
fn error_points_at_line_and_column() {
    let data = "{\n  \"a\": 1,\n  \"b\": [1, 2,]\n}";

    let error = parse(data).unwrap_err();

    assert_eq!(
        error.kind,
        Kind::UnexpectedToken {
            expected: None,
            actual: ']'
        }
    );
    assert_eq!(error.position.line, 3);
    assert_eq!(error.position.col, 14);
    assert_eq!(&data[error.offset..error.offset + 1], "]");
    assert_eq!(
        error.to_string(),
        "unexpected token ']' at line 3, column 14"
    );
}

#[test]
fn deep_nesting_is_an_error() {
    let data = format!("{{\"a\":{}", "[".repeat(100_000));

    let error = parse(&data).unwrap_err();

    assert_eq!(error.kind, Kind::RecursionLimit(128));
    assert_eq!(error.offset, "{\"a\":".len() + 127);
}

#[test]
fn deep_closed_nesting_is_an_error() {
    let data = format!(
        "{{\"a\":{}{}}}",
        "[".repeat(200_000),
        "]".repeat(200_000)
    );

    assert_eq!(parse(&data).unwrap_err().kind, Kind::RecursionLimit(128));
}

#[test]
fn unterminated_string_points_at_opening_quote() {
    let error = parse("{\"a\": \"never closed}").unwrap_err();

    assert_eq!(error.kind, Kind::UnterminatedString);
    assert_eq!(error.offset, 6);
}

mod round_trip {
    use descent_json::{parse, Value};
    use serde_json::json;

    fn round_trip(document: serde_json::Value) {
        let text = serde_json::to_string_pretty(&document).unwrap();

        let parsed = parse(&text).unwrap();

        assert_eq!(serde_json::to_value(&parsed).unwrap(), document);
    }

    #[test]
    fn encoder_output_parses_back() {
        round_trip(json!({
            "name": "John",
            "age": 30,
            "city": "New York",
            "scores": [1, -2, 3.25, -0.5],
            "nested": { "deep": { "deeper": [[], {}, [null]] } },
            "flags": [true, false],
            "text": "tab\tquote\"slash\\newline\n",
            "nothing": null
        }));
    }

    #[test]
    fn compact_encoder_output_parses_back() {
        let document = json!({"a": [1, 2, {"b": "c"}], "d": 1.5});
        let text = serde_json::to_string(&document).unwrap();

        assert_eq!(serde_json::to_value(parse(&text).unwrap()).unwrap(), document);
    }

    #[test]
    fn large_integers_become_floats() {
        let parsed = parse(r#"{"big": 3000000000, "small": -2147483648}"#).unwrap();

        assert_eq!(parsed.get("big"), Some(&Value::Float(3_000_000_000.0)));
        assert_eq!(parsed.get("small"), Some(&Value::Integer(i32::MIN)));
    }
}
