//! Python literal rendering for JSON values.
//!
//! Defaults and `field(...)` keyword values arrive as `serde_json::Value` and
//! must be written the way Python's `repr()` would spell them.

use serde_json::Value;

/// Render a JSON value as a Python literal, mirroring `repr()`.
///
/// `null` -> `None`, booleans -> `True`/`False`, strings get Python quoting,
/// arrays and objects become list and dict displays.
#[must_use]
pub fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(b) => bool_literal(*b).to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => repr_str(s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", repr_str(k), repr(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// Render a value for a decorator argument.
///
/// Strings are emitted verbatim so callers can pass expressions; every other
/// value renders as its Python literal.
#[must_use]
pub fn argument_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => repr(other),
    }
}

/// Python truthiness of a JSON value.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

const fn bool_literal(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Quote a string the way `repr(str)` does: single quotes unless the text
/// contains a single quote and no double quote.
fn repr_str(s: &str) -> String {
    let quote: char = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out: String = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            other => out.push(other),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repr_scalars() {
        assert_eq!("None", repr(&Value::Null));
        assert_eq!("True", repr(&json!(true)));
        assert_eq!("False", repr(&json!(false)));
        assert_eq!("42", repr(&json!(42)));
        assert_eq!("1.5", repr(&json!(1.5)));
    }

    #[test]
    fn repr_string_uses_single_quotes() {
        let actual: String = repr(&json!("abc"));
        let expected: &str = "'abc'";
        assert_eq!(expected, actual);
    }

    #[test]
    fn repr_string_with_single_quote_switches_to_double() {
        let actual: String = repr(&json!("it's"));
        let expected: &str = "\"it's\"";
        assert_eq!(expected, actual);
    }

    #[test]
    fn repr_string_with_both_quotes_escapes_single() {
        let actual: String = repr(&json!("it's \"x\""));
        let expected: &str = "'it\\'s \"x\"'";
        assert_eq!(expected, actual);
    }

    #[test]
    fn repr_string_escapes_backslash_and_newline() {
        let actual: String = repr(&json!("a\\b\nc"));
        let expected: &str = "'a\\\\b\\nc'";
        assert_eq!(expected, actual);
    }

    #[test]
    fn repr_compound_values() {
        assert_eq!("[1, 'a', None]", repr(&json!([1, "a", null])));
        assert_eq!("{'k': True}", repr(&json!({"k": true})));
        assert_eq!("[]", repr(&json!([])));
    }

    #[test]
    fn repr_object_keeps_source_key_order() {
        let source: &str = r#"{"z": 1, "a": 2, "m": {"y": null, "b": []}}"#;
        let value: Value = serde_json::from_str(source).expect("valid JSON");
        let expected: &str = "{'z': 1, 'a': 2, 'm': {'y': None, 'b': []}}";
        assert_eq!(expected, repr(&value));
    }

    #[test]
    fn argument_text_passes_strings_verbatim() {
        assert_eq!("my_hash", argument_text(&json!("my_hash")));
        assert_eq!("True", argument_text(&json!(true)));
        assert_eq!("3", argument_text(&json!(3)));
    }

    #[test]
    fn truthiness_follows_python() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([0])));
    }
}
