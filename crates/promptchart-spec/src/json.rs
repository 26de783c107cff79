//! Small helpers for reading loosely-typed JSON.

use serde_json::Value;

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a possibly-absent value for an error message. Strings are shown
/// without quotes; an absent value prints as `undefined`.
pub(crate) fn describe(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for v in [json!(true), json!(1), json!(-0.5), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn describe_formats() {
        assert_eq!(describe(None), "undefined");
        assert_eq!(describe(Some(&json!("radar"))), "radar");
        assert_eq!(describe(Some(&json!(null))), "null");
        assert_eq!(describe(Some(&json!(42))), "42");
    }
}
