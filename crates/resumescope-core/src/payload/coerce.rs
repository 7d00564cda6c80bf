//! Lenient scalar readers used by the normalizer.

use serde_json::Value;

/// Reads a finite number out of `value`.
///
/// Accepts JSON numbers and strings holding a decimal number (surrounding
/// whitespace ignored). NaN and infinities are rejected so they can never
/// leak into a rendered score.
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// String form of a scalar, if it has a meaningful one.
///
/// Blank strings count as missing. Null, arrays and objects have no label.
pub fn as_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First label found under any of `fields` in an object value.
pub fn label_field(value: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| value.get(*field).and_then(as_label))
}

/// First number found under any of `fields` in an object value.
pub fn number_field(value: &Value, fields: &[&str]) -> Option<f64> {
    fields
        .iter()
        .find_map(|field| value.get(*field).and_then(as_number))
}
