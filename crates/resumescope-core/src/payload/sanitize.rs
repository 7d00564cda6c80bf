use serde_json::{Map, Value};

/// Object keys that must never reach the renderer.
///
/// Matching is case-insensitive at every nesting depth.
pub const FORBIDDEN_KEYS: &[&str] = &["jsx"];

/// Returns a copy of `value` with every forbidden key removed.
///
/// Arrays and objects are rebuilt recursively; scalars are cloned as-is.
/// The input is never modified.
pub fn sanitize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .filter(|(key, _)| !is_forbidden(key))
                .map(|(key, nested)| (key.clone(), sanitize(nested)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar.clone(),
    }
}

/// Whether `key` collides with a reserved name, ignoring case.
pub fn is_forbidden(key: &str) -> bool {
    let lowered = key.to_lowercase();
    FORBIDDEN_KEYS.iter().any(|forbidden| lowered == *forbidden)
}
