use serde_json::Value;

/// Pull a human readable message out of an error body.
///
/// Looks at `error`, then `detail`, then `non_field_errors`, then the first
/// field error (rendered as `field: message`).
pub(crate) fn extract_error_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;

    for key in ["error", "detail"] {
        if let Some(message) = object.get(key).and_then(first_message) {
            return Some(message);
        }
    }

    if let Some(message) = object.get("non_field_errors").and_then(first_message) {
        return Some(message);
    }

    object
        .iter()
        .find_map(|(field, value)| first_message(value).map(|m| format!("{field}: {m}")))
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}
