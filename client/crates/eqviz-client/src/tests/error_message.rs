use crate::client::error_message::extract_error_message;

use serde_json::json;

#[test]
fn given_error_key_when_extract_then_uses_it() {
    let body = json!({ "error": "Dataset not found", "detail": "ignored" });
    assert_eq!(
        extract_error_message(&body).as_deref(),
        Some("Dataset not found")
    );
}

#[test]
fn given_detail_key_when_extract_then_uses_it() {
    let body = json!({ "detail": "Invalid token." });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Invalid token."));
}

#[test]
fn given_non_field_errors_when_extract_then_first_entry() {
    let body = json!({ "non_field_errors": ["Unable to log in with provided credentials."] });
    assert_eq!(
        extract_error_message(&body).as_deref(),
        Some("Unable to log in with provided credentials.")
    );
}

#[test]
fn given_field_errors_when_extract_then_prefixed_with_field() {
    let body = json!({ "username": ["A user with that username already exists."] });
    assert_eq!(
        extract_error_message(&body).as_deref(),
        Some("username: A user with that username already exists.")
    );
}

#[test]
fn given_empty_or_non_object_body_when_extract_then_none() {
    assert_eq!(extract_error_message(&json!({})), None);
    assert_eq!(extract_error_message(&json!("plain text")), None);
    assert_eq!(extract_error_message(&json!({ "error": "" })), None);
}
