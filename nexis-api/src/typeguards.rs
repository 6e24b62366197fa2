//! Structural checks on raw JSON bodies.
//!
//! Each guard answers one question about the shape of a value; deciding which
//! shape wins is left to [`crate::envelope::ApiPayload::classify`].

use serde_json::Value;

/// `true` when `value` carries a numeric `number` field.
pub fn is_num_response(value: &Value) -> bool {
    value.get("number").is_some_and(Value::is_number)
}

/// `true` when `value` carries a string `message` field.
pub fn is_message_response(value: &Value) -> bool {
    value.get("message").is_some_and(Value::is_string)
}

/// `true` when `value` looks like a user profile (string `email` and `name`).
pub fn is_user(value: &Value) -> bool {
    value.get("email").is_some_and(Value::is_string)
        && value.get("name").is_some_and(Value::is_string)
}

/// `true` when `value` carries a string `error` field.
pub fn is_error_response(value: &Value) -> bool {
    value.get("error").is_some_and(Value::is_string)
}
