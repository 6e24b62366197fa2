use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ErrorResponse;
use crate::responses::{ApiResponse, NumResponse, User};
use crate::typeguards::{is_error_response, is_message_response, is_num_response, is_user};

/// Tagged response envelope.
///
/// On the wire: `{"kind": "num", "payload": {"number": 5}}`. Bodies from
/// backends that still send bare shapes are converted once, by
/// [`ApiPayload::classify`].
///
/// ```rust
/// use nexis_api::ApiPayload;
///
/// let payload = ApiPayload::classify(serde_json::json!({ "number": 5 })).unwrap();
/// assert_eq!(payload.kind(), "num");
/// ```
///
/// The backend's `/get-num/` and `/add-num/` answer with a bare JSON number,
/// which classifies as [`ApiPayload::Num`] without a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum ApiPayload {
    Num(NumResponse),
    Message(ApiResponse),
    User(User),
    Error(ErrorResponse),
    Empty,
}

const KINDS: [&str; 5] = ["num", "message", "user", "error", "empty"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("Ambiguous response shape: matches {}", .0.join(", "))]
    Ambiguous(Vec<&'static str>),
    #[error("Unknown response shape")]
    Unknown,
    #[error("Malformed {kind} response: {reason}")]
    Malformed { kind: &'static str, reason: String },
}

impl ApiPayload {
    /// Turns a decoded JSON body into exactly one payload kind.
    ///
    /// A body is tagged when its `kind` names one of the payload kinds.
    /// Tagged bodies are decoded as they are. Bare bodies must match exactly
    /// one known shape, so a user record with its own `kind` field still
    /// classifies as a user.
    pub fn classify(value: Value) -> Result<Self, ShapeError> {
        if value.is_null() {
            return Ok(Self::Empty);
        }

        if let Some(number) = value.as_f64() {
            return Ok(Self::Num(NumResponse {
                number,
                status: None,
            }));
        }

        if is_tagged(&value) {
            return serde_json::from_value(value).map_err(|e| ShapeError::Malformed {
                kind: "tagged",
                reason: e.to_string(),
            });
        }

        let candidates: Vec<&'static str> = [
            ("num", is_num_response(&value)),
            ("message", is_message_response(&value)),
            ("user", is_user(&value)),
            ("error", is_error_response(&value)),
        ]
        .into_iter()
        .filter_map(|(kind, matched)| matched.then_some(kind))
        .collect();

        match candidates.as_slice() {
            [] => Err(ShapeError::Unknown),
            ["num"] => decode(value, "num").map(Self::Num),
            ["message"] => decode(value, "message").map(Self::Message),
            ["user"] => decode(value, "user").map(Self::User),
            ["error"] => decode(value, "error").map(Self::Error),
            _ => Err(ShapeError::Ambiguous(candidates)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Num(_) => "num",
            Self::Message(_) => "message",
            Self::User(_) => "user",
            Self::Error(_) => "error",
            Self::Empty => "empty",
        }
    }

    pub fn into_num(self) -> Option<NumResponse> {
        match self {
            Self::Num(num) => Some(num),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<ApiResponse> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_user(self) -> Option<User> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }
}

fn is_tagged(value: &Value) -> bool {
    value
        .get("kind")
        .and_then(Value::as_str)
        .is_some_and(|kind| KINDS.contains(&kind))
}

fn decode<T: serde::de::DeserializeOwned>(value: Value, kind: &'static str) -> Result<T, ShapeError> {
    serde_json::from_value(value).map_err(|e| ShapeError::Malformed {
        kind,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_number_body_becomes_num() {
        let payload = ApiPayload::classify(json!({ "number": 5, "status": "ok" })).unwrap();
        assert_eq!(
            payload,
            ApiPayload::Num(NumResponse {
                number: 5.0,
                status: Some("ok".to_string()),
            })
        );
    }

    #[test]
    fn bare_json_number_becomes_num() {
        assert_eq!(
            ApiPayload::classify(json!(7)).unwrap(),
            ApiPayload::Num(NumResponse {
                number: 7.0,
                status: None,
            })
        );
        assert_eq!(
            ApiPayload::classify(json!(-2.5)).unwrap().into_num().unwrap().number,
            -2.5
        );
    }

    #[test]
    fn bare_user_body_becomes_user() {
        let payload =
            ApiPayload::classify(json!({ "email": "a@b.io", "name": "Ana", "admin": {} })).unwrap();
        let user = payload.into_user().unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn body_matching_two_shapes_is_rejected() {
        let err = ApiPayload::classify(json!({ "number": 1, "message": "hi" })).unwrap_err();
        assert_eq!(err, ShapeError::Ambiguous(vec!["num", "message"]));
        assert_eq!(err.to_string(), "Ambiguous response shape: matches num, message");
    }

    #[test]
    fn body_matching_no_shape_is_rejected() {
        assert_eq!(
            ApiPayload::classify(json!({ "status": "ok" })),
            Err(ShapeError::Unknown)
        );
    }

    #[test]
    fn tagged_body_is_decoded_without_sniffing() {
        let payload = ApiPayload::classify(json!({
            "kind": "message",
            "payload": { "message": "created", "number": 3 }
        }))
        .unwrap();
        assert_eq!(payload.kind(), "message");
        assert_eq!(
            payload.into_message().unwrap().message.as_deref(),
            Some("created")
        );
    }

    #[test]
    fn user_with_unrelated_kind_field_is_not_tagged() {
        let payload = ApiPayload::classify(json!({
            "email": "a@b.io",
            "name": "Ana",
            "kind": "client"
        }))
        .unwrap();
        assert_eq!(payload.kind(), "user");
        assert_eq!(payload.into_user().unwrap().email, "a@b.io");
    }

    #[test]
    fn unrelated_kind_without_known_shape_is_unknown() {
        assert_eq!(
            ApiPayload::classify(json!({ "kind": "banner", "payload": {} })),
            Err(ShapeError::Unknown)
        );
    }

    #[test]
    fn tagged_body_with_wrong_payload_is_malformed() {
        let err = ApiPayload::classify(json!({ "kind": "num", "payload": { "number": "x" } }))
            .unwrap_err();
        assert!(matches!(err, ShapeError::Malformed { kind: "tagged", .. }));
    }

    #[test]
    fn empty_serializes_with_kind_only() {
        let json = serde_json::to_value(ApiPayload::Empty).unwrap();
        assert_eq!(json, json!({ "kind": "empty" }));
        assert_eq!(ApiPayload::classify(json).unwrap(), ApiPayload::Empty);
    }
}
