use serde::{Deserialize, Serialize};

/// `{number, status}` body served by `/get-num/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NumResponse {
    pub number: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `{message, status}` body returned by actions such as registration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Public user profile returned on login.
///
/// Role sub-documents are kept opaque; the front end only checks their presence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<serde_json::Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }
}

/// Body of `GET /users/validate`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserValidation {
    #[serde(alias = "isSuperuser")]
    pub is_superuser: bool,
}
