use serde::{Deserialize, Serialize};

/// Backend error body, e.g. `{"error": "not found"}`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// One entry of a client-side error list.
///
/// `id` is the position of the entry in the list it was reported with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct CustomError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

impl CustomError {
    pub fn new(error: impl Into<String>, id: u32) -> Self {
        Self {
            error: Some(error.into()),
            id: Some(id),
        }
    }

    /// Numbers a list of messages from zero.
    pub fn list<I, S>(messages: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        messages
            .into_iter()
            .zip(0u32..)
            .map(|(message, id)| Self::new(message, id))
            .collect()
    }

    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}
