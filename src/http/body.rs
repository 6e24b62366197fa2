use reqwest::RequestBuilder;
use reqwest::multipart::Form;
use serde::Serialize;

use crate::error::ClientError;

/// Body of a POST/PUT/PATCH/DELETE request.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Sent with `Content-Type: application/json`
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`; the boundary is set by the encoder
    Multipart(Form),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json(_) => "json",
            Self::Multipart(_) => "multipart",
        }
    }

    pub(crate) fn apply(self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Empty => request,
            Self::Json(value) => request.json(&value),
            Self::Multipart(form) => request.multipart(form),
        }
    }
}

impl From<Form> for RequestBody {
    fn from(form: Form) -> Self {
        Self::Multipart(form)
    }
}
