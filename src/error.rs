// src/error.rs

use nexis_api::{CustomError, PasswordIssue, ShapeError};
use reqwest::StatusCode;

/// Message used when a failed response carries no readable error body
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// First entry reported when the request never produced a response
pub const UNKNOWN_FAILURE: &str = "An unknown error occurred.";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    // === Transport ===
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid request path {path}: {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    // === HTTP status ===
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    // === Body ===
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("Unexpected {actual} response")]
    UnexpectedPayload { actual: &'static str },

    // === Local validation ===
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid password")]
    InvalidPassword(Vec<PasswordIssue>),
}

impl ClientError {
    /// Failure for a non-2xx response without a JSON `error` field
    pub fn unknown_status(status: StatusCode) -> Self {
        Self::Status {
            status,
            message: format!("{UNKNOWN_ERROR} (HTTP {})", status.as_u16()),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }

    /// Error list reported to the UI, one entry per message.
    ///
    /// Transport failures carry a generic entry followed by the cause.
    pub fn into_error_list(self) -> Vec<CustomError> {
        match self {
            Self::InvalidPassword(issues) => {
                CustomError::list(issues.iter().map(ToString::to_string))
            }
            Self::Network(err) => {
                CustomError::list([UNKNOWN_FAILURE.to_string(), err.to_string()])
            }
            other => CustomError::list([other.to_string()]),
        }
    }
}

impl From<ClientError> for Vec<CustomError> {
    fn from(err: ClientError) -> Self {
        err.into_error_list()
    }
}
