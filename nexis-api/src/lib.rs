//! # nexis-api
//!
//! Shared API types for the nexis web client.
//! This crate is designed to be WASM-compatible and can be used in both
//! native (Rust) and browser (WASM) front ends.
//!
//! ## Features
//!
//! - Request DTOs (LoginUser, NewUser, AddNumBody)
//! - Response DTOs (User, NumResponse, ApiResponse, UserValidation)
//! - Error formats (ErrorResponse, CustomError)
//! - Tagged response envelope (ApiPayload) and the type guards that build it
//! - Email/password validators
//!
//! ## Example
//!
//! ```rust
//! use nexis_api::{LoginUser, is_valid_email};
//!
//! let request = LoginUser {
//!     email: "user@example.com".to_string(),
//!     password: "Abcdef1!".to_string(),
//! };
//! assert!(is_valid_email(&request.email));
//! ```

pub mod envelope;
pub mod error;
pub mod requests;
pub mod responses;
pub mod typeguards;
pub mod validation;

// Re-exports for convenient access
pub use envelope::{ApiPayload, ShapeError};
pub use error::{CustomError, ErrorResponse};
pub use requests::*;
pub use responses::*;
pub use typeguards::{is_message_response, is_num_response, is_user};
pub use validation::{PasswordIssue, is_valid_email, is_valid_password, password_issues};
