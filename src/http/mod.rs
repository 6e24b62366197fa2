/// HTTP adapter: request building, failure classification and response
/// normalization for the nexis backend.
pub mod body;
pub mod client;
pub mod fetched;

pub use body::RequestBody;
pub use client::ApiClient;
pub use fetched::Fetched;
