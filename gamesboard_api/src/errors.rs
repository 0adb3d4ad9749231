//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the leaderboard schema.
    #[error("Unexpected response shape: {0}")]
    Decode(String),
    /// The query cannot be sent as-is (e.g. a page number below 1).
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
