//! Failure taxonomy for backend calls.
//!
//! Every failing operation surfaces as one [`ApiError`]. Nothing in this
//! crate recovers from an error; callers render the `Display` message and
//! stay interactive. The one internal corrective action — session rollback
//! during login — is carried by [`ApiError::Authentication`].

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, body I/O).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend replied with a non-success status. `message` is the
    /// backend's own wording when the body could be interpreted.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The token's payload segment could not be decoded.
    #[error("invalid token: {0}")]
    Claims(String),

    /// Authentication succeeded at the transport level but produced no token.
    #[error("no token received from server")]
    NoToken,

    /// The login handshake failed after a token was issued; the session has
    /// been rolled back and the cause is preserved here.
    #[error("failed to authenticate: {0}")]
    Authentication(#[source] Box<ApiError>),
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Interpret a non-success response into an [`ApiError::Api`].
///
/// Priority order: the body's `error` field, then its `message` field, then
/// a synthesized message carrying the status code when the body is not an
/// error object at all.
pub(crate) fn interpret_failure(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Api { status, message }
}
