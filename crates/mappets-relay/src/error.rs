use thiserror::Error;

/// Errors raised while constructing a [`crate::RelayClient`].
///
/// Delivery itself never errors; see [`mappets_core::SubmissionOutcome`].
#[derive(Debug, Error)]
pub enum RelayError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid relay endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
