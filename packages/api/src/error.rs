//! Errors returned by [`crate::CharacterApi`].

/// A failed request to the character service.
///
/// The client does not interpret status codes: any non-2xx response becomes
/// [`ApiError::Status`] and views render it as-is.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request itself failed (network, DNS, TLS, CORS) or the body was
    /// not the expected JSON.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiError {
    /// The HTTP status code, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
