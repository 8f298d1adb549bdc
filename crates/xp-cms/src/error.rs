//! Error types for CMS access.

/// Error from a content fetch.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned a non-success status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not valid JSON or does not match the declared model.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response envelope lacks the requested key.
    #[error("response from {endpoint} has no `{key}` key")]
    MissingKey {
        /// Endpoint that was queried.
        endpoint: String,
        /// Envelope key that was expected.
        key: String,
    },
}

impl CmsError {
    /// HTTP status code, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
