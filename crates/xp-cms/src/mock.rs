//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without network access.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::CmsError;
use crate::request::FetchRequest;
use crate::source::ContentSource;

/// Canned answer for an endpoint.
#[derive(Debug, Clone)]
enum MockResponse {
    Json(Value),
    Status(u16),
}

/// Mock content source for testing.
///
/// Answers requests by endpoint name and records every request it receives.
/// Endpoints without a configured response answer `404`.
///
/// # Example
///
/// ```ignore
/// use serde_json::json;
/// use xp_cms::{MockSource, FetchRequest, fetch_data};
///
/// let source = MockSource::new().with_response("articles", json!({"data": []}));
/// let articles: Vec<serde_json::Value> =
///     fetch_data(&source, &FetchRequest::new("articles").wrapped_by_key("data"))?;
/// assert!(articles.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    responses: RwLock<HashMap<String, MockResponse>>,
    requests: RwLock<Vec<FetchRequest>>,
}

impl MockSource {
    /// Create a new mock source with no responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `endpoint` with `body`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_response(self, endpoint: impl Into<String>, body: Value) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(endpoint.into(), MockResponse::Json(body));
        self
    }

    /// Answer requests for `endpoint` with an HTTP error status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, endpoint: impl Into<String>, status: u16) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(endpoint.into(), MockResponse::Status(status));
        self
    }

    /// Requests received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.read().unwrap().clone()
    }
}

impl ContentSource for MockSource {
    fn fetch_json(&self, request: &FetchRequest) -> Result<Value, CmsError> {
        self.requests.write().unwrap().push(request.clone());

        let response = self
            .responses
            .read()
            .unwrap()
            .get(request.endpoint())
            .cloned();

        match response {
            Some(MockResponse::Json(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(CmsError::HttpResponse {
                status,
                body: String::new(),
            }),
            None => Err(CmsError::HttpResponse {
                status: 404,
                body: format!("no mock response for {}", request.endpoint()),
            }),
        }
    }
}
