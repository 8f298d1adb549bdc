//! Headless CMS REST API client.
//!
//! Sync HTTP client for the CMS content API. Requests go to
//! `{base_url}/api/{endpoint}` with an optional bearer token.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::CmsError;
use crate::request::FetchRequest;
use crate::source::{ContentSource, fetch_data};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// CMS REST API client.
pub struct CmsClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl CmsClient {
    /// Create a client for the CMS at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - CMS server base URL (without `/api`)
    /// * `token` - Optional API token sent as `Authorization: Bearer`
    #[must_use]
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.map(ToOwned::to_owned),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// Fetch `request` and decode the payload as `T`.
    ///
    /// # Errors
    ///
    /// See [`fetch_data`].
    pub fn fetch_data<T: DeserializeOwned>(&self, request: &FetchRequest) -> Result<T, CmsError> {
        fetch_data(self, request)
    }
}

impl ContentSource for CmsClient {
    fn fetch_json(&self, request: &FetchRequest) -> Result<Value, CmsError> {
        let url = request.url(&self.api_url());

        info!(endpoint = %request.endpoint(), "Fetching CMS content");
        debug!(url = %url, "CMS request");

        let mut builder = self.agent.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let response = builder.call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if !(200..300).contains(&status) {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(CmsError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let text = body_reader.read_to_string()?;
        let value: Value = serde_json::from_str(&text)?;
        debug!(endpoint = %request.endpoint(), bytes = text.len(), "CMS response received");
        Ok(value)
    }
}
