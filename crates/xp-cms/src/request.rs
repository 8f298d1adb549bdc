//! Content fetch requests.

use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in query keys and values (RFC 3986 unreserved set kept).
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A single content query: endpoint, envelope key and query parameters.
///
/// Query parameters keep insertion order so generated URLs are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    endpoint: String,
    wrapped_by_key: Option<String>,
    query: Vec<(String, String)>,
}

impl FetchRequest {
    /// Create a request for the given endpoint (e.g. `articles`).
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_start_matches('/').to_owned(),
            wrapped_by_key: None,
            query: Vec::new(),
        }
    }

    /// Unwrap the payload from this key of the response object.
    #[must_use]
    pub fn wrapped_by_key(mut self, key: impl Into<String>) -> Self {
        self.wrapped_by_key = Some(key.into());
        self
    }

    /// Append a query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters.
    #[must_use]
    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Endpoint name without leading slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Envelope key, if any.
    #[must_use]
    pub fn envelope_key(&self) -> Option<&str> {
        self.wrapped_by_key.as_deref()
    }

    /// Query parameters in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Look up the first value of a query parameter.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Percent-encoded query string without leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.query.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            let _ = write!(
                out,
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE_SET),
                utf8_percent_encode(value, QUERY_ENCODE_SET)
            );
        }
        out
    }

    /// Full request URL below `api_url`.
    #[must_use]
    pub fn url(&self, api_url: &str) -> String {
        let base = api_url.trim_end_matches('/');
        if self.query.is_empty() {
            format!("{base}/{}", self.endpoint)
        } else {
            format!("{base}/{}?{}", self.endpoint, self.query_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_leading_slash_stripped() {
        let request = FetchRequest::new("/articles");
        assert_eq!(request.endpoint(), "articles");
    }

    #[test]
    fn test_url_without_query() {
        let request = FetchRequest::new("articles");
        assert_eq!(
            request.url("https://cms.example.com/api/"),
            "https://cms.example.com/api/articles"
        );
    }

    #[test]
    fn test_site_filter_is_encoded() {
        let request = FetchRequest::new("global-settings")
            .wrapped_by_key("data")
            .param("filters[site][$eq]", "learning")
            .param("status", "published");

        assert_eq!(
            request.query_string(),
            "filters%5Bsite%5D%5B%24eq%5D=learning&status=published"
        );
        assert_eq!(request.envelope_key(), Some("data"));
    }

    #[test]
    fn test_values_with_spaces_and_unicode() {
        let request = FetchRequest::new("tags").param("filters[title][$eq]", "Talen & Frameworks");
        assert_eq!(
            request.query_string(),
            "filters%5Btitle%5D%5B%24eq%5D=Talen%20%26%20Frameworks"
        );
    }

    #[test]
    fn test_params_preserve_order() {
        let request = FetchRequest::new("articles").params([("b", "2"), ("a", "1")]);
        assert_eq!(request.query_string(), "b=2&a=1");
        assert_eq!(request.query_value("a"), Some("1"));
        assert_eq!(request.query_value("c"), None);
    }
}
