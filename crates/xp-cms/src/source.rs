//! Content source abstraction and typed fetching.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CmsError;
use crate::request::FetchRequest;

/// Transport that answers a [`FetchRequest`] with a raw JSON document.
///
/// Implementations perform exactly one request per call and never retry.
pub trait ContentSource {
    /// Fetch the raw JSON response for `request`.
    ///
    /// The envelope is returned as-is; [`fetch_data`] does the unwrapping.
    fn fetch_json(&self, request: &FetchRequest) -> Result<Value, CmsError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn fetch_json(&self, request: &FetchRequest) -> Result<Value, CmsError> {
        (**self).fetch_json(request)
    }
}

/// Fetch `request` from `source` and decode the payload as `T`.
///
/// When the request names an envelope key, the payload is taken from that
/// key of the top-level object.
///
/// # Errors
///
/// Returns the transport error, [`CmsError::MissingKey`] when the envelope
/// lacks the key, or [`CmsError::Json`] when the payload does not match `T`.
pub fn fetch_data<T, S>(source: &S, request: &FetchRequest) -> Result<T, CmsError>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
{
    let body = source.fetch_json(request)?;
    let payload = unwrap_envelope(body, request)?;
    Ok(serde_json::from_value(payload)?)
}

/// Extract the payload from the response envelope.
///
/// # Errors
///
/// Returns [`CmsError::MissingKey`] if the request names a key that the
/// response object does not contain.
pub fn unwrap_envelope(body: Value, request: &FetchRequest) -> Result<Value, CmsError> {
    let Some(key) = request.envelope_key() else {
        return Ok(body);
    };

    match body {
        Value::Object(mut map) => map.remove(key).ok_or_else(|| CmsError::MissingKey {
            endpoint: request.endpoint().to_owned(),
            key: key.to_owned(),
        }),
        _ => Err(CmsError::MissingKey {
            endpoint: request.endpoint().to_owned(),
            key: key.to_owned(),
        }),
    }
}
