//! Headless CMS client and content models for XP.
//!
//! # Architecture
//!
//! - [`ContentSource`]: transport abstraction returning raw JSON for a
//!   [`FetchRequest`]. [`CmsClient`] implements it over HTTP; `MockSource`
//!   (behind the `mock` feature flag) serves canned responses for tests.
//! - [`fetch_data`]: performs one request, unwraps the response envelope and
//!   decodes the payload into the caller's declared type.
//! - [`models`]: typed content records (articles, authors, pages, …).
//! - [`queries`]: the site-scoped queries the websites issue.
//!
//! No retry, caching or pagination happens here. A failed request surfaces
//! as [`CmsError`] and aborts only the page that issued it.
//!
//! # Example
//!
//! ```ignore
//! use xp_cms::{CmsClient, FetchRequest, models::GlobalSettings};
//!
//! let client = CmsClient::new("https://cms.example.com", None);
//! let request = FetchRequest::new("global-settings")
//!     .wrapped_by_key("data")
//!     .param("filters[site][$eq]", "learning")
//!     .param("status", "published");
//! let settings: Vec<GlobalSettings> = client.fetch_data(&request)?;
//! ```

mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod models;
pub mod queries;
mod request;
mod source;

pub use client::CmsClient;
pub use error::CmsError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;
pub use request::FetchRequest;
pub use source::{ContentSource, fetch_data, unwrap_envelope};
