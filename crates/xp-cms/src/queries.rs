//! Site-scoped content queries.
//!
//! Every query filters on the configured site identifier and only asks for
//! published entries.

use tracing::{debug, warn};

use crate::error::CmsError;
use crate::models::{Article, GlobalSettings, NavLink, RadarItem, navigation_links};
use crate::request::FetchRequest;
use crate::source::{ContentSource, fetch_data};

/// Envelope key the content API nests payloads under.
pub const DATA_KEY: &str = "data";

/// Request for `endpoint` filtered on `site` and restricted to published entries.
#[must_use]
pub fn site_query(endpoint: &str, site: &str) -> FetchRequest {
    FetchRequest::new(endpoint)
        .wrapped_by_key(DATA_KEY)
        .param("filters[site][$eq]", site)
        .param("status", "published")
}

/// Fetch the main navigation for `site`.
///
/// An empty result set (or settings without pages) yields an empty list.
///
/// # Errors
///
/// Returns the fetch error; absence of data is not an error.
pub fn fetch_navigation<S>(source: &S, site: &str) -> Result<Vec<NavLink>, CmsError>
where
    S: ContentSource + ?Sized,
{
    let request = site_query("global-settings", site).param("populate", "pages");
    let settings: Vec<GlobalSettings> = fetch_data(source, &request)?;
    if settings.is_empty() {
        warn!(site, "No global settings found for site");
    }
    let links = navigation_links(&settings);
    debug!(site, count = links.len(), "Navigation loaded");
    Ok(links)
}

/// Fetch all published articles of `site`, newest first.
///
/// # Errors
///
/// Returns the fetch error.
pub fn fetch_articles<S>(source: &S, site: &str) -> Result<Vec<Article>, CmsError>
where
    S: ContentSource + ?Sized,
{
    let request = site_query("articles", site)
        .param("populate", "*")
        .param("sort", "date:desc");
    let articles: Vec<Article> = fetch_data(source, &request)?;
    debug!(site, count = articles.len(), "Articles loaded");
    Ok(articles)
}

/// Fetch one article by slug.
///
/// # Errors
///
/// Returns the fetch error. A slug without match is `Ok(None)`.
pub fn fetch_article_by_slug<S>(
    source: &S,
    site: &str,
    slug: &str,
) -> Result<Option<Article>, CmsError>
where
    S: ContentSource + ?Sized,
{
    let request = site_query("articles", site)
        .param("filters[slug][$eq]", slug)
        .param("populate", "*");
    let articles: Vec<Article> = fetch_data(source, &request)?;
    Ok(articles.into_iter().next())
}

/// Fetch the radar items of `site`.
///
/// # Errors
///
/// Returns the fetch error.
pub fn fetch_radar_items<S>(source: &S, site: &str) -> Result<Vec<RadarItem>, CmsError>
where
    S: ContentSource + ?Sized,
{
    let request = site_query("radar-items", site).param("populate", "*");
    fetch_data(source, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockSource;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_site_query_parameters() {
        let request = site_query("global-settings", "learning");
        assert_eq!(request.endpoint(), "global-settings");
        assert_eq!(request.envelope_key(), Some("data"));
        assert_eq!(request.query_value("filters[site][$eq]"), Some("learning"));
        assert_eq!(request.query_value("status"), Some("published"));
    }

    #[test]
    fn test_fetch_navigation() {
        let source = MockSource::new().with_response(
            "global-settings",
            json!({"data": [{
                "documentId": "g1",
                "site": "landing",
                "pages": [{"title_website": "Vacatures", "slug": "vacatures"}]
            }]}),
        );

        let links = fetch_navigation(&source, "landing").unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/vacatures");

        let requests = source.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].query_value("filters[site][$eq]"),
            Some("landing")
        );
    }

    #[test]
    fn test_fetch_navigation_no_records_is_empty() {
        let source = MockSource::new().with_response("global-settings", json!({"data": []}));
        let links = fetch_navigation(&source, "unknown-site").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_fetch_navigation_error_propagates() {
        let source = MockSource::new().with_status("global-settings", 500);
        let err = fetch_navigation(&source, "landing").unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_fetch_article_by_slug() {
        let source = MockSource::new().with_response(
            "articles",
            json!({"data": [{
                "documentId": "a1",
                "title": "Hallo",
                "date": "2024-01-01",
                "slug": "hallo"
            }]}),
        );

        let article = fetch_article_by_slug(&source, "cloud", "hallo").unwrap();
        assert_eq!(article.unwrap().document_id, "a1");
        assert_eq!(
            source.requests()[0].query_value("filters[slug][$eq]"),
            Some("hallo")
        );
    }

    #[test]
    fn test_fetch_article_by_slug_none() {
        let source = MockSource::new().with_response("articles", json!({"data": []}));
        assert!(fetch_article_by_slug(&source, "cloud", "missing").unwrap().is_none());
    }

    #[test]
    fn test_fetch_radar_items() {
        let source = MockSource::new().with_response(
            "radar-items",
            json!({"data": [{"slug": "k8s", "quadrant": "Platformen", "ring": "Adopt", "title": "Kubernetes"}]}),
        );
        let items = fetch_radar_items(&source, "cloud").unwrap();
        assert_eq!(items[0].title, "Kubernetes");
    }
}
