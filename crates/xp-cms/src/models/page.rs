//! Page records.

use serde::Deserialize;

use super::{Article, Hero, Mission, PageComponent};

/// CMS-managed page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Title shown in navigation and page headings.
    #[serde(rename = "title_website")]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    /// Dynamic zone body.
    #[serde(default)]
    pub components: Vec<PageComponent>,
}

/// Hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(alias = "label")]
    pub title: String,
    #[serde(alias = "url")]
    pub href: String,
    #[serde(default)]
    pub is_external: bool,
}

/// Home page single type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomePage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub mission: Option<Mission>,
    /// Highlighted articles.
    #[serde(default)]
    pub articles: Vec<Article>,
}
