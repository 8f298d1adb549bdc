//! Article records.

use serde::Deserialize;

use super::{Author, Image};

/// Blog article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Publication date as sent by the CMS (ISO 8601).
    pub date: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    pub document_id: String,
}

impl Article {
    /// First listed author.
    #[must_use]
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    /// Tag titles in order.
    #[must_use]
    pub fn tag_titles(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.title.clone()).collect()
    }

    /// Whitespace-separated word count of the body.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Content tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
}
