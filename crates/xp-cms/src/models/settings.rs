//! Site-wide settings and navigation.

use serde::{Deserialize, Serialize};

use super::Page;

/// Per-site global settings single type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub document_id: String,
    pub site: String,
    #[serde(default)]
    pub locale: Option<String>,
    /// Pages shown in the main navigation; `null` when none are linked.
    #[serde(default)]
    pub pages: Option<Vec<Page>>,
}

/// Main navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// Build navigation from the fetched global settings.
///
/// Only the first settings record counts. No record, or a record without
/// pages, yields an empty list.
#[must_use]
pub fn navigation_links(settings: &[GlobalSettings]) -> Vec<NavLink> {
    settings
        .first()
        .and_then(|s| s.pages.as_deref())
        .unwrap_or_default()
        .iter()
        .map(|page| NavLink {
            name: page.title.clone(),
            href: format!("/{}", page.slug),
        })
        .collect()
}
