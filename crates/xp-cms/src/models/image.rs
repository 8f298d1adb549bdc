//! Media records.

use serde::Deserialize;

/// Uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Upload path (usually relative to the asset host) or absolute URL.
    pub url: String,
    /// Alternate text.
    #[serde(default, alias = "alternativeText")]
    pub alternate_text: Option<String>,
    /// Pixel width.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height.
    #[serde(default)]
    pub height: Option<u32>,
}

impl Image {
    /// Resolve the image against the asset host.
    ///
    /// Absolute and protocol-relative URLs are returned unchanged; upload paths
    /// are joined to `images_url` with a single slash.
    #[must_use]
    pub fn resolve_url(&self, images_url: &str) -> String {
        if self.url.starts_with("http://")
            || self.url.starts_with("https://")
            || self.url.starts_with("//")
        {
            return self.url.clone();
        }
        format!(
            "{}/{}",
            images_url.trim_end_matches('/'),
            self.url.trim_start_matches('/')
        )
    }

    /// Alternate text, falling back to `fallback`.
    #[must_use]
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alternate_text.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => fallback,
        }
    }
}

/// Image with a title and description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageWithTitle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<Image>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image(url: &str) -> Image {
        Image {
            url: url.to_owned(),
            alternate_text: None,
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_resolve_relative_upload() {
        assert_eq!(
            image("/uploads/team.png").resolve_url("https://cms.example.com/"),
            "https://cms.example.com/uploads/team.png"
        );
    }

    #[test]
    fn test_resolve_absolute_unchanged() {
        assert_eq!(
            image("https://cdn.example.com/a.png").resolve_url("https://cms.example.com"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_alt_fallback() {
        let mut img = image("/a.png");
        assert_eq!(img.alt_or("Article"), "Article");
        img.alternate_text = Some(String::new());
        assert_eq!(img.alt_or("Article"), "Article");
        img.alternate_text = Some("Team photo".to_owned());
        assert_eq!(img.alt_or("Article"), "Team photo");
    }

    #[test]
    fn test_deserialize_alternative_text_alias() {
        let img: Image = serde_json::from_value(json!({
            "url": "/uploads/x.png",
            "alternativeText": "X",
            "width": 640,
            "formats": {"thumbnail": {}}
        }))
        .unwrap();
        assert_eq!(img.alternate_text.as_deref(), Some("X"));
        assert_eq!(img.width, Some(640));
        assert_eq!(img.height, None);
    }
}
