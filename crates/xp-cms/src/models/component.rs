//! Reusable content blocks of the page dynamic zone.

use serde::Deserialize;

use super::{Image, ImageWithTitle, Link};

/// One entry of a page's dynamic zone, discriminated by `__component`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__component")]
pub enum PageComponent {
    #[serde(rename = "ui.hero")]
    Hero(Hero),
    #[serde(rename = "ui.missie-met-statistieken")]
    Mission(Mission),
    #[serde(rename = "ui.text")]
    Text(TextBlock),
    #[serde(rename = "ui.quote")]
    Quote(Quote),
    #[serde(rename = "ui.image-with-title")]
    ImageWithTitle(ImageWithTitle),
    #[serde(rename = "ui.listing")]
    Listing(Listing),
    /// Component type this build does not know how to render.
    #[serde(other)]
    Unknown,
}

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Primary call to action.
    #[serde(rename = "CTO", default)]
    pub cta: Option<Link>,
    /// Secondary link.
    #[serde(default)]
    pub link: Option<Link>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Mission statement with statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extra_description: Option<String>,
    #[serde(rename = "statistieken", default)]
    pub statistics: Vec<ListItem>,
}

/// Title + description pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// List item with an image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListItemWithImage {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<Image>,
}

/// Free text block (markdown).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Pull quote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Titled list of items with images.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listing {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ListItemWithImage>,
}
