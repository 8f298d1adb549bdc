//! SEO metadata and `<head>` tags.

use std::fmt::Write;

use serde_json::Value;
use xp_cms::models::Article;
use xp_markdown::escape_html;

use crate::context::SiteContext;
use crate::structured_data::render_json_ld;

/// Maximum length of a meta description.
pub const DESCRIPTION_MAX_LEN: usize = 160;

const ROBOTS: &str = "index, follow";

/// OpenGraph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageType {
    #[default]
    Website,
    Article,
}

impl PageType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Everything the document head needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub image_alt: String,
    pub page_type: PageType,
    pub site_name: String,
    pub author: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub robots: String,
    pub locale: String,
    pub theme_color: String,
    pub structured_data: Option<Value>,
}

/// Inputs for [`generate_seo_data`].
#[derive(Debug, Clone, Default)]
pub struct SeoOptions {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub page_type: PageType,
    pub structured_data: Option<Value>,
    pub additional_keywords: Vec<String>,
}

impl SeoOptions {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// SEO data for a regular page.
#[must_use]
pub fn generate_seo_data(ctx: &SiteContext, options: SeoOptions) -> SeoData {
    let image_alt = options
        .image_alt
        .unwrap_or_else(|| options.title.clone());
    SeoData {
        description: create_description(&options.description, DESCRIPTION_MAX_LEN),
        title: options.title,
        image: options.image,
        image_alt,
        page_type: options.page_type,
        site_name: ctx.site_name.clone(),
        author: None,
        published_time: None,
        modified_time: None,
        tags: Vec::new(),
        keywords: options.additional_keywords,
        robots: ROBOTS.to_owned(),
        locale: ctx.locale.clone(),
        theme_color: ctx.theme_color.clone(),
        structured_data: options.structured_data,
    }
}

/// SEO data for an article page.
///
/// Tags double as keywords. The article has no summary field, so the title
/// serves as description.
#[must_use]
pub fn generate_article_seo_data(
    ctx: &SiteContext,
    article: &Article,
    structured_data: Option<Value>,
) -> SeoData {
    let tags = article.tag_titles();
    SeoData {
        title: article.title.clone(),
        description: create_description(&article.title, DESCRIPTION_MAX_LEN),
        image: article.image.as_ref().map(|image| ctx.image_url(image)),
        image_alt: article
            .image
            .as_ref()
            .map_or(article.title.as_str(), |image| image.alt_or(&article.title))
            .to_owned(),
        page_type: PageType::Article,
        site_name: ctx.site_name.clone(),
        author: article.primary_author().map(xp_cms::models::Author::full_name),
        published_time: Some(article.date.clone()),
        modified_time: Some(article.date.clone()),
        keywords: tags.clone(),
        tags,
        robots: ROBOTS.to_owned(),
        locale: ctx.locale.clone(),
        theme_color: ctx.theme_color.clone(),
        structured_data,
    }
}

/// `"{title} | {site_name}"`.
#[must_use]
pub fn create_page_title(title: &str, site_name: &str) -> String {
    format!("{title} | {site_name}")
}

/// Limit `description` to `max_len` characters.
///
/// Longer text is cut to `max_len - 3` characters, trimmed and suffixed with
/// `...`.
#[must_use]
pub fn create_description(description: &str, max_len: usize) -> String {
    if description.chars().count() <= max_len {
        return description.to_owned();
    }
    let cut: String = description
        .chars()
        .take(max_len.saturating_sub(3))
        .collect();
    format!("{}...", cut.trim())
}

/// Render `<title>`, meta and OpenGraph tags plus JSON-LD.
#[must_use]
pub fn render_seo_tags(seo: &SeoData, canonical_url: &str) -> String {
    let mut out = String::with_capacity(2048);
    let title = create_page_title(&seo.title, &seo.site_name);

    let _ = writeln!(out, "<title>{}</title>", escape_html(&title));
    meta_name(&mut out, "description", &seo.description);
    if !seo.keywords.is_empty() {
        meta_name(&mut out, "keywords", &seo.keywords.join(", "));
    }
    if let Some(author) = &seo.author {
        meta_name(&mut out, "author", author);
    }
    meta_name(&mut out, "robots", &seo.robots);
    meta_name(&mut out, "theme-color", &seo.theme_color);
    let _ = writeln!(
        out,
        "<link rel=\"canonical\" href=\"{}\">",
        escape_html(canonical_url)
    );

    meta_property(&mut out, "og:type", seo.page_type.as_str());
    meta_property(&mut out, "og:title", &title);
    meta_property(&mut out, "og:description", &seo.description);
    meta_property(&mut out, "og:url", canonical_url);
    meta_property(&mut out, "og:site_name", &seo.site_name);
    meta_property(&mut out, "og:locale", &seo.locale);
    if let Some(image) = &seo.image {
        meta_property(&mut out, "og:image", image);
        meta_property(&mut out, "og:image:alt", &seo.image_alt);
    }

    if seo.page_type == PageType::Article {
        if let Some(published) = &seo.published_time {
            meta_property(&mut out, "article:published_time", published);
        }
        if let Some(modified) = &seo.modified_time {
            meta_property(&mut out, "article:modified_time", modified);
        }
        if let Some(author) = &seo.author {
            meta_property(&mut out, "article:author", author);
        }
        for tag in &seo.tags {
            meta_property(&mut out, "article:tag", tag);
        }
    }

    if let Some(data) = &seo.structured_data {
        out.push_str(&render_json_ld(data));
        out.push('\n');
    }
    out
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        "<meta name=\"{name}\" content=\"{}\">",
        escape_html(content)
    );
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        "<meta property=\"{property}\" content=\"{}\">",
        escape_html(content)
    );
}
