//! schema.org JSON-LD documents.

use serde::Serialize;
use serde_json::{Map, Value, json};
use xp_cms::models::{Article, Author};

use crate::context::SiteContext;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Characters of article content used as BlogPosting description.
const EXCERPT_LEN: usize = 160;

/// Organization details.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationData {
    pub name: String,
    pub url: String,
    #[serde(skip)]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<String>,
    #[serde(skip)]
    pub address: Option<PostalAddress>,
    #[serde(skip)]
    pub contact_point: Option<ContactPoint>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Person details.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Breadcrumb entry; positions start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
    pub position: u32,
}

/// Prefix `fields` (a serialized struct) with `@context` and `@type`.
fn typed(schema_type: &str, fields: Value) -> Value {
    let mut object = Map::new();
    object.insert("@context".to_owned(), json!(SCHEMA_CONTEXT));
    object.insert("@type".to_owned(), json!(schema_type));
    if let Value::Object(fields) = fields {
        object.extend(fields);
    }
    Value::Object(object)
}

fn image_object(url: &str) -> Value {
    json!({"@type": "ImageObject", "url": url})
}

/// `WebSite` with a site search action.
#[must_use]
pub fn website(
    name: &str,
    url: &str,
    description: &str,
    logo: Option<&str>,
    same_as: &[String],
) -> Value {
    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": name,
        "url": url,
        "description": description,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{url}/search?q={{search_term_string}}"),
            },
            "query-input": "required name=search_term_string",
        },
    });
    if let Some(logo) = logo {
        data["logo"] = json!(logo);
    }
    if !same_as.is_empty() {
        data["sameAs"] = json!(same_as);
    }
    data
}

/// `Organization`.
#[must_use]
pub fn organization(options: &OrganizationData) -> Value {
    let mut data = typed(
        "Organization",
        serde_json::to_value(options).unwrap_or_default(),
    );
    if let Some(logo) = &options.logo {
        data["logo"] = image_object(logo);
    }
    if let Some(address) = &options.address {
        data["address"] = typed_nested("PostalAddress", address);
    }
    if let Some(contact) = &options.contact_point {
        data["contactPoint"] = typed_nested("ContactPoint", contact);
    }
    data
}

fn typed_nested<T: Serialize>(schema_type: &str, value: &T) -> Value {
    let mut object = Map::new();
    object.insert("@type".to_owned(), json!(schema_type));
    if let Ok(Value::Object(fields)) = serde_json::to_value(value) {
        object.extend(fields);
    }
    Value::Object(object)
}

/// `Person`.
#[must_use]
pub fn person(options: &PersonData) -> Value {
    typed("Person", serde_json::to_value(options).unwrap_or_default())
}

fn article_author(ctx: &SiteContext, author: &Author) -> Value {
    let mut data = json!({
        "@type": "Person",
        "name": author.full_name(),
        "url": ctx.absolute_url(&format!("/team/{}", author.slug())),
    });
    if let Some(job_title) = &author.job_title {
        data["jobTitle"] = json!(job_title);
    }
    if let Some(avatar) = &author.avatar {
        data["image"] = image_object(&ctx.image_url(avatar));
    }
    if let Some(github) = &author.git_hub {
        data["sameAs"] = json!([format!("https://github.com/{github}")]);
    }
    data
}

/// `BlogPosting` for an article.
#[must_use]
pub fn article(ctx: &SiteContext, article: &Article) -> Value {
    let description = if article.content.is_empty() {
        article.title.clone()
    } else {
        let excerpt: String = article.content.chars().take(EXCERPT_LEN).collect();
        format!("{excerpt}...")
    };
    let published = iso_datetime(&article.date);

    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": article.title,
        "description": description,
        "datePublished": published,
        "dateModified": published,
        "publisher": {
            "@type": "Organization",
            "name": ctx.site_name,
            "url": ctx.site_url,
            "logo": image_object(&ctx.absolute_url("/images/logo.svg")),
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": ctx.absolute_url(&format!("/artikelen/{}", article.slug)),
        },
        "inLanguage": article.locale.as_deref().unwrap_or("nl-NL"),
    });

    if let Some(image) = &article.image {
        data["image"] = image_object(&ctx.image_url(image));
    }
    if !article.authors.is_empty() {
        let authors: Vec<Value> = article
            .authors
            .iter()
            .map(|author| article_author(ctx, author))
            .collect();
        data["author"] = Value::Array(authors);
    }
    if !article.tags.is_empty() {
        data["keywords"] = json!(article.tag_titles().join(", "));
    }
    if !article.content.is_empty() {
        data["wordCount"] = json!(article.word_count());
    }
    data
}

/// `BreadcrumbList`.
#[must_use]
pub fn breadcrumbs(items: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "@type": "ListItem",
                "position": item.position,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Expand a bare `YYYY-MM-DD` date to midnight UTC.
fn iso_datetime(date: &str) -> String {
    let bytes = date.as_bytes();
    let is_plain_date = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if is_plain_date {
        format!("{date}T00:00:00.000Z")
    } else {
        date.to_owned()
    }
}

/// `<script type="application/ld+json">` element.
///
/// `</` is escaped so the payload cannot close the script element.
#[must_use]
pub fn render_json_ld(data: &Value) -> String {
    let json = data.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{json}</script>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_website_search_action() {
        let data = website("XPRTZ", "https://xprtz.net", "Experts", None, &[]);
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(
            data["potentialAction"]["target"]["urlTemplate"],
            "https://xprtz.net/search?q={search_term_string}"
        );
        assert!(data.get("logo").is_none());
        assert!(data.get("sameAs").is_none());
    }

    #[test]
    fn test_organization_optional_fields() {
        let data = organization(&OrganizationData {
            name: "XPRTZ".to_owned(),
            url: "https://xprtz.net".to_owned(),
            logo: Some("https://xprtz.net/logo.svg".to_owned()),
            address: Some(PostalAddress {
                address_locality: Some("Utrecht".to_owned()),
                ..PostalAddress::default()
            }),
            ..OrganizationData::default()
        });
        assert_eq!(data["@context"], "https://schema.org");
        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["logo"]["@type"], "ImageObject");
        assert_eq!(data["address"]["@type"], "PostalAddress");
        assert_eq!(data["address"]["addressLocality"], "Utrecht");
        assert!(data.get("description").is_none());
        assert!(data.get("contactPoint").is_none());
    }

    #[test]
    fn test_person() {
        let data = person(&PersonData {
            name: "Jan Jansen".to_owned(),
            job_title: Some("Developer".to_owned()),
            ..PersonData::default()
        });
        assert_eq!(data["@type"], "Person");
        assert_eq!(data["jobTitle"], "Developer");
        assert!(data.get("sameAs").is_none());
    }

    #[test]
    fn test_article_blog_posting() {
        let ctx = SiteContext::test();
        let article: Article = serde_json::from_value(json!({
            "documentId": "a1",
            "title": "Hallo",
            "content": "een twee drie",
            "date": "2025-03-01",
            "slug": "hallo",
            "authors": [{"firstname": "Jan", "lastname": "Jansen", "gitHub": "jjansen"}],
            "tags": [{"title": "Rust"}]
        }))
        .unwrap();

        let data = super::article(&ctx, &article);
        assert_eq!(data["@type"], "BlogPosting");
        assert_eq!(data["datePublished"], "2025-03-01T00:00:00.000Z");
        assert_eq!(data["description"], "een twee drie...");
        assert_eq!(data["wordCount"], 3);
        assert_eq!(data["keywords"], "Rust");
        assert_eq!(data["inLanguage"], "nl-NL");
        assert_eq!(data["author"][0]["url"], "https://xprtz.net/team/jan-jansen");
        assert_eq!(data["author"][0]["sameAs"][0], "https://github.com/jjansen");
        assert_eq!(
            data["mainEntityOfPage"]["@id"],
            "https://xprtz.net/artikelen/hallo"
        );
        assert!(data.get("image").is_none());
    }

    #[test]
    fn test_breadcrumbs() {
        let data = breadcrumbs(&[
            Breadcrumb {
                name: "Home".to_owned(),
                url: "https://xprtz.net".to_owned(),
                position: 1,
            },
            Breadcrumb {
                name: "Artikelen".to_owned(),
                url: "https://xprtz.net/artikelen".to_owned(),
                position: 2,
            },
        ]);
        assert_eq!(data["itemListElement"][1]["position"], 2);
        assert_eq!(data["itemListElement"][1]["@type"], "ListItem");
    }

    #[test]
    fn test_iso_datetime() {
        assert_eq!(iso_datetime("2024-12-31"), "2024-12-31T00:00:00.000Z");
        assert_eq!(iso_datetime("2024-12-31T10:00:00Z"), "2024-12-31T10:00:00Z");
    }

    #[test]
    fn test_render_json_ld_escapes_script_close() {
        let html = render_json_ld(&json!({"name": "</script>"}));
        assert_eq!(
            html,
            r#"<script type="application/ld+json">{"name":"<\/script>"}</script>"#
        );
    }
}
