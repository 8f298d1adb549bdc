//! Article cards and listings.

use std::fmt::Write;

use xp_cms::models::Article;
use xp_markdown::escape_html;

use crate::context::SiteContext;

/// Site path of an article.
#[must_use]
pub fn article_path(slug: &str) -> String {
    format!("/artikelen/{slug}")
}

/// Render a single article card.
#[must_use]
pub fn render_blog_card(ctx: &SiteContext, article: &Article) -> String {
    let mut html = String::with_capacity(1024);
    let href = escape_html(&article_path(&article.slug));
    html.push_str("<article class=\"blog-card flex flex-col items-start justify-between\">\n");
    if let Some(image) = &article.image {
        let _ = writeln!(
            html,
            "<a href=\"{href}\"><img src=\"{}\" alt=\"{}\" class=\"aspect-[16/9] w-full rounded-2xl object-cover\"></a>",
            escape_html(&ctx.image_url(image)),
            escape_html(image.alt_or(&article.title))
        );
    }
    let _ = writeln!(
        html,
        "<div class=\"mt-8 flex items-center gap-x-4 text-xs\"><time datetime=\"{0}\" class=\"text-gray-500\">{0}</time>",
        escape_html(&article.date)
    );
    for tag in &article.tags {
        let _ = write!(
            html,
            "<span class=\"rounded-full bg-gray-50 px-3 py-1.5 font-medium text-gray-600\">{}</span>",
            escape_html(&tag.title)
        );
    }
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<h3 class=\"mt-3 text-lg font-semibold leading-6 text-gray-900\"><a href=\"{href}\">{}</a></h3>",
        escape_html(&article.title)
    );
    if let Some(author) = article.primary_author() {
        let _ = writeln!(
            html,
            "<p class=\"mt-4 text-sm font-semibold leading-6 text-gray-900\">{}</p>",
            escape_html(&author.full_name())
        );
    }
    html.push_str("</article>\n");
    html
}

/// Render a titled grid of article cards.
#[must_use]
pub fn render_blog_listing(ctx: &SiteContext, title: &str, articles: &[Article]) -> String {
    let mut html = String::with_capacity(1024 * (articles.len() + 1));
    html.push_str("<section class=\"blog-listing mx-auto max-w-7xl px-6 lg:px-8\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl\">{}</h2>",
        escape_html(title)
    );
    if articles.is_empty() {
        html.push_str("<p class=\"mt-2 text-lg leading-8 text-gray-600\">Nog geen artikelen.</p>\n");
    } else {
        html.push_str("<div class=\"mx-auto mt-16 grid grid-cols-1 gap-x-8 gap-y-20 lg:grid-cols-3\">\n");
        for article in articles {
            html.push_str(&render_blog_card(ctx, article));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(slug: &str) -> Article {
        serde_json::from_value(json!({
            "documentId": slug,
            "title": format!("Titel {slug}"),
            "date": "2025-01-02",
            "slug": slug,
            "authors": [{"firstname": "An", "lastname": "de Vries"}],
            "tags": [{"title": "Cloud"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_card() {
        let html = render_blog_card(&SiteContext::test(), &article("k8s"));
        assert!(html.contains("href=\"/artikelen/k8s\""));
        assert!(html.contains("<time datetime=\"2025-01-02\""));
        assert!(html.contains(">Cloud</span>"));
        assert!(html.contains(">An de Vries</p>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_listing() {
        let ctx = SiteContext::test();
        let html = render_blog_listing(&ctx, "Blogs", &[article("a"), article("b")]);
        assert_eq!(html.matches("<article").count(), 2);
        let empty = render_blog_listing(&ctx, "Blogs", &[]);
        assert!(empty.contains("Nog geen artikelen."));
    }
}
