//! Full HTML documents.

use std::fmt::Write;

use xp_cms::models::{Article, NavLink, Page, Social};
use xp_markdown::{MarkdownRenderer, escape_html};

use crate::blog::article_path;
use crate::components::render_components;
use crate::container::render_container;
use crate::context::SiteContext;
use crate::footer::render_footer;
use crate::header::{MenuState, render_header};
use crate::seo::{
    SeoData, SeoOptions, generate_article_seo_data, generate_seo_data, render_seo_tags,
};
use crate::structured_data;

/// Shared chrome around every page body.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub navigation: &'a [NavLink],
    pub socials: &'a [Social],
    pub menu: MenuState,
    /// Stylesheet href.
    pub css_path: &'a str,
}

impl<'a> Layout<'a> {
    #[must_use]
    pub fn new(navigation: &'a [NavLink], socials: &'a [Social]) -> Self {
        Self {
            navigation,
            socials,
            menu: MenuState::default(),
            css_path: "/styles/global.css",
        }
    }
}

/// Render a complete HTML document around `body`.
#[must_use]
pub fn render_page(
    ctx: &SiteContext,
    layout: &Layout<'_>,
    seo: &SeoData,
    path: &str,
    body: &str,
) -> String {
    let mut html = String::with_capacity(8192 + body.len());
    let lang = ctx.locale.split('_').next().unwrap_or("nl");

    let _ = writeln!(html, "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>", escape_html(lang));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&render_seo_tags(seo, &ctx.absolute_url(path)));
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape_html(layout.css_path)
    );
    html.push_str("</head>\n<body class=\"bg-white antialiased\">\n");
    html.push_str(&render_header(ctx, layout.navigation, layout.menu));
    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");
    html.push_str(&render_footer(ctx, layout.socials));
    html.push_str("</body>\n</html>\n");
    html
}

/// Render a CMS page from its dynamic-zone components.
#[must_use]
pub fn render_cms_page(
    ctx: &SiteContext,
    layout: &Layout<'_>,
    page: &Page,
    renderer: &MarkdownRenderer,
) -> String {
    let mut options = SeoOptions::new(
        page.title.clone(),
        page.description.clone().unwrap_or_else(|| page.title.clone()),
    );
    options.structured_data = Some(structured_data::breadcrumbs(&[
        structured_data::Breadcrumb {
            name: ctx.site_name.clone(),
            url: ctx.site_url.clone(),
            position: 1,
        },
        structured_data::Breadcrumb {
            name: page.title.clone(),
            url: ctx.absolute_url(&page.slug),
            position: 2,
        },
    ]));
    let seo = generate_seo_data(ctx, options);
    let body = render_components(ctx, &page.components, renderer);
    render_page(ctx, layout, &seo, &format!("/{}", page.slug), &body)
}

/// Render an article page; the article body is markdown.
#[must_use]
pub fn render_article_page(
    ctx: &SiteContext,
    layout: &Layout<'_>,
    article: &Article,
    renderer: &MarkdownRenderer,
) -> String {
    let seo = generate_article_seo_data(ctx, article, Some(structured_data::article(ctx, article)));
    let rendered = renderer.render(&article.content);

    let mut body = String::with_capacity(rendered.html.len() + 512);
    let _ = write!(
        body,
        "<article class=\"prose prose-slate mx-auto max-w-3xl\"><h1>{}</h1>",
        escape_html(&article.title)
    );
    if let Some(author) = article.primary_author() {
        let _ = write!(
            body,
            "<p class=\"article-meta\">{} &middot; <time datetime=\"{1}\">{1}</time></p>",
            escape_html(&author.full_name()),
            escape_html(&article.date)
        );
    }
    body.push_str(&rendered.html);
    body.push_str("</article>");

    render_page(
        ctx,
        layout,
        &seo,
        &article_path(&article.slug),
        &render_container(&body),
    )
}

/// Render a standalone markdown document (e.g. a lesson) as a page.
#[must_use]
pub fn render_markdown_page(
    ctx: &SiteContext,
    layout: &Layout<'_>,
    title: &str,
    description: &str,
    path: &str,
    html_content: &str,
) -> String {
    let seo = generate_seo_data(ctx, SeoOptions::new(title, description));
    let body = format!("<article class=\"prose prose-slate mx-auto max-w-3xl\">{html_content}</article>");
    render_page(ctx, layout, &seo, path, &render_container(&body))
}
