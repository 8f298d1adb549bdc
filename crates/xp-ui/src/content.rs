//! Text, quote, image-with-title and listing blocks.

use std::fmt::Write;

use xp_cms::models::{ImageWithTitle, Listing, Quote, TextBlock};
use xp_markdown::{MarkdownRenderer, escape_html};

use crate::context::SiteContext;

/// Render a text block; its content is markdown.
#[must_use]
pub fn render_text(text: &TextBlock, renderer: &MarkdownRenderer) -> String {
    let mut html = String::from("<section class=\"text-block prose mx-auto max-w-3xl\">\n");
    if let Some(title) = &text.title {
        let _ = writeln!(html, "<h2>{}</h2>", escape_html(title));
    }
    html.push_str(&renderer.render(&text.content).html);
    html.push_str("\n</section>\n");
    html
}

#[must_use]
pub fn render_quote(quote: &Quote) -> String {
    let mut html = String::from("<figure class=\"quote mx-auto max-w-2xl\">");
    let _ = write!(
        html,
        "<blockquote class=\"text-xl font-semibold leading-8 text-gray-900\"><p>“{}”</p></blockquote>",
        escape_html(&quote.quote)
    );
    if let Some(author) = &quote.author {
        let _ = write!(
            html,
            "<figcaption class=\"mt-6 text-base text-gray-600\">{}</figcaption>",
            escape_html(author)
        );
    }
    html.push_str("</figure>\n");
    html
}

#[must_use]
pub fn render_image_with_title(ctx: &SiteContext, block: &ImageWithTitle) -> String {
    let mut html = String::from("<section class=\"image-with-title mx-auto max-w-7xl px-6 lg:px-8\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold tracking-tight text-primary-900\">{}</h2>",
        escape_html(&block.title)
    );
    if !block.description.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"mt-6 text-lg leading-8 text-gray-600\">{}</p>",
            escape_html(&block.description)
        );
    }
    if let Some(image) = &block.image {
        let _ = writeln!(
            html,
            "<img class=\"mt-10 w-full rounded-xl object-cover\" src=\"{}\" alt=\"{}\">",
            escape_html(&ctx.image_url(image)),
            escape_html(image.alt_or(&block.title))
        );
    }
    html.push_str("</section>\n");
    html
}

#[must_use]
pub fn render_listing(ctx: &SiteContext, listing: &Listing) -> String {
    let mut html = String::from("<section class=\"listing mx-auto max-w-7xl px-6 lg:px-8\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold tracking-tight text-primary-900\">{}</h2>",
        escape_html(&listing.title)
    );
    html.push_str("<ul role=\"list\" class=\"mt-10 grid grid-cols-1 gap-8 lg:grid-cols-3\">\n");
    for item in &listing.items {
        html.push_str("<li class=\"flex flex-col\">");
        if let Some(image) = &item.image {
            let _ = write!(
                html,
                "<img class=\"h-12 w-12\" src=\"{}\" alt=\"{}\">",
                escape_html(&ctx.image_url(image)),
                escape_html(image.alt_or(&item.title))
            );
        }
        let _ = write!(
            html,
            "<h3 class=\"mt-4 font-semibold text-gray-900\">{}</h3><p class=\"mt-2 text-gray-600\">{}</p></li>\n",
            escape_html(&item.title),
            escape_html(&item.description)
        );
    }
    html.push_str("</ul>\n</section>\n");
    html
}
