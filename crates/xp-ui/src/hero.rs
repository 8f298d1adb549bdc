//! Hero banner.

use std::fmt::Write;

use xp_cms::models::{Hero, Link};
use xp_markdown::escape_html;

use crate::context::SiteContext;

fn link_attrs(link: &Link) -> &'static str {
    if link.is_external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    }
}

/// Render a hero: title, description, call to action and image strip.
#[must_use]
pub fn render_hero(ctx: &SiteContext, hero: &Hero) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<section class=\"hero relative isolate\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-4xl font-bold tracking-tight text-primary-900 sm:text-6xl\">{}</h1>",
        escape_html(&hero.title)
    );
    if !hero.description.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"mt-6 text-lg leading-8 text-gray-600\">{}</p>",
            escape_html(&hero.description)
        );
    }

    if hero.cta.is_some() || hero.link.is_some() {
        html.push_str("<div class=\"mt-10 flex items-center gap-x-6\">");
        if let Some(cta) = &hero.cta {
            let _ = write!(
                html,
                "<a href=\"{}\" class=\"rounded-md bg-primary-600 px-3.5 py-2.5 text-sm font-semibold text-white\"{}>{}</a>",
                escape_html(&cta.href),
                link_attrs(cta),
                escape_html(&cta.title)
            );
        }
        if let Some(link) = &hero.link {
            let _ = write!(
                html,
                "<a href=\"{}\" class=\"text-sm font-semibold leading-6 text-primary-900\"{}>{} <span aria-hidden=\"true\">→</span></a>",
                escape_html(&link.href),
                link_attrs(link),
                escape_html(&link.title)
            );
        }
        html.push_str("</div>\n");
    }

    if !hero.images.is_empty() {
        html.push_str("<div class=\"hero-images grid grid-cols-2 gap-4\">\n");
        for image in &hero.images {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"{}\" class=\"aspect-[2/3] w-full rounded-xl object-cover shadow-lg\">",
                escape_html(&ctx.image_url(image)),
                escape_html(image.alt_or(&hero.title))
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
    html
}
