//! Site footer with social links.

use std::fmt::Write;

use xp_cms::models::{Social, enabled_socials};
use xp_markdown::escape_html;

use crate::context::SiteContext;

/// Render the footer. Disabled profiles are left out.
#[must_use]
pub fn render_footer(ctx: &SiteContext, socials: &[Social]) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<footer class=\"bg-white\">\n<div class=\"mx-auto max-w-7xl px-6 py-12 md:flex md:items-center md:justify-between lg:px-8\">\n");
    html.push_str("<div class=\"flex justify-center gap-x-6 md:order-2\">\n");
    for social in enabled_socials(socials) {
        let title = escape_html(&social.title);
        let _ = write!(
            html,
            "<a href=\"{}\" class=\"text-gray-400 hover:text-gray-500\" target=\"_blank\" rel=\"noopener noreferrer\"><span class=\"sr-only\">{title}</span>",
            escape_html(&social.link)
        );
        if let Some(icon) = &social.icon {
            let _ = write!(
                html,
                "<img class=\"h-6 w-6\" src=\"{}\" alt=\"\" aria-hidden=\"true\">",
                escape_html(&ctx.image_url(icon))
            );
        }
        html.push_str("</a>\n");
    }
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<p class=\"mt-8 text-center text-xs leading-5 text-gray-500 md:order-1 md:mt-0\">&copy; {}. Alle rechten voorbehouden.</p>",
        escape_html(&ctx.site_name)
    );
    html.push_str("</div>\n</footer>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_footer_skips_disabled_socials() {
        let socials: Vec<Social> = serde_json::from_value(json!([
            {"title": "GitHub", "link": "https://github.com/xprtz", "icon": {"url": "/uploads/gh.svg"}},
            {"title": "Twitter", "link": "https://twitter.com/xprtz", "isEnabled": false}
        ]))
        .unwrap();
        let html = render_footer(&SiteContext::test(), &socials);
        assert!(html.contains("href=\"https://github.com/xprtz\""));
        assert!(!html.contains("twitter"));
        assert!(html.contains("src=\"https://cms.xprtz.net/uploads/gh.svg\""));
        assert!(html.contains("&copy; XPRTZ."));
    }
}
