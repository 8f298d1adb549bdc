//! Team members (directors) grid.

use std::fmt::Write;

use xp_cms::models::Team;
use xp_markdown::escape_html;

use crate::context::SiteContext;

#[must_use]
pub fn render_team(ctx: &SiteContext, team: &Team) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str("<section class=\"team mx-auto max-w-7xl px-6 lg:px-8\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold tracking-tight text-primary-900\">{}</h2>",
        escape_html(&team.title)
    );
    if !team.description.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"mt-6 text-lg leading-8 text-gray-600\">{}</p>",
            escape_html(&team.description)
        );
    }
    html.push_str("<ul role=\"list\" class=\"mt-20 grid grid-cols-1 gap-x-8 gap-y-14 sm:grid-cols-2 lg:grid-cols-3\">\n");
    for member in &team.members {
        let name = member.full_name();
        let _ = write!(html, "<li id=\"{}\">", escape_html(&member.slug()));
        if let Some(avatar) = &member.avatar {
            let _ = write!(
                html,
                "<img class=\"aspect-[3/2] w-full rounded-2xl object-cover\" src=\"{}\" alt=\"{}\">",
                escape_html(&ctx.image_url(avatar)),
                escape_html(avatar.alt_or(&name))
            );
        }
        let _ = write!(
            html,
            "<h3 class=\"mt-6 text-lg font-semibold leading-8 text-gray-900\">{}</h3>",
            escape_html(&name)
        );
        if let Some(job_title) = &member.job_title {
            let _ = write!(
                html,
                "<p class=\"text-base leading-7 text-gray-600\">{}</p>",
                escape_html(job_title)
            );
        }
        if let Some(github) = &member.git_hub {
            let _ = write!(
                html,
                "<a href=\"https://github.com/{}\" class=\"text-gray-400 hover:text-gray-500\">GitHub</a>",
                escape_html(github)
            );
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</section>\n");
    html
}
