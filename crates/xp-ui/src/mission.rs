//! Mission statement with statistics.

use std::fmt::Write;

use xp_cms::models::Mission;
use xp_markdown::escape_html;

#[must_use]
pub fn render_mission(mission: &Mission) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<section class=\"mission mx-auto max-w-7xl px-6 lg:px-8\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-3xl font-bold tracking-tight text-primary-900 sm:text-4xl\">{}</h2>",
        escape_html(&mission.title)
    );
    let _ = writeln!(
        html,
        "<p class=\"mt-6 text-xl leading-8 text-gray-600\">{}</p>",
        escape_html(&mission.description)
    );
    if let Some(extra) = &mission.extra_description {
        let _ = writeln!(
            html,
            "<p class=\"mt-10 text-base leading-7 text-gray-700\">{}</p>",
            escape_html(extra)
        );
    }
    if !mission.statistics.is_empty() {
        html.push_str("<dl class=\"mt-16 grid grid-cols-1 gap-x-8 gap-y-12 sm:grid-cols-2\">\n");
        for stat in &mission.statistics {
            let _ = writeln!(
                html,
                "<div class=\"flex flex-col-reverse gap-y-4\"><dt class=\"text-base leading-7 text-gray-600\">{}</dt>\
                 <dd class=\"text-5xl font-semibold tracking-tight text-primary-900\">{}</dd></div>",
                escape_html(&stat.description),
                escape_html(&stat.title)
            );
        }
        html.push_str("</dl>\n");
    }
    html.push_str("</section>\n");
    html
}
