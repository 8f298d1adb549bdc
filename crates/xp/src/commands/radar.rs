//! `xp radar` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use xp_cms::models::RadarItem;
use xp_cms::queries::{fetch_navigation, fetch_radar_items};
use xp_markdown::escape_html;
use xp_ui::radar::{render_radar_legend, render_radar_svg};
use xp_ui::seo::{SeoOptions, generate_seo_data};
use xp_ui::{Layout, SiteContext, render_container, render_page};

use super::{SiteArgs, cms_client, page_file, write_page};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the radar command.
#[derive(Args)]
pub(crate) struct RadarArgs {
    /// Slug of the page hosting the radar; item pages link back to it.
    #[arg(long, default_value = "radar")]
    page: String,

    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    site: SiteArgs,
}

impl RadarArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(None, self.output_dir)?;
        let client = cms_client(&config)?;
        let site = config.site.id.as_str();
        let output_dir = &config.content_resolved.output_dir;

        let items = fetch_radar_items(&client, site)?;
        if items.is_empty() {
            output.warning(&format!("No radar items for site '{site}'"));
        }
        let navigation = fetch_navigation(&client, site)?;

        let ctx = SiteContext::from_config(&config);
        let layout = Layout::new(&navigation, &[]);

        let seo = generate_seo_data(
            &ctx,
            SeoOptions::new("Technology Radar", format!("Technology radar van {}", ctx.site_name)),
        );
        let body = render_container(&format!(
            "{}\n{}",
            render_radar_svg(&items, Some(self.page.as_str())),
            render_radar_legend(&items, Some(self.page.as_str()))
        ));
        let page_path = format!("/{}", self.page);
        write_page(
            &page_file(output_dir, &page_path)?,
            &render_page(&ctx, &layout, &seo, &page_path, &body),
        )?;

        for item in &items {
            let seo = generate_seo_data(&ctx, SeoOptions::new(&item.title, &item.description));
            let item_path = format!("/radar-items/{}", item.slug);
            let html = render_page(
                &ctx,
                &layout,
                &seo,
                &item_path,
                &render_container(&render_item(item, &page_path)),
            );
            write_page(&page_file(output_dir, &item_path)?, &html)?;
        }

        output.success(&format!(
            "Rendered radar with {} items to {}",
            items.len(),
            output_dir.display()
        ));
        Ok(())
    }
}

/// Detail page body of one radar item.
fn render_item(item: &RadarItem, back_path: &str) -> String {
    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        "<article class=\"radar-item\"><p><a href=\"{}\">&larr; Terug naar de radar</a></p>\
         <h1>{}</h1><p class=\"radar-item-meta\">{} &middot; {}</p><p>{}</p>",
        escape_html(back_path),
        escape_html(&item.title),
        escape_html(item.quadrant.label()),
        item.ring.label(),
        escape_html(&item.description)
    );
    for (heading, entries) in [("Voordelen", &item.pros), ("Nadelen", &item.cons)] {
        if entries.is_empty() {
            continue;
        }
        let _ = write!(html, "<h2>{heading}</h2><ul>");
        for entry in entries {
            let _ = write!(
                html,
                "<li><strong>{}</strong> {}</li>",
                escape_html(&entry.title),
                escape_html(&entry.description)
            );
        }
        html.push_str("</ul>");
    }
    if !item.conclusion.is_empty() {
        let _ = write!(
            html,
            "<h2>Conclusie</h2><p>{}</p>",
            escape_html(&item.conclusion)
        );
    }
    html.push_str("</article>");
    html
}
