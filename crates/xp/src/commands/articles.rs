//! `xp articles` command implementation.

use std::path::PathBuf;

use clap::Args;
use tracing::info;
use xp_cms::models::Article;
use xp_cms::queries::{fetch_article_by_slug, fetch_articles, fetch_navigation};
use xp_ui::seo::{SeoOptions, generate_seo_data};
use xp_ui::{
    Layout, SiteContext, article_path, render_article_page, render_blog_listing,
    render_container, render_page, structured_data,
};

use super::{SiteArgs, cms_client, markdown_renderer, page_file, write_page};
use crate::error::CliError;
use crate::output::Output;

/// Site path of the article listing.
const BLOG_PATH: &str = "/blog";

/// Arguments for the articles command.
#[derive(Args)]
pub(crate) struct ArticlesArgs {
    /// Only render the article with this slug (skips the listing).
    #[arg(long)]
    slug: Option<String>,

    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    site: SiteArgs,
}

impl ArticlesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(None, self.output_dir)?;
        let client = cms_client(&config)?;
        let site = config.site.id.as_str();
        let output_dir = &config.content_resolved.output_dir;

        let articles = match &self.slug {
            Some(slug) => {
                let article = fetch_article_by_slug(&client, site, slug)?.ok_or_else(|| {
                    CliError::NotFound(format!("No article '{slug}' for site '{site}'"))
                })?;
                vec![article]
            }
            None => fetch_articles(&client, site)?,
        };
        let navigation = fetch_navigation(&client, site)?;

        let ctx = SiteContext::from_config(&config);
        let layout = Layout::new(&navigation, &[]);
        let renderer = markdown_renderer(&config);

        for article in &articles {
            let html = render_article_page(&ctx, &layout, article, &renderer);
            write_page(&page_file(output_dir, &article_path(&article.slug))?, &html)?;
            info!(slug = %article.slug, "Article page written");
        }

        if self.slug.is_none() {
            let html = render_listing_page(&ctx, &layout, &articles);
            write_page(&page_file(output_dir, BLOG_PATH)?, &html)?;
        }

        output.success(&format!(
            "Rendered {} articles to {}",
            articles.len(),
            output_dir.display()
        ));
        Ok(())
    }
}

fn render_listing_page(ctx: &SiteContext, layout: &Layout<'_>, articles: &[Article]) -> String {
    let mut options = SeoOptions::new("Blog", format!("Artikelen van {}", ctx.site_name));
    options.structured_data = Some(structured_data::website(
        &ctx.site_name,
        &ctx.site_url,
        &options.description,
        None,
        &[],
    ));
    let seo = generate_seo_data(ctx, options);
    let body = render_container(&render_blog_listing(ctx, "Blog", articles));
    render_page(ctx, layout, &seo, BLOG_PATH, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use xp_config::Config;

    #[test]
    fn test_render_listing_page() {
        let articles: Vec<Article> = serde_json::from_value(json!([{
            "documentId": "a1",
            "title": "Eerste",
            "date": "2025-01-01",
            "slug": "eerste"
        }]))
        .unwrap();
        let ctx = SiteContext::from_config(&Config::default());
        let html = render_listing_page(&ctx, &Layout::new(&[], &[]), &articles);

        assert!(html.contains("<title>Blog | XPRTZ</title>"));
        assert!(html.contains("href=\"/artikelen/eerste\""));
        assert!(html.contains("\"@type\":\"WebSite\""));
    }
}
