//! CLI command implementations.

mod articles;
mod lessons;
mod navigation;
mod radar;
mod render;

use std::path::{Component, Path, PathBuf};

use clap::Args;
use tracing::debug;
use xp_cms::CmsClient;
use xp_config::{CliSettings, Config};
use xp_markdown::{CodeTitles, MarkdownRenderer};

use crate::error::CliError;

pub(crate) use articles::ArticlesArgs;
pub(crate) use lessons::LessonsArgs;
pub(crate) use navigation::NavigationArgs;
pub(crate) use radar::RadarArgs;
pub(crate) use render::RenderArgs;

/// Site and configuration arguments shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover xp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site identifier used to filter CMS content (overrides config).
    #[arg(long, env = "PUBLIC_SITE")]
    site: Option<String>,

    /// CMS base URL (overrides config).
    #[arg(long, env = "PUBLIC_STRAPI_URL")]
    cms_url: Option<String>,

    /// Image host URL (overrides config).
    #[arg(long)]
    images_url: Option<String>,
}

impl SiteArgs {
    /// Load configuration with these arguments and the given directory
    /// overrides applied.
    pub(crate) fn load(
        &self,
        source_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            site: self.site.clone(),
            cms_url: self.cms_url.clone(),
            images_url: self.images_url.clone(),
            source_dir,
            output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        debug!(site = %config.site.id, config = ?config.config_path, "Configuration loaded");
        Ok(config)
    }
}

/// Markdown renderer with the configured code block titles.
pub(crate) fn markdown_renderer(config: &Config) -> MarkdownRenderer {
    MarkdownRenderer::new(
        CodeTitles::default().with_overrides(&config.content_resolved.code_titles),
    )
}

/// CMS client for the configured CMS.
pub(crate) fn cms_client(config: &Config) -> Result<CmsClient, CliError> {
    let cms = config.require_cms()?;
    Ok(CmsClient::new(&cms.base_url, cms.token.as_deref()))
}

/// Write `html` to `path`, creating parent directories.
pub(crate) fn write_page(path: &Path, html: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    debug!(path = %path.display(), bytes = html.len(), "Page written");
    Ok(())
}

/// `index.html` path for a site path below `output_dir`.
///
/// Site paths are built from CMS slugs, so anything but plain path segments
/// (`..`, roots, prefixes) is rejected.
pub(crate) fn page_file(output_dir: &Path, site_path: &str) -> Result<PathBuf, CliError> {
    let relative = Path::new(site_path.trim_matches('/'));
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return Err(CliError::InvalidPath(site_path.to_owned()));
    }
    Ok(output_dir.join(relative).join("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_file() {
        let out = Path::new("/out");
        assert_eq!(page_file(out, "/").unwrap(), PathBuf::from("/out/index.html"));
        assert_eq!(
            page_file(out, "/artikelen/hallo").unwrap(),
            PathBuf::from("/out/artikelen/hallo/index.html")
        );
    }

    #[test]
    fn test_page_file_rejects_parent_segments() {
        let out = Path::new("/out");
        let err = page_file(out, "/artikelen/../../../../tmp/pwned").unwrap_err();
        assert!(matches!(err, CliError::InvalidPath(_)));
        assert!(page_file(out, "/artikelen/..").is_err());
    }

    #[test]
    fn test_write_page_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/index.html");
        write_page(&path, "<p>x</p>").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_markdown_renderer_uses_code_titles() {
        let mut config = Config::default();
        config
            .content_resolved
            .code_titles
            .insert("rust".to_owned(), "Rust 2024".to_owned());
        let rendered = markdown_renderer(&config).render("```rust\nfn main() {}\n```\n");
        assert!(rendered.html.contains("<summary>Rust 2024 Code</summary>"));
    }
}
