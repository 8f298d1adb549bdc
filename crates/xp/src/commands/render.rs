//! `xp render` command implementation.

use std::path::PathBuf;

use clap::Args;
use tracing::info;
use xp_ui::{Layout, SiteContext, render_markdown_page};

use super::{SiteArgs, markdown_renderer, write_page};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the HTML in a full page with head, header and footer.
    #[arg(long)]
    page: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(None, None)?;
        let renderer = markdown_renderer(&config);

        let source = std::fs::read_to_string(&self.file)?;
        let rendered = renderer.render(&source);
        for warning in &rendered.warnings {
            output.warning(&format!("{}: {warning}", self.file.display()));
        }
        info!(
            file = %self.file.display(),
            solutions = rendered.report.solutions,
            wrapped = rendered.report.wrapped,
            skipped = rendered.report.skipped,
            "Document transformed"
        );

        let html = if self.page {
            let ctx = SiteContext::from_config(&config);
            let stem = self
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let title = rendered.title.clone().unwrap_or_else(|| stem.clone());
            render_markdown_page(
                &ctx,
                &Layout::new(&[], &[]),
                &title,
                &title,
                &format!("/{stem}"),
                &rendered.html,
            )
        } else {
            rendered.html
        };

        match self.output {
            Some(path) => {
                write_page(&path, &html)?;
                output.success(&format!("Rendered {}", path.display()));
            }
            None => output.result(&html)?,
        }
        Ok(())
    }
}
