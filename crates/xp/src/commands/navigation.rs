//! `xp navigation` command implementation.

use clap::Args;
use xp_cms::queries::fetch_navigation;

use super::{SiteArgs, cms_client};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the navigation command.
#[derive(Args)]
pub(crate) struct NavigationArgs {
    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl NavigationArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(None, None)?;
        let client = cms_client(&config)?;

        let links = fetch_navigation(&client, &config.site.id)?;
        if links.is_empty() {
            output.warning(&format!("No navigation for site '{}'", config.site.id));
        }

        let json = if self.compact {
            serde_json::to_string(&links)?
        } else {
            serde_json::to_string_pretty(&links)?
        };
        output.result(&json)?;
        Ok(())
    }
}
