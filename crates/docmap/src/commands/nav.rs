//! `docmap nav` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Print entries as JSON.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or resolve.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site_map = self.site.load_site_map()?;

        if self.json {
            return output.json(site_map.nav_entries());
        }

        output.heading(site_map.title());
        for entry in site_map.nav_entries() {
            let marker = if entry.is_external() { " (external)" } else { "" };
            output.link(2, &format!("{}{marker}", entry.text), &entry.link);
        }

        Ok(())
    }
}
