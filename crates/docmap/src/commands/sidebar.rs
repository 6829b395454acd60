//! `docmap sidebar` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Request path (e.g. `/docker/getting-started`).
    path: String,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Print the matched section as JSON.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or resolve, or if
    /// no sidebar section covers the path.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site_map = self.site.load_site_map()?;
        let section = site_map.section(&self.path)?;

        if self.json {
            return output.json(section);
        }

        output.heading(&section.prefix);
        for group in &section.groups {
            output.line(&format!("  {}", group.text));
            for item in &group.items {
                output.link(4, &item.text, &item.link);
            }
        }

        Ok(())
    }
}
