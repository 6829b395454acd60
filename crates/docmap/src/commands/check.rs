//! `docmap check` command implementation.

use clap::Args;
use docmap_site::{Severity, diagnose};

use super::{SiteArgs, resolver_for};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Prints every problem, then resolves the site map under the configured
    /// link policy.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or any problem is an
    /// error under the link policy.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config()?;
        let resolver = resolver_for(&config);

        let problems = diagnose(&config.site);
        let mut errors = 0;
        for problem in &problems {
            match resolver.severity(problem) {
                Severity::Error => {
                    errors += 1;
                    output.error(&format!("error: {problem}"));
                }
                Severity::Warning => output.warning(&format!("warning: {problem}")),
            }
        }

        if errors > 0 {
            return Err(CliError::Check(format!(
                "{errors} error(s), {} warning(s)",
                problems.len() - errors
            )));
        }

        let site_map = resolver.resolve(&config.site)?;
        let links: usize = site_map
            .sections()
            .iter()
            .flat_map(|section| &section.groups)
            .map(|group| group.items.len())
            .sum();

        let source = config
            .config_path
            .as_deref()
            .map_or_else(|| "configuration".to_owned(), |p| p.display().to_string());
        output.success(&format!(
            "{source}: {} nav entries, {} sidebar sections, {links} sidebar links, {} warning(s)",
            site_map.nav_entries().len(),
            site_map.sections().len(),
            site_map.warnings().len(),
        ));

        Ok(())
    }
}
