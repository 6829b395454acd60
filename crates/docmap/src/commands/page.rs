//! `docmap page` command implementation.

use clap::Args;
use docmap_site::{NavEntry, Pager, SiteMap, source_path_for_route};
use serde::Serialize;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Route of the page (e.g. `/docker/getting-started`).
    route: String,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Print page information as JSON.
    #[arg(long)]
    json: bool,
}

/// Everything a theme needs to frame one page.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo<'a> {
    route: &'a str,
    source_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_nav: Option<&'a NavEntry>,
    pager: Pager<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_link: Option<String>,
}

impl<'a> PageInfo<'a> {
    /// Collect page information. A route outside every section has no
    /// section and an empty pager.
    fn new(site_map: &'a SiteMap, route: &'a str) -> Self {
        let page = site_map.page(route);
        Self {
            route,
            source_path: source_path_for_route(route),
            section: page.section.map(|section| section.prefix.as_str()),
            active_nav: page.active_nav,
            pager: page.pager,
            edit_link: site_map.edit_link_for_route(route),
        }
    }
}

impl PageArgs {
    /// Execute the page command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or resolve.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site_map = self.site.load_site_map()?;
        let info = PageInfo::new(&site_map, &self.route);

        if self.json {
            return output.json(&info);
        }

        output.heading(info.route);
        output.line(&format!("  source:   {}", info.source_path));
        output.line(&format!("  section:  {}", info.section.unwrap_or("(none)")));
        if let Some(entry) = info.active_nav {
            output.link(2, &format!("nav:      {}", entry.text), &entry.link);
        }
        if let Some(prev) = info.pager.prev {
            output.link(2, &format!("prev:     {}", prev.text), &prev.link);
        }
        if let Some(next) = info.pager.next {
            output.link(2, &format!("next:     {}", next.text), &next.link);
        }
        if let Some(edit_link) = &info.edit_link {
            output.line(&format!("  edit:     {edit_link}"));
        }

        Ok(())
    }
}
