//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod page;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docmap_config::{CliSettings, Config, LinkPolicy};
use docmap_site::{Resolver, SiteMap};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use page::PageArgs;
pub(crate) use sidebar::SidebarArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docmap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report nav links that match no sidebar section as warnings (overrides config).
    #[arg(long)]
    warn_broken_links: bool,

    /// Fail on nav links that match no sidebar section (overrides config).
    #[arg(long, conflicts_with = "warn_broken_links")]
    deny_broken_links: bool,

    /// Enable verbose output (show configuration loading logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            broken_links: self.resolve_link_policy(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and resolve it into a site map.
    pub(crate) fn load_site_map(&self) -> Result<SiteMap, CliError> {
        let config = self.load_config()?;
        let site_map = resolver_for(&config).resolve(&config.site)?;
        Ok(site_map)
    }

    /// Resolve link policy from --warn-broken-links/--deny-broken-links flags.
    fn resolve_link_policy(&self) -> Option<LinkPolicy> {
        self.deny_broken_links
            .then_some(LinkPolicy::Deny)
            .or(self.warn_broken_links.then_some(LinkPolicy::Warn))
    }
}

/// Resolver configured from the `[check]` table.
pub(crate) fn resolver_for(config: &Config) -> Resolver {
    Resolver::new().with_link_policy(config.check.broken_links)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::Path;

    use super::*;

    pub(crate) const SITE_TOML: &str = r#"
lang = "zh-CN"
title = "Docker & UnoCSS"

[[themeConfig.nav]]
text = "Docker"
link = "/docker/getting-started/"

[[themeConfig.nav]]
text = "Gitee"
link = "https://gitee.com/acme/docs"

[[themeConfig.sidebar."/docker/"]]
text = "Docker"
items = [
    { text = "Getting started", link = "/docker/getting-started" },
    { text = "Compose", link = "/docker/docker-compose" },
    { text = "Network", link = "/docker/docker-network" },
]

[themeConfig.editLink]
pattern = "https://github.com/acme/docs/edit/main/docs/:path"
"#;

    pub(crate) fn site_args(config: &Path) -> SiteArgs {
        SiteArgs {
            config: Some(config.to_path_buf()),
            warn_broken_links: false,
            deny_broken_links: false,
            verbose: false,
        }
    }

    pub(crate) fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("docmap.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_link_policy_flags() {
        let mut args = site_args(Path::new("docmap.toml"));
        assert_eq!(args.resolve_link_policy(), None);

        args.warn_broken_links = true;
        assert_eq!(args.resolve_link_policy(), Some(LinkPolicy::Warn));

        args.warn_broken_links = false;
        args.deny_broken_links = true;
        assert_eq!(args.resolve_link_policy(), Some(LinkPolicy::Deny));
    }

    #[test]
    fn test_load_site_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), SITE_TOML);

        let site_map = site_args(&path).load_site_map().unwrap();

        assert_eq!(site_map.title(), "Docker & UnoCSS");
        assert_eq!(site_map.nav_entries().len(), 2);
    }

    #[test]
    fn test_load_site_map_warn_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let content = SITE_TOML.replacen(
            "[[themeConfig.sidebar",
            "[[themeConfig.nav]]\ntext = \"Missing\"\nlink = \"/missing/\"\n\n[[themeConfig.sidebar",
            1,
        );
        let path = write_config(dir.path(), &content);

        let mut args = site_args(&path);
        assert!(matches!(
            args.load_site_map(),
            Err(CliError::Validation(_))
        ));

        args.warn_broken_links = true;
        let site_map = args.load_site_map().unwrap();
        assert_eq!(site_map.warnings().len(), 1);
    }

    #[test]
    fn test_load_site_map_missing_config() {
        let dir = tempfile::tempdir().unwrap();

        let result = site_args(&dir.path().join("nope.toml")).load_site_map();

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
