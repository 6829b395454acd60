//! Site map resolution for docmap.
//!
//! This crate provides:
//! - [`resolve`] / [`Resolver`]: validate a [`SiteConfig`] into a [`SiteMap`]
//! - [`SiteMap`]: longest-prefix sidebar lookup, active nav entry, pager and
//!   edit links for rendering menus
//! - [`diagnose`]: every navigation/sidebar problem in a configuration
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docmap_site::{NavEntry, Sidebar, SidebarGroup, SiteConfig, resolve};
//!
//! let mut config = SiteConfig::default();
//! config.theme_config.nav = vec![NavEntry::new("Docker", "/docker/getting-started/")];
//! config.theme_config.sidebar = Sidebar::new().with_section(
//!     "/docker/",
//!     vec![SidebarGroup::new(
//!         "Docker",
//!         vec![NavEntry::new("Getting started", "/docker/getting-started")],
//!     )],
//! );
//!
//! let site_map = resolve(&config)?;
//! let groups = site_map.section_for("/docker/getting-started/")?;
//! assert_eq!(groups[0].text, "Docker");
//! # Ok(())
//! # }
//! ```

mod prefix;
mod route;
mod site_map;
mod validate;

pub use route::{route_for_source_path, source_path_for_route};
pub use site_map::{NotFoundError, PageNav, Pager, Resolver, SiteMap, resolve};
pub use validate::{Severity, ValidationError, diagnose};

// Re-export the configuration model for convenience
pub use docmap_config::{
    EditLink, LinkPolicy, NavEntry, Sidebar, SidebarGroup, SidebarSection, SiteConfig,
};
