//! Resolved, queryable site map.
//!
//! [`SiteMap`] is built once from a validated [`SiteConfig`] and answers the
//! questions a theme asks while rendering a page: which sidebar to show,
//! which nav entry to highlight, what the previous/next pages are and where
//! the "edit this page" link points.
//!
//! # Architecture
//!
//! Sections are stored in declaration order with a `HashMap` from normalized
//! prefix to section index. Lookups walk up the request path one segment at a
//! time, so `section_for` costs O(d) hash lookups where d is the path depth.

use docmap_config::{EditLink, LinkPolicy, NavEntry, SidebarGroup, SidebarSection, SiteConfig};
use serde::Serialize;

use crate::prefix::{PrefixIndex, normalize_path, prefix_covers};
use crate::route::{page_key, source_path_for_route};
use crate::validate::{Severity, ValidationError, diagnose};

/// Error returned when no sidebar section covers a path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no sidebar section matches {path}")]
pub struct NotFoundError {
    /// Requested path.
    pub path: String,
}

/// Previous/next links around a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pager<'a> {
    /// Item before the page in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a NavEntry>,
    /// Item after the page in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a NavEntry>,
}

/// Navigation context of one page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageNav<'a> {
    /// Section with the longest prefix covering the page.
    pub section: Option<&'a SidebarSection>,
    /// Nav entry to highlight.
    pub active_nav: Option<&'a NavEntry>,
    /// Previous/next items within the section.
    pub pager: Pager<'a>,
}

/// Resolves a [`SiteConfig`] into a [`SiteMap`].
///
/// Duplicate prefixes and structural problems (empty links, empty groups)
/// always fail. Broken nav links fail under [`LinkPolicy::Deny`] and are
/// logged and kept as warnings under [`LinkPolicy::Warn`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Resolver {
    link_policy: LinkPolicy,
}

impl Resolver {
    /// Create a resolver with the default (strict) link policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how broken nav links are handled.
    #[must_use]
    pub fn with_link_policy(mut self, link_policy: LinkPolicy) -> Self {
        self.link_policy = link_policy;
        self
    }

    /// Severity of a problem under this resolver's link policy.
    #[must_use]
    pub fn severity(&self, problem: &ValidationError) -> Severity {
        if problem.is_broken_link() && self.link_policy == LinkPolicy::Warn {
            Severity::Warning
        } else {
            problem.severity()
        }
    }

    /// Validate and index `config`.
    ///
    /// The input is only read; the returned map owns copies of the nav and
    /// sidebar data.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] with [`Severity::Error`] under
    /// this resolver's link policy.
    pub fn resolve(&self, config: &SiteConfig) -> Result<SiteMap, ValidationError> {
        let mut warnings = Vec::new();
        for problem in diagnose(config) {
            match self.severity(&problem) {
                Severity::Error => return Err(problem),
                Severity::Warning => {
                    tracing::warn!(%problem, "Site map problem");
                    warnings.push(problem);
                }
            }
        }

        let site_map = SiteMap::build(config, warnings);
        tracing::debug!(
            nav = site_map.nav.len(),
            sections = site_map.sections.len(),
            warnings = site_map.warnings.len(),
            "Resolved site map"
        );
        Ok(site_map)
    }
}

/// Validate and index `config` with the strict link policy.
///
/// # Errors
///
/// Returns [`ValidationError`] if an internal nav link matches no sidebar
/// section, a sidebar prefix is declared twice, or a link or group is empty.
pub fn resolve(config: &SiteConfig) -> Result<SiteMap, ValidationError> {
    Resolver::new().resolve(config)
}

/// Validated navigation and sidebar structure.
///
/// Immutable after resolution.
#[derive(Debug)]
pub struct SiteMap {
    title: String,
    lang: String,
    nav: Vec<NavEntry>,
    sections: Vec<SidebarSection>,
    index: PrefixIndex,
    edit_link: Option<EditLink>,
    warnings: Vec<ValidationError>,
}

impl SiteMap {
    /// Build the map. Duplicate prefixes must already have been rejected.
    fn build(config: &SiteConfig, warnings: Vec<ValidationError>) -> Self {
        let theme = &config.theme_config;
        let sections = theme.sidebar.sections().to_vec();
        let (index, _) = PrefixIndex::build(&sections);

        Self {
            title: config.title.clone(),
            lang: config.lang.clone(),
            nav: theme.nav.clone(),
            sections,
            index,
            edit_link: theme.edit_link.clone(),
            warnings,
        }
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site language tag.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Nav entries in configured order.
    #[must_use]
    pub fn nav_entries(&self) -> &[NavEntry] {
        &self.nav
    }

    /// Sidebar sections in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    /// Problems tolerated during resolution.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Sidebar section whose prefix is the longest match for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no prefix covers `path`.
    pub fn section(&self, path: &str) -> Result<&SidebarSection, NotFoundError> {
        self.index
            .lookup(path)
            .map(|idx| &self.sections[idx])
            .ok_or_else(|| NotFoundError {
                path: path.to_owned(),
            })
    }

    /// Sidebar groups for `path`, by longest-prefix match.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no prefix covers `path`. Callers that
    /// render an empty sidebar instead can use `unwrap_or_default()`.
    pub fn section_for(&self, path: &str) -> Result<&[SidebarGroup], NotFoundError> {
        self.section(path).map(|section| section.groups.as_slice())
    }

    /// Nav entry to highlight while `path` is displayed.
    ///
    /// An entry with `activeMatch` is active when that prefix covers the
    /// path. Otherwise an internal entry is active when its link resolves to
    /// the same sidebar section as the path. First match in nav order wins.
    /// A blank `activeMatch` counts as unset.
    #[must_use]
    pub fn active_nav(&self, path: &str) -> Option<&NavEntry> {
        let path = normalize_path(path);
        self.active_nav_in(&path, self.index.lookup(&path))
    }

    /// Previous and next sidebar items around `path`.
    ///
    /// Items are flattened across the groups of the matched section,
    /// skipping external links. Returns an empty pager if `path` is not one
    /// of the section's items.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no prefix covers `path`.
    pub fn pager(&self, path: &str) -> Result<Pager<'_>, NotFoundError> {
        let section = self.section(path)?;
        Ok(pager_in(section, path))
    }

    /// Section, active nav entry and pager for `path` from one prefix lookup.
    ///
    /// A path outside every section has no section and an empty pager.
    #[must_use]
    pub fn page(&self, path: &str) -> PageNav<'_> {
        let normalized = normalize_path(path);
        let idx = self.index.lookup(&normalized);
        let section = idx.map(|idx| &self.sections[idx]);

        PageNav {
            section,
            active_nav: self.active_nav_in(&normalized, idx),
            pager: section
                .map(|section| pager_in(section, path))
                .unwrap_or_default(),
        }
    }

    /// Active nav entry for a normalized path already matched to `section`.
    fn active_nav_in(&self, path: &str, section: Option<usize>) -> Option<&NavEntry> {
        if let Some(entry) = self.nav.iter().find(|entry| {
            entry
                .active_prefix()
                .is_some_and(|prefix| prefix_covers(prefix, path))
        }) {
            return Some(entry);
        }

        let section = section?;
        self.nav.iter().find(|entry| {
            entry.active_prefix().is_none()
                && !entry.is_external()
                && self.index.lookup(&entry.link) == Some(section)
        })
    }

    /// Edit URL for a document, if an edit link is configured.
    ///
    /// `source_path` is relative to the docs root (e.g. `docker/setup.md`).
    #[must_use]
    pub fn edit_link(&self, source_path: &str) -> Option<String> {
        self.edit_link
            .as_ref()
            .map(|edit_link| edit_link.url_for(source_path))
    }

    /// Edit URL for the document behind a route.
    #[must_use]
    pub fn edit_link_for_route(&self, route: &str) -> Option<String> {
        self.edit_link(&source_path_for_route(route))
    }

    /// Label for the edit link, if configured.
    #[must_use]
    pub fn edit_link_text(&self) -> Option<&str> {
        self.edit_link.as_ref().and_then(|e| e.text.as_deref())
    }
}

/// Pager for `path` within `section`.
fn pager_in<'a>(section: &'a SidebarSection, path: &str) -> Pager<'a> {
    let items: Vec<&NavEntry> = section
        .groups
        .iter()
        .flat_map(|group| &group.items)
        .filter(|item| !item.is_external())
        .collect();

    let target = page_key(path);
    let Some(pos) = items.iter().position(|item| page_key(&item.link) == target) else {
        return Pager::default();
    };

    Pager {
        prev: pos.checked_sub(1).map(|i| items[i]),
        next: items.get(pos + 1).copied(),
    }
}
