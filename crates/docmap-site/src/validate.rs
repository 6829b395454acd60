//! Site configuration checks.
//!
//! [`diagnose`] reports every navigation/sidebar problem in a
//! [`SiteConfig`], in a fixed order: duplicate prefixes, nav entries,
//! sidebar groups, edit link.

use docmap_config::{SiteConfig, is_external_link};

use crate::prefix::PrefixIndex;

/// Problem found while validating a site configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two sidebar sections share a prefix.
    #[error("duplicate sidebar prefix {prefix} (already declared as {first})")]
    DuplicatePrefix {
        /// Repeated prefix as written.
        prefix: String,
        /// First declaration of the same prefix.
        first: String,
    },
    /// Internal nav link covered by no sidebar section.
    #[error("nav entry {text:?} links to {link}, which matches no sidebar section")]
    BrokenNavLink {
        /// Entry label.
        text: String,
        /// Offending link.
        link: String,
    },
    /// Nav entry without a link.
    #[error("nav entry {text:?} has an empty link")]
    EmptyNavLink {
        /// Entry label.
        text: String,
    },
    /// Sidebar group without items.
    #[error("sidebar group {group:?} under {prefix} has no items")]
    EmptyGroup {
        /// Section prefix.
        prefix: String,
        /// Group heading.
        group: String,
    },
    /// Sidebar item without a link.
    #[error("sidebar item {text:?} in group {group:?} under {prefix} has an empty link")]
    EmptyItemLink {
        /// Section prefix.
        prefix: String,
        /// Group heading.
        group: String,
        /// Item label.
        text: String,
    },
    /// Internal sidebar link covered by no sidebar section.
    #[error("sidebar item {text:?} under {prefix} links to {link}, which matches no sidebar section")]
    OrphanItemLink {
        /// Section prefix.
        prefix: String,
        /// Item label.
        text: String,
        /// Offending link.
        link: String,
    },
    /// Edit link pattern that never varies by page.
    #[error("edit link pattern {pattern} has no :path placeholder")]
    MissingPathPlaceholder {
        /// Pattern as configured.
        pattern: String,
    },
}

/// How serious a [`ValidationError`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Resolution fails.
    Error,
    /// Resolution continues; the problem is logged.
    Warning,
}

impl ValidationError {
    /// Default severity, before any link policy is applied.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::OrphanItemLink { .. } | Self::MissingPathPlaceholder { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// True for problems a lenient link policy may downgrade to warnings.
    #[must_use]
    pub fn is_broken_link(&self) -> bool {
        matches!(self, Self::BrokenNavLink { .. })
    }
}

/// Report every problem in `config`.
///
/// Never modifies `config`. An empty result means the configuration resolves
/// cleanly under any link policy.
#[must_use]
pub fn diagnose(config: &SiteConfig) -> Vec<ValidationError> {
    let theme = &config.theme_config;
    let sections = theme.sidebar.sections();
    let (index, duplicates) = PrefixIndex::build(sections);

    let mut problems: Vec<ValidationError> = duplicates
        .into_iter()
        .map(|dup| ValidationError::DuplicatePrefix {
            prefix: sections[dup.duplicate].prefix.clone(),
            first: sections[dup.first].prefix.clone(),
        })
        .collect();

    for entry in &theme.nav {
        if entry.link.is_empty() {
            problems.push(ValidationError::EmptyNavLink {
                text: entry.text.clone(),
            });
        } else if !entry.is_external() && index.lookup(&entry.link).is_none() {
            problems.push(ValidationError::BrokenNavLink {
                text: entry.text.clone(),
                link: entry.link.clone(),
            });
        }
    }

    for section in sections {
        for group in &section.groups {
            if group.items.is_empty() {
                problems.push(ValidationError::EmptyGroup {
                    prefix: section.prefix.clone(),
                    group: group.text.clone(),
                });
            }
            for item in &group.items {
                if item.link.is_empty() {
                    problems.push(ValidationError::EmptyItemLink {
                        prefix: section.prefix.clone(),
                        group: group.text.clone(),
                        text: item.text.clone(),
                    });
                } else if !is_external_link(&item.link) && index.lookup(&item.link).is_none() {
                    problems.push(ValidationError::OrphanItemLink {
                        prefix: section.prefix.clone(),
                        text: item.text.clone(),
                        link: item.link.clone(),
                    });
                }
            }
        }
    }

    if let Some(edit_link) = &theme.edit_link
        && !edit_link.has_placeholder()
    {
        problems.push(ValidationError::MissingPathPlaceholder {
            pattern: edit_link.pattern.clone(),
        });
    }

    problems
}

#[cfg(test)]
mod tests {
    use docmap_config::{EditLink, NavEntry, Sidebar, SidebarGroup};
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(nav: Vec<NavEntry>, sidebar: Sidebar) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.theme_config.nav = nav;
        config.theme_config.sidebar = sidebar;
        config
    }

    fn docker_sidebar() -> Sidebar {
        Sidebar::new().with_section(
            "/docker/",
            vec![SidebarGroup::new(
                "Docker",
                vec![
                    NavEntry::new("Getting started", "/docker/getting-started"),
                    NavEntry::new("Compose", "/docker/docker-compose"),
                ],
            )],
        )
    }

    #[test]
    fn test_diagnose_clean_config() {
        let config = config(
            vec![
                NavEntry::new("Docker", "/docker/getting-started/"),
                NavEntry::new("Gitee", "https://gitee.com/acme/docs"),
            ],
            docker_sidebar(),
        );

        assert!(diagnose(&config).is_empty());
    }

    #[test]
    fn test_diagnose_broken_nav_link() {
        let config = config(vec![NavEntry::new("Missing", "/missing/")], docker_sidebar());

        let problems = diagnose(&config);

        assert_eq!(
            problems,
            vec![ValidationError::BrokenNavLink {
                text: "Missing".to_owned(),
                link: "/missing/".to_owned(),
            }]
        );
        assert_eq!(problems[0].severity(), Severity::Error);
        assert!(problems[0].is_broken_link());
        assert!(problems[0].to_string().contains("/missing/"));
    }

    #[test]
    fn test_diagnose_duplicate_prefix() {
        let sidebar = docker_sidebar().with_section(
            "/docker",
            vec![SidebarGroup::new("Again", vec![NavEntry::new("x", "/docker/x")])],
        );
        let config = config(Vec::new(), sidebar);

        let problems = diagnose(&config);

        assert_eq!(
            problems,
            vec![ValidationError::DuplicatePrefix {
                prefix: "/docker".to_owned(),
                first: "/docker/".to_owned(),
            }]
        );
    }

    #[test]
    fn test_diagnose_empty_links_and_groups() {
        let sidebar = Sidebar::new().with_section(
            "/unocss/",
            vec![
                SidebarGroup::new("Empty", Vec::new()),
                SidebarGroup::new("Intro", vec![NavEntry::new("Blank", "")]),
            ],
        );
        let config = config(vec![NavEntry::new("UnoCSS", "")], sidebar);

        let problems = diagnose(&config);

        assert_eq!(
            problems,
            vec![
                ValidationError::EmptyNavLink {
                    text: "UnoCSS".to_owned()
                },
                ValidationError::EmptyGroup {
                    prefix: "/unocss/".to_owned(),
                    group: "Empty".to_owned(),
                },
                ValidationError::EmptyItemLink {
                    prefix: "/unocss/".to_owned(),
                    group: "Intro".to_owned(),
                    text: "Blank".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_diagnose_orphan_item_is_warning() {
        let sidebar = Sidebar::new().with_section(
            "/deploy/",
            vec![SidebarGroup::new(
                "Deploy",
                vec![
                    NavEntry::new("Vercel", "/deploy/vercel-deploy"),
                    NavEntry::new("Docker", "/docker/docker-production"),
                    NavEntry::new("Upstream", "https://vercel.com/docs"),
                ],
            )],
        );
        let config = config(Vec::new(), sidebar);

        let problems = diagnose(&config);

        assert_eq!(problems.len(), 1);
        assert!(matches!(
            &problems[0],
            ValidationError::OrphanItemLink { link, .. } if link == "/docker/docker-production"
        ));
        assert_eq!(problems[0].severity(), Severity::Warning);
        assert!(!problems[0].is_broken_link());
    }

    #[test]
    fn test_diagnose_edit_link_without_placeholder() {
        let mut config = config(Vec::new(), docker_sidebar());
        config.theme_config.edit_link = Some(EditLink {
            pattern: "https://github.com/acme/docs".to_owned(),
            text: None,
        });

        let problems = diagnose(&config);

        assert_eq!(
            problems,
            vec![ValidationError::MissingPathPlaceholder {
                pattern: "https://github.com/acme/docs".to_owned()
            }]
        );
        assert_eq!(problems[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_diagnose_order_duplicates_first() {
        let sidebar = docker_sidebar().with_section("/docker/", Vec::new());
        let config = config(vec![NavEntry::new("Missing", "/missing/")], sidebar);

        let problems = diagnose(&config);

        assert!(matches!(problems[0], ValidationError::DuplicatePrefix { .. }));
        assert!(matches!(problems[1], ValidationError::BrokenNavLink { .. }));
    }
}
