//! Site configuration schema.
//!
//! Typed model of the configuration object consumed by the documentation
//! generator: top-level `lang`, `title`, `description` and a `themeConfig`
//! holding the nav bar, sidebar sections and cosmetic metadata.
//!
//! Keys use the generator's camelCase spelling (`themeConfig`, `socialLinks`,
//! `editLink`, `activeMatch`) in every file format.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder substituted in [`EditLink::pattern`].
pub const PATH_PLACEHOLDER: &str = ":path";

/// Site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// BCP-47 language tag.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Theme configuration (navigation, sidebar, cosmetics).
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en-US".to_owned(),
            title: String::new(),
            description: String::new(),
            theme_config: ThemeConfig::default(),
        }
    }
}

/// Theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation entries, in display order.
    pub nav: Vec<NavEntry>,
    /// Sidebar sections keyed by path prefix.
    pub sidebar: Sidebar,
    /// Social links shown in the header.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Search provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    /// "Edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
}

/// Navigation link: a label and an internal path or external URL.
///
/// Used both for top navigation entries and for sidebar items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    /// Display label.
    #[serde(default)]
    pub text: String,
    /// Internal path (`/docker/`) or external URL (`https://...`).
    #[serde(default)]
    pub link: String,
    /// Path prefix that marks this entry active, overriding section matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

impl NavEntry {
    /// Create an entry from a label and link.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// Set the `activeMatch` prefix.
    #[must_use]
    pub fn with_active_match(mut self, prefix: impl Into<String>) -> Self {
        self.active_match = Some(prefix.into());
        self
    }

    /// The `activeMatch` prefix, if set to a non-blank value.
    ///
    /// A blank `activeMatch` is treated as unset rather than as `/`.
    #[must_use]
    pub fn active_prefix(&self) -> Option<&str> {
        self.active_match
            .as_deref()
            .filter(|prefix| !prefix.trim().is_empty())
    }

    /// True if the link points outside the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        is_external_link(&self.link)
    }
}

/// Labeled, ordered collection of sidebar links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    #[serde(default)]
    pub text: String,
    /// Links, rendered top to bottom.
    #[serde(default)]
    pub items: Vec<NavEntry>,
    /// Whether the group starts collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarGroup {
    /// Create a group from a heading and items.
    #[must_use]
    pub fn new(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            items,
            collapsed: None,
        }
    }
}

/// Sidebar groups registered under a path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Path prefix as declared (e.g. `/docker/`).
    pub prefix: String,
    /// Groups, rendered top to bottom.
    pub groups: Vec<SidebarGroup>,
}

/// Sidebar sections in declaration order.
///
/// Deserializes from either a map of path prefix to groups or a bare list of
/// groups (registered under `/`). Repeated prefix keys are kept as separate
/// sections so they can be reported instead of silently overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    sections: Vec<SidebarSection>,
}

impl Sidebar {
    /// Create an empty sidebar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, builder style.
    #[must_use]
    pub fn with_section(mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> Self {
        self.push(prefix, groups);
        self
    }

    /// Append a section.
    pub fn push(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) {
        self.sections.push(SidebarSection {
            prefix: prefix.into(),
            groups,
        });
    }

    /// Sections in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    /// Number of declared sections (duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True if no sections are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.prefix, &section.groups)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SidebarVisitor)
    }
}

struct SidebarVisitor;

impl<'de> Visitor<'de> for SidebarVisitor {
    type Value = Sidebar;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of path prefixes to sidebar groups, or a list of sidebar groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sidebar, A::Error> {
        let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((prefix, groups)) = map.next_entry::<String, Vec<SidebarGroup>>()? {
            sections.push(SidebarSection { prefix, groups });
        }
        Ok(Sidebar { sections })
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Sidebar, A::Error> {
        let mut groups = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(group) = seq.next_element::<SidebarGroup>()? {
            groups.push(group);
        }
        if groups.is_empty() {
            return Ok(Sidebar::default());
        }
        Ok(Sidebar::new().with_section("/", groups))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Sidebar, E> {
        Ok(Sidebar::default())
    }
}

/// Social link shown as an icon in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Message line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search provider.
    pub provider: SearchProvider,
    /// Provider-specific options, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Search provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built with the site.
    Local,
    /// Hosted Algolia DocSearch.
    Algolia,
}

/// "Edit this page" link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLink {
    /// URL template containing a `:path` placeholder.
    pub pattern: String,
    /// Link label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl EditLink {
    /// Build the edit URL for a document.
    ///
    /// `source_path` is the document path relative to the docs root
    /// (e.g. `docker/getting-started.md`). A leading slash is ignored.
    #[must_use]
    pub fn url_for(&self, source_path: &str) -> String {
        self.pattern
            .replace(PATH_PLACEHOLDER, source_path.trim_start_matches('/'))
    }

    /// True if the pattern contains the `:path` placeholder.
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.pattern.contains(PATH_PLACEHOLDER)
    }
}

/// True if `link` points outside the site.
///
/// Links with a URL scheme (`https:`, `mailto:`) and protocol-relative links
/// (`//host/...`) are external. Everything else is a site path.
#[must_use]
pub fn is_external_link(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
