//! Path normalization and longest-prefix lookup.
//!
//! Sidebar prefixes and request paths are compared segment by segment:
//! `/react/` covers `/react`, `/react/` and `/react/hooks/use-state`, but not
//! `/reactive`. The prefix `/` covers every path.

use std::collections::HashMap;

use docmap_config::SidebarSection;

/// Normalize a request path or internal link.
///
/// Drops any `?query` or `#fragment` and ensures a leading slash.
///
/// Examples:
/// - `""` -> `"/"`
/// - `"docker/setup"` -> `"/docker/setup"`
/// - `"/docker/#compose"` -> `"/docker/"`
pub(crate) fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Comparison key for a prefix or path: normalized, trailing slashes removed.
///
/// The root prefix `/` becomes the empty key.
pub(crate) fn prefix_key(path: &str) -> String {
    normalize_path(path).trim_end_matches('/').to_owned()
}

/// True if `prefix` covers `path` on a segment boundary.
pub(crate) fn prefix_covers(prefix: &str, path: &str) -> bool {
    let prefix = prefix_key(prefix);
    let path = prefix_key(path);
    prefix.is_empty()
        || path == prefix
        || path
            .strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Prefix key to section index map.
#[derive(Debug, Default)]
pub(crate) struct PrefixIndex {
    keys: HashMap<String, usize>,
}

/// A prefix declared more than once (after normalization).
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DuplicatePrefix {
    /// Index of the section that first declared the prefix.
    pub first: usize,
    /// Index of the repeated declaration.
    pub duplicate: usize,
}

impl PrefixIndex {
    /// Index sections by prefix key.
    ///
    /// The first declaration of a key wins; later declarations of the same
    /// key are returned as duplicates in declaration order.
    pub(crate) fn build(sections: &[SidebarSection]) -> (Self, Vec<DuplicatePrefix>) {
        let mut keys = HashMap::with_capacity(sections.len());
        let mut duplicates = Vec::new();

        for (idx, section) in sections.iter().enumerate() {
            let key = prefix_key(&section.prefix);
            if let Some(&first) = keys.get(&key) {
                duplicates.push(DuplicatePrefix {
                    first,
                    duplicate: idx,
                });
            } else {
                keys.insert(key, idx);
            }
        }

        (Self { keys }, duplicates)
    }

    /// Find the section with the longest prefix covering `path`.
    ///
    /// Walks up the path one segment at a time, so the deepest registered
    /// prefix is found first.
    pub(crate) fn lookup(&self, path: &str) -> Option<usize> {
        let key = prefix_key(path);
        let mut current = key.as_str();
        loop {
            if let Some(&idx) = self.keys.get(current) {
                return Some(idx);
            }
            let (parent, _) = current.rsplit_once('/')?;
            current = parent;
        }
    }

    /// Number of distinct prefixes.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(prefixes: &[&str]) -> Vec<SidebarSection> {
        prefixes
            .iter()
            .map(|prefix| SidebarSection {
                prefix: (*prefix).to_owned(),
                groups: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("docker/setup"), "/docker/setup");
        assert_eq!(normalize_path("/docker/#compose"), "/docker/");
        assert_eq!(normalize_path("/search?q=unocss"), "/search");
    }

    #[test]
    fn test_prefix_key() {
        assert_eq!(prefix_key("/"), "");
        assert_eq!(prefix_key("/docker/"), "/docker");
        assert_eq!(prefix_key("/docker"), "/docker");
        assert_eq!(prefix_key("docker/"), "/docker");
    }

    #[test]
    fn test_prefix_covers() {
        assert!(prefix_covers("/react/", "/react/hooks/use-state"));
        assert!(prefix_covers("/react/", "/react"));
        assert!(prefix_covers("/react", "/react/"));
        assert!(prefix_covers("/", "/anything"));
        assert!(!prefix_covers("/react/", "/reactive"));
        assert!(!prefix_covers("/react/hooks/", "/react/"));
    }

    #[test]
    fn test_lookup_longest_prefix_wins() {
        let (index, duplicates) = PrefixIndex::build(&sections(&["/react/", "/react/hooks/"]));
        assert!(duplicates.is_empty());

        assert_eq!(index.lookup("/react/hooks/use-state"), Some(1));
        assert_eq!(index.lookup("/react/hooks/"), Some(1));
        assert_eq!(index.lookup("/react/jsx"), Some(0));
        assert_eq!(index.lookup("/react"), Some(0));
    }

    #[test]
    fn test_lookup_independent_of_declaration_order() {
        let (index, _) = PrefixIndex::build(&sections(&["/react/hooks/", "/react/"]));

        assert_eq!(index.lookup("/react/hooks/use-state"), Some(0));
        assert_eq!(index.lookup("/react/jsx"), Some(1));
    }

    #[test]
    fn test_lookup_respects_segment_boundary() {
        let (index, _) = PrefixIndex::build(&sections(&["/react/"]));

        assert_eq!(index.lookup("/reactive/intro"), None);
    }

    #[test]
    fn test_lookup_root_prefix_is_fallback() {
        let (index, _) = PrefixIndex::build(&sections(&["/", "/docker/"]));

        assert_eq!(index.lookup("/docker/docker-compose"), Some(1));
        assert_eq!(index.lookup("/vercel/"), Some(0));
        assert_eq!(index.lookup(""), Some(0));
    }

    #[test]
    fn test_lookup_no_match() {
        let (index, _) = PrefixIndex::build(&sections(&["/docker/", "/unocss/"]));

        assert_eq!(index.lookup("/missing/"), None);
        assert_eq!(index.lookup("/"), None);
    }

    #[test]
    fn test_lookup_ignores_query_and_fragment() {
        let (index, _) = PrefixIndex::build(&sections(&["/unocss/"]));

        assert_eq!(index.lookup("/unocss/presets#attributify"), Some(0));
        assert_eq!(index.lookup("/unocss?tab=1"), Some(0));
    }

    #[test]
    fn test_build_reports_duplicates() {
        let (index, duplicates) =
            PrefixIndex::build(&sections(&["/docker/", "/unocss/", "/docker", "/docker/"]));

        assert_eq!(index.len(), 2);
        assert_eq!(
            duplicates,
            vec![
                DuplicatePrefix {
                    first: 0,
                    duplicate: 2
                },
                DuplicatePrefix {
                    first: 0,
                    duplicate: 3
                },
            ]
        );
        assert_eq!(index.lookup("/docker/setup"), Some(0));
    }
}
