//! Conversion between URL routes and markdown source paths.
//!
//! Routes carry a leading slash; directory routes end in `/` and map to the
//! directory's `index.md`. Source paths are relative to the docs root.

use crate::prefix::normalize_path;

/// Convert a relative source path to its URL route.
///
/// Examples:
/// - `"index.md"` -> `"/"`
/// - `"guide.md"` -> `"/guide"`
/// - `"docker/index.md"` -> `"/docker/"`
/// - `"docker/getting-started.md"` -> `"/docker/getting-started"`
#[must_use]
pub fn route_for_source_path(source_path: &str) -> String {
    let path = source_path.trim_start_matches('/');
    let without_ext = path.strip_suffix(".md").unwrap_or(path);

    if without_ext == "index" {
        return "/".to_owned();
    }
    if let Some(dir) = without_ext.strip_suffix("/index") {
        return format!("/{dir}/");
    }

    format!("/{without_ext}")
}

/// Convert a URL route to its relative source path.
///
/// Examples:
/// - `"/"` -> `"index.md"`
/// - `"/docker/"` -> `"docker/index.md"`
/// - `"/docker/getting-started"` -> `"docker/getting-started.md"`
/// - `"/docker/getting-started.html"` -> `"docker/getting-started.md"`
#[must_use]
pub fn source_path_for_route(route: &str) -> String {
    let route = normalize_path(route);
    let path = &route[1..];

    if path.is_empty() {
        return "index.md".to_owned();
    }
    if path.ends_with('/') {
        return format!("{path}index.md");
    }

    let stem = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);
    format!("{stem}.md")
}

/// Key identifying the page a link or route points at.
///
/// Ignores a trailing slash, a trailing `index` segment and `.html`/`.md`
/// suffixes, so `/unocss/`, `/unocss/index.html` and `/unocss` compare equal.
pub(crate) fn page_key(link: &str) -> String {
    let path = normalize_path(link);
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(&path);
    let path = path.trim_end_matches('/');
    let path = if path == "/index" {
        ""
    } else {
        path.strip_suffix("/index").unwrap_or(path)
    };
    path.to_owned()
}
