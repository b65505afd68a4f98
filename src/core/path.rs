//! Route keys and same-origin link paths.
//!
//! A route key is the fragment id (`about`). On the wire it appears as a
//! single-segment path (`/about`, optionally `/about/`) in path mode, or as
//! an anchor (`#about`) in hash mode.

use regex::Regex;
use std::sync::LazyLock;

/// Pathnames the router takes over from the browser: one segment, optional trailing slash.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/[^/]+/?$").unwrap());

/// Check if a link pathname should be routed in-page.
///
/// `/about` and `/about/` match; `/`, `/blog/post` and relative paths don't.
#[inline]
pub fn is_routable_link(pathname: &str) -> bool {
    LINK_PATTERN.is_match(pathname)
}

/// Extract the route key from a location pathname.
///
/// Strips one leading and one trailing slash: `/about/` -> `about`.
pub fn route_key(pathname: &str) -> &str {
    let key = pathname.strip_prefix('/').unwrap_or(pathname);
    key.strip_suffix('/').unwrap_or(key)
}

/// History URL for a route key in path mode.
#[inline]
pub fn route_url(key: &str) -> String {
    format!("/{key}")
}

/// Check if a string can serve as a route key.
pub fn is_route_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '/' | '#' | '?') || c.is_whitespace())
}

/// Normalize a location hash: strip the leading `#`, empty means absent.
///
/// `"#team"` -> `Some("team")`, `"#"` and `""` -> `None`.
pub fn normalize_hash(hash: &str) -> Option<&str> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    (!hash.is_empty()).then_some(hash)
}
