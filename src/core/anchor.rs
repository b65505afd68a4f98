//! Anchor cascade parsing for hash routing.
//!
//! ```text
//! #about        -> root "about"
//! #about/team   -> root "about", scroll to "team"
//! #a/b/c        -> too deep
//! #a#b          -> stray '#'
//! ```

/// A parsed `root[/sub]` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPath<'a> {
    pub root: &'a str,
    pub sub: Option<&'a str>,
}

/// Anchors the cascade grammar does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedAnchor<'a> {
    /// Nothing after the `#`.
    Empty,
    /// The anchor itself contains another `#`.
    StrayHash,
    /// More than two segments; `root` is the first one.
    TooDeep { root: &'a str },
}

/// Parse an anchor (without its leading `#`).
pub fn parse_anchor(anchor: &str) -> Result<AnchorPath<'_>, MalformedAnchor<'_>> {
    if anchor.is_empty() {
        return Err(MalformedAnchor::Empty);
    }
    if anchor.contains('#') {
        return Err(MalformedAnchor::StrayHash);
    }

    let mut segments = anchor.split('/');
    let root = segments.next().unwrap_or_default();
    match (segments.next(), segments.next()) {
        (None, _) => Ok(AnchorPath { root, sub: None }),
        (Some(sub), None) => Ok(AnchorPath {
            root,
            sub: Some(sub),
        }),
        (Some(_), Some(_)) => Err(MalformedAnchor::TooDeep { root }),
    }
}

/// Anchor part of a full href: everything after the first `#`.
///
/// Returns `None` when the href has no `#` at all.
pub fn anchor_of(href: &str) -> Option<&str> {
    href.split_once('#').map(|(_, anchor)| anchor)
}
