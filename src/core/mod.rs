//! Core types - pure string-level routing rules shared across the codebase.

mod anchor;
mod path;

pub use anchor::{AnchorPath, MalformedAnchor, anchor_of, parse_anchor};
pub use path::{is_routable_link, is_route_key, normalize_hash, route_key, route_url};
