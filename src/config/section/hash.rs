//! `[hash]` section configuration, used when `router.mode = "hash"`.
//!
//! # Example
//!
//! ```toml
//! [hash]
//! cascade = "default"   # default | root
//! ```
//!
//! Anchors may cascade into a section: `#about/team` shows `about` and
//! scrolls the `team` element into view. `cascade` decides what happens
//! when the second segment does not resolve inside the root fragment, or
//! when the anchor has more than two segments.

use serde::{Deserialize, Serialize};

/// Fallback for anchor cascades that cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeFallback {
    /// Navigate to the default route.
    #[default]
    Default,

    /// Stay on the root anchor when it is known, without scrolling.
    Root,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    pub cascade: CascadeFallback,
}
