//! `[nav]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! container = "li"   # links must sit directly inside this element; "" = anywhere
//! ```

use serde::{Deserialize, Serialize};

/// Where navigation links are looked up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Tag name of the direct parent of every navigation link.
    pub container: String,
}

impl NavConfig {
    /// Parent tag filter, `None` when links may appear anywhere.
    pub fn container(&self) -> Option<&str> {
        let tag = self.container.trim();
        (!tag.is_empty()).then_some(tag)
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            container: "li".into(),
        }
    }
}
