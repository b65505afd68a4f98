//! `[router]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [router]
//! mode = "path"       # path | hash
//! default = "about"   # route shown for unknown paths
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::is_route_key;

/// Routing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// `/about` style URLs driven by the History API.
    #[default]
    Path,

    /// `#about` style URLs driven by `hashchange`, with `#root/sub` cascades.
    Hash,
}

impl RoutingMode {
    /// Href a navigation link must carry to point at `key`.
    pub fn link_href(self, key: &str) -> String {
        match self {
            Self::Path => format!("/{key}"),
            Self::Hash => format!("#{key}"),
        }
    }
}

/// Core routing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSectionConfig {
    /// Path or hash routing.
    pub mode: RoutingMode,

    /// Route key used when the requested one is unknown.
    pub default: String,
}

pub struct RouterSectionFields {
    pub mode: FieldPath,
    pub default: FieldPath,
}

impl RouterSectionConfig {
    pub const FIELDS: RouterSectionFields = RouterSectionFields {
        mode: FieldPath::new("router.mode"),
        default: FieldPath::new("router.default"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.default,
                "default route must not be empty",
                "set it to the id of the fragment shown on first visit, e.g. \"about\"",
            );
        } else if !is_route_key(&self.default) {
            diag.error(
                Self::FIELDS.default,
                format!(
                    "`{}` is not a single path segment (no `/`, `#`, `?` or whitespace)",
                    self.default
                ),
            );
        }
    }
}

impl Default for RouterSectionConfig {
    fn default() -> Self {
        Self {
            mode: RoutingMode::Path,
            default: "about".into(),
        }
    }
}
