//! `[title]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [title]
//! prefix = "Philip Trauner"
//! separator = " - "
//! ```
//!
//! Produces `Philip Trauner - About` for the `about` route. With an empty
//! prefix the route label is used alone.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Document title settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Fixed part of the title, usually the site owner's name.
    pub prefix: String,

    /// Inserted between prefix and route label.
    pub separator: String,
}

pub struct TitleFields {
    pub prefix: FieldPath,
    pub separator: FieldPath,
}

impl TitleConfig {
    pub const FIELDS: TitleFields = TitleFields {
        prefix: FieldPath::new("title.prefix"),
        separator: FieldPath::new("title.separator"),
    };

    /// Document title for a route label.
    pub fn format(&self, label: &str) -> String {
        if self.prefix.is_empty() {
            label.to_string()
        } else {
            format!("{}{}{}", self.prefix, self.separator, label)
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.prefix.is_empty() && self.separator.is_empty() {
            diag.warn(
                Self::FIELDS.separator,
                "empty separator glues the prefix to the route label",
            );
        }
    }
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            prefix: "Philip Trauner".into(),
            separator: " - ".into(),
        }
    }
}
