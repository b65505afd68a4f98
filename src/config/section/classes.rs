//! `[classes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [classes]
//! fragment = "fragment"        # marks routable content blocks
//! hidden = "hidden"            # added to every fragment but the current one
//! selected = "header-selected" # set on the current navigation link
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// CSS class contract between the router and the stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub fragment: String,
    pub hidden: String,
    pub selected: String,
}

pub struct ClassFields {
    pub fragment: FieldPath,
    pub hidden: FieldPath,
    pub selected: FieldPath,
}

impl ClassConfig {
    pub const FIELDS: ClassFields = ClassFields {
        fragment: FieldPath::new("classes.fragment"),
        hidden: FieldPath::new("classes.hidden"),
        selected: FieldPath::new("classes.selected"),
    };

    /// Class list of the visible fragment.
    pub fn visible_fragment(&self) -> Vec<&str> {
        vec![self.fragment.as_str()]
    }

    /// Class list of a hidden fragment.
    pub fn hidden_fragment(&self) -> Vec<&str> {
        vec![self.hidden.as_str(), self.fragment.as_str()]
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.fragment, &self.fragment),
            (Self::FIELDS.hidden, &self.hidden),
            (Self::FIELDS.selected, &self.selected),
        ] {
            if value.is_empty() || value.contains(char::is_whitespace) {
                diag.error(field, format!("`{value}` is not a single CSS class name"));
            }
        }
        if self.fragment == self.hidden {
            diag.error_with_hint(
                Self::FIELDS.hidden,
                "hidden class equals the fragment class, nothing would ever be hidden",
                "use a dedicated class such as \"hidden\"",
            );
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            fragment: "fragment".into(),
            hidden: "hidden".into(),
            selected: "header-selected".into(),
        }
    }
}
