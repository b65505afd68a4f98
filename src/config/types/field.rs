//! Config field path used to point diagnostics at a TOML key.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path to a `fragroute.toml` key.
///
/// Sections expose their keys through a `FIELDS` constant, so diagnostics
/// never spell key names by hand:
///
/// ```ignore
/// diag.error(RouterSectionConfig::FIELDS.default, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
