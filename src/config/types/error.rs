//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    // rendered in full by its own Display
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// Whether a diagnostic fails the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One problem, pointing at a `fragroute.toml` key.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    /// `` `router.default` must not be empty (try: ...) ``
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)?;
        match &self.hint {
            Some(hint) => write!(f, " {}", format_args!("(try: {hint})").dimmed()),
            None => Ok(()),
        }
    }
}

/// Everything validation found, in the order it was found.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    entries: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.entries.push(ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    /// Log each warning; errors are reported through [`ConfigError`].
    pub fn print_warnings(&self) {
        for warning in self.warnings() {
            crate::log!("warning"; "{}", warning);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Number of errors (warnings are not counted).
    pub fn len(&self) -> usize {
        self.errors().count()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    /// `Err(self)` when any error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "invalid fragroute.toml".red().bold())?;
        for error in self.errors() {
            write!(f, "\n  {} {}", "→".red(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_and_warnings_are_kept_apart() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("title.separator"), "empty");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().count(), 1);

        diag.error_with_hint(
            FieldPath::new("router.default"),
            "must not be empty",
            "set it to the id of your landing fragment",
        );
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        let first = err.errors().next().unwrap();
        assert_eq!(first.field.as_str(), "router.default");
        assert!(first.hint.is_some());
    }

    #[test]
    fn test_display_lists_only_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("classes.hidden"), "equals the fragment class");
        diag.warn(FieldPath::new("title.separator"), "empty");

        let text = ConfigError::Diagnostics(diag).to_string();
        assert!(text.contains("invalid fragroute.toml"));
        assert!(text.contains("`classes.hidden`"));
        assert!(text.contains("equals the fragment class"));
        assert!(!text.contains("title.separator"));
    }
}
