//! Router configuration management for `fragroute.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file lookup
//! └── mod.rs         # RouterConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [router]
//! mode = "path"
//! default = "about"
//!
//! [title]
//! prefix = "Philip Trauner"
//!
//! [[routes]]
//! id = "about"
//! label = "About"
//!
//! [[routes]]
//! id = "projects"
//! label = "Projects"
//! ```
//!
//! Every section is optional; an empty file routes every `.fragment[id]`
//! element with `about` as the default.

pub mod section;
pub mod types;
mod util;

pub use section::{
    CascadeFallback, ClassConfig, HashConfig, LogConfig, NavConfig, RouteConfig,
    RouterSectionConfig, RoutingMode, TitleConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};
pub use util::find_config_file;

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "fragroute.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing fragroute.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub router: RouterSectionConfig,

    #[serde(default)]
    pub title: TitleConfig,

    #[serde(default)]
    pub classes: ClassConfig,

    #[serde(default)]
    pub nav: NavConfig,

    #[serde(default)]
    pub hash: HashConfig,

    #[serde(default)]
    pub log: LogConfig,

    /// Declared routes; empty means discover them from the page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteConfig>,
}

impl RouterConfig {
    /// Parse and validate configuration from a TOML string.
    ///
    /// Unknown keys are reported as warnings and otherwise ignored.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Path::new(CONFIG_FILE));
        }
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        config.validate()?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.router.validate(&mut diag);
        self.title.validate(&mut diag);
        self.classes.validate(&mut diag);
        section::validate_routes(&self.routes, &self.router.default, &mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Render as TOML, used by `fragroute init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// ============================================================================
// tests
// ============================================================================
