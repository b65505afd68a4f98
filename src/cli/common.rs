//! Common utilities shared across CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use fragroute::config::{RouterConfig, find_config_file};
use fragroute::debug;
use fragroute::dom::MemoryPage;

/// Load the config file named by `-C`, searching upward from the current
/// directory. Without one, defaults are used.
pub fn load_config(config: &Path) -> Result<RouterConfig> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    match find_config_file(&cwd, config) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            Ok(RouterConfig::load(&path)?)
        }
        None => {
            debug!("config"; "no {} found, using defaults", config.display());
            Ok(RouterConfig::default())
        }
    }
}

/// Read and parse a rendered HTML page.
pub fn read_page(path: &Path) -> Result<MemoryPage> {
    let html =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    MemoryPage::from_html(&html).with_context(|| format!("failed to parse {}", path.display()))
}
