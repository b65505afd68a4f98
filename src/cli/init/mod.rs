//! Config initialization.
//!
//! Writes a default `fragroute.toml` next to the site.

mod config;

use anyhow::Result;
use fragroute::log;
use std::path::Path;

/// Write the default config to `path` (relative to the current directory).
///
/// If `dry_run` is true, only prints the config to stdout.
pub fn new_config(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template()?);
        return Ok(());
    }

    config::write_config(path)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
