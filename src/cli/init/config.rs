//! Configuration file generation.
//!
//! Creates fragroute.toml with every section at its default.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use fragroute::RouterConfig;

/// Generate fragroute.toml content with a header comment
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# fragroute configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Routes are discovered from `.fragment[id]` elements unless\n");
    out.push_str("# declared with [[routes]] id = \"...\" label = \"...\".\n\n");
    out.push_str(&RouterConfig::default().to_toml()?);

    Ok(out)
}

/// Write the default configuration to `path`, never overwriting.
pub fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or pass a different path with `-C`.",
            path.display()
        );
    }

    fs::write(path, generate_config_template()?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
