//! fragroute - check and replay fragment routing for a rendered site.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use fragroute::RouterConfig;
use fragroute::logger::set_verbose;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry } => cli::init::new_config(&cli.config, *dry),
        Commands::Check { page, strict } => {
            let config = load_config(&cli)?;
            cli::check::check_page(page, &config, *strict)
        }
        Commands::Route { args } => {
            let config = load_config(&cli)?;
            cli::route::route_page(args, &config)
        }
    }
}

/// Load the config; `[log] verbose` turns on verbose output too.
fn load_config(cli: &Cli) -> Result<RouterConfig> {
    let config = cli::common::load_config(&cli.config)?;
    set_verbose(cli.verbose || config.log.verbose);
    Ok(config)
}
