//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// fragroute fragment router CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "fragroute.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default fragroute.toml
    #[command(visible_alias = "i")]
    Init {
        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Check that a rendered page has everything the router needs
    #[command(visible_alias = "c")]
    Check {
        /// Rendered HTML page
        #[arg(value_hint = clap::ValueHint::FilePath)]
        page: PathBuf,

        /// Treat warnings as errors
        #[arg(long, short = 'W')]
        strict: bool,
    },

    /// Replay navigation against a rendered page
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
}

/// Route command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// Rendered HTML page
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub page: PathBuf,

    /// URL the page is opened at
    #[arg(short, long, default_value = "http://localhost/", value_hint = clap::ValueHint::Url)]
    pub url: String,

    /// Steps to replay: `click:<href>`, `hash:<anchor>`, `back`, `forward`
    #[arg(value_name = "STEP")]
    pub steps: Vec<String>,

    /// Output JSON instead of a readable log
    #[arg(short, long)]
    pub json: bool,
}
