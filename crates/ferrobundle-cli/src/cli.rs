//! CLI argument definitions for Ferrobundle.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `load` | Fetch a bundle from the server and render it |
//! | `render` | Render a bundle JSON document without any network call |
//!
//! # Global Options
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--base-url` | `FERROBUNDLE_BASE_URL` | `http://localhost:5000` |
//! | `--timeout-ms` | `FERROBUNDLE_TIMEOUT_MS` | none |
//! | `--log-level` | `FERROBUNDLE_LOG` | `info` |
//!
//! # Examples
//!
//! ```bash
//! # Print the fragment for a bundle
//! ferrobundle load efficient_banks
//!
//! # Render into the bundle-content element of a page
//! ferrobundle load efficient_banks --page site/index.html
//!
//! # Render a saved payload
//! ferrobundle render --input bundle.json --out fragment.html
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ferrobundle_core::{DEFAULT_BASE_URL, DEFAULT_REGION_ID};

/// Fetch stock bundles and render them as HTML cards.
#[derive(Debug, Parser)]
#[command(name = "ferrobundle", author, version, about)]
pub struct Cli {
    /// Base URL of the bundle server.
    #[arg(long, global = true, env = "FERROBUNDLE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds. Without it a request waits until the
    /// connection resolves or fails.
    #[arg(long, global = true, env = "FERROBUNDLE_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Log filter directive (e.g. `debug`, `ferrobundle_core=trace`).
    #[arg(long, global = true, env = "FERROBUNDLE_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a bundle by id and render it.
    ///
    /// Exit code 3 when the bundle was not rendered (not found or failed).
    ///
    /// # Examples
    ///
    ///   ferrobundle load efficient_banks
    ///   ferrobundle load 7 --page index.html --region-id bundle-content
    Load(LoadArgs),

    /// Render a bundle JSON document from a file or stdin.
    Render(RenderArgs),
}

/// Arguments for the `load` command.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Bundle identifier (string or number).
    pub bundle_id: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `render` command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Bundle JSON file; reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Where rendered markup goes.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// HTML page whose region element receives the markup.
    #[arg(long, conflicts_with = "out")]
    pub page: Option<PathBuf>,

    /// Id of the region element inside `--page`.
    #[arg(long, default_value = DEFAULT_REGION_ID)]
    pub region_id: String,

    /// Write the fragment to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
