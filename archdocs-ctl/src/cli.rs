//! CLI argument definitions for `archdocs-ctl`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output;

/// Top-level CLI for the docs macro tooling.
#[derive(Debug, Parser)]
#[command(name = "archdocs-ctl")]
#[command(version, about = "Documentation macro tooling for the archiving plugin docs")]
#[command(styles = output::clap_styles())]
pub(crate) struct Cli {
    /// Site config file (default: ./archdocs.toml, then ~/.config/archdocs.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Expand documentation macros in a page source.
    Render {
        /// Path to the page source (Markdown with macro calls).
        file: PathBuf,

        /// Write the rendered page here instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Repository base URL, overriding the site config.
        #[arg(long, value_name = "URL")]
        repo_url: Option<String>,
    },

    /// List the macros available to docs pages.
    Macros,
}
