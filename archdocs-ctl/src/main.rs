//! archdocs-ctl: documentation macro tooling for the archiving plugin docs.
//!
//! Expands the documentation macros (`source_file`, `moodle_nav_path`) in
//! page sources, using the repository URL from the site config.

mod cli;
mod commands;
mod error;
mod output;
mod site_config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::error::CtlError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        output::error(&err);
        if matches!(err, CtlError::MissingRepoUrl) {
            output::hint(
                "Create an archdocs.toml with repo-url = \"https://github.com/...\" next to your docs, or pass --repo-url.",
            );
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CtlError> {
    let config = site_config::load_site_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            file,
            output,
            repo_url,
        } => commands::handle_render_command(&config, &file, output.as_deref(), repo_url.as_deref()),
        Commands::Macros => {
            commands::handle_macros_command(&config);
            Ok(())
        }
    }
}
