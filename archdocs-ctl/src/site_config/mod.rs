//! Site configuration for the docs build (`archdocs.toml`).
//!
//! Carries the ambient values the macros need, most importantly the
//! repository base URL that `source_file` links against.

pub(crate) mod loader;

pub(crate) use loader::load_site_config;

use serde::Deserialize;

/// Docs site configuration, parsed from `archdocs.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct SiteConfig {
    /// Base URL of the hosted source repository (e.g. a GitHub project URL).
    pub repo_url: Option<String>,

    /// Display name of the docs site.
    pub site_name: Option<String>,
}
