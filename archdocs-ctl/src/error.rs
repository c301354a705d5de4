//! Error types for the CLI.

use std::path::PathBuf;

use archdocs_macros::engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read {path}: {source}")]
    ReadPage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no repository URL configured (set repo-url in archdocs.toml or pass --repo-url)")]
    MissingRepoUrl,

    #[error(transparent)]
    Render(#[from] EngineError),
}
