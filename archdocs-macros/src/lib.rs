//! Documentation macros for the Moodle activity archiving plugin docs site.
//!
//! Docs pages call two macros while being rendered: `source_file` links to a
//! file in the plugin's hosted source repository, and `moodle_nav_path`
//! renders a styled label for a Moodle menu path. Both are pure string
//! transformations exposed to the page templates as Tera functions.
//!
//! This crate is consumed by `archdocs-ctl` (CLI) and by the docs build
//! pipeline, which registers the macros on its own Tera environment.
//!
//! # Modules
//!
//! - [`functions`] — the `source_file` and `moodle_nav_path` macros and their
//!   explicit Tera registration
//! - [`engine`] — Tera wrapper that expands macros in page sources

pub mod engine;
pub mod functions;
