//! Command handlers for the archdocs CLI.
//!
//! Each module handles one subcommand, delegating to `archdocs-macros` for
//! rendering.

pub(crate) mod macros;
pub(crate) mod render;

pub(crate) use macros::handle_macros_command;
pub(crate) use render::handle_render_command;
