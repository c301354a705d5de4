//! Macro expansion engine for docs pages.
//!
//! Wraps a Tera environment with the documentation macros registered and
//! renders page sources one-off. Rendering takes `&self` and shares no
//! mutable state, so parallel page rendering is safe.

use tera::{Context, Tera};

use crate::functions::register_functions;

/// Tera environment with the documentation macros registered.
#[derive(Debug, Clone)]
pub struct MacroEngine {
    tera: Tera,
}

impl MacroEngine {
    /// Create an engine with `source_file` bound to the given repository URL.
    pub fn new(repo_url: &str) -> Self {
        let mut tera = Tera::default();
        register_functions(&mut tera, repo_url);
        Self { tera }
    }

    /// Render a page body, expanding any macro calls it contains.
    ///
    /// `name` identifies the page in error messages. Each call is evaluated
    /// fresh; nothing is cached between pages.
    pub fn render_page(&self, name: &str, content: &str) -> Result<String, EngineError> {
        // Use a cloned Tera instance so one-off page templates don't accumulate
        // on the shared engine
        let mut inline = self.tera.clone();
        inline
            .add_raw_template(name, content)
            .map_err(|e| EngineError::Render {
                template: name.to_string(),
                source: e,
            })?;
        inline
            .render(name, &Context::new())
            .map_err(|e| EngineError::Render {
                template: name.to_string(),
                source: e,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}
