//! Page rendering command: expand documentation macros in a page source.

use std::path::Path;

use archdocs_macros::engine::MacroEngine;

use crate::error::CtlError;
use crate::output;
use crate::site_config::SiteConfig;

pub(crate) fn handle_render_command(
    config: &SiteConfig,
    file: &Path,
    output_path: Option<&Path>,
    repo_url_override: Option<&str>,
) -> Result<(), CtlError> {
    // Resolve repository URL: explicit --repo-url > site config
    let repo_url = repo_url_override
        .or(config.repo_url.as_deref())
        .ok_or(CtlError::MissingRepoUrl)?;

    let content = std::fs::read_to_string(file).map_err(|e| CtlError::ReadPage {
        path: file.to_path_buf(),
        source: e,
    })?;

    let engine = MacroEngine::new(repo_url);
    let page_name = file.display().to_string();
    let rendered = engine.render_page(&page_name, &content)?;

    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| CtlError::WriteOutput {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
            }
            std::fs::write(path, &rendered).map_err(|e| CtlError::WriteOutput {
                path: path.to_path_buf(),
                source: e,
            })?;
            output::success(format!("Rendered: {}", path.display()));
        }
        None => {
            print!("{rendered}");
        }
    }

    Ok(())
}
