//! Macro listing command.

use crate::output;
use crate::site_config::SiteConfig;

pub(crate) fn handle_macros_command(config: &SiteConfig) {
    output::header("Available macros:");
    output::blank();
    output::item("source_file(filepath, title?)");
    output::dim("    Link to a file in the plugin source repository.");
    output::item("moodle_nav_path(items?)");
    output::dim("    Styled Moodle navigation path label.");
    output::blank();
    if let Some(name) = &config.site_name {
        output::label("site", name);
    }
    match &config.repo_url {
        Some(url) => output::label("repo-url", url),
        None => output::warning("No repo-url configured; source_file needs one."),
    }
}
