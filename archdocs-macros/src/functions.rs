//! The documentation macros: `source_file` and `moodle_nav_path`.
//!
//! Each macro exists twice: as a pure string builder, and as a [`tera::Function`]
//! wrapper that docs pages call by name. `source_file` carries the repository
//! base URL injected at registration time; `moodle_nav_path` is stateless.

use std::collections::HashMap;

use tera::{Function, Result, Tera, Value};

/// Fixed path segment between the repository base URL and a file path.
const BLOB_PATH: &str = "/blob/master/";

/// Separator between navigation path components.
const NAV_SEPARATOR: &str = " / ";

/// Build an HTML link to `filepath` inside the repository at `repo_url`.
///
/// `repo_url` is stripped of edge slashes and `filepath` of leading slashes
/// before concatenation. The link text is `title` when given and non-empty,
/// otherwise `filepath`. Inputs are not escaped; docs authors control them.
pub fn source_file_link(repo_url: &str, filepath: &str, title: Option<&str>) -> String {
    let text = match title {
        Some(t) if !t.is_empty() => t,
        _ => filepath,
    };
    let url = format!(
        "{}{}{}",
        repo_url.trim_matches('/'),
        BLOB_PATH,
        filepath.trim_start_matches('/')
    );
    format!(
        "<a href=\"{url}\" target=\"_blank\"><code>{text}</code><sup>:material-code-block-tags:</sup></a>"
    )
}

/// Render navigation path components as a styled Moodle breadcrumb label.
///
/// Components are joined with `" / "` in the given order; no components
/// yields an empty path inside the label.
pub fn nav_path_label<S: AsRef<str>>(items: &[S]) -> String {
    let navpath = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NAV_SEPARATOR);
    format!(
        "<span style=\"padding: 2px 6px; border-radius: 8px; background-color: #f9f9f9; border: 1px solid #cccccc;\">:simple-moodle: <span style=\"font-size:80%;\">{navpath}</span></span>"
    )
}

/// Tera function for `{{ source_file(filepath="classes/x.php", title="...") }}`.
///
/// `title` is optional and falls back to `filepath`. The repository base URL
/// is held by the function itself rather than read from ambient state per call.
#[derive(Debug)]
pub struct SourceFile {
    repo_url: String,
}

impl SourceFile {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }
}

impl Function for SourceFile {
    fn call(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let filepath = args
            .get("filepath")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("source_file requires a string `filepath` argument"))?;
        let title = match args.get("title") {
            None => None,
            Some(v) => Some(
                v.as_str()
                    .ok_or_else(|| tera::Error::msg("source_file `title` must be a string"))?,
            ),
        };
        Ok(Value::String(source_file_link(
            &self.repo_url,
            filepath,
            title,
        )))
    }

    // Output is HTML meant to be embedded verbatim
    fn is_safe(&self) -> bool {
        true
    }
}

/// Tera function for `{{ moodle_nav_path(items=["Site administration", "Plugins"]) }}`.
///
/// Tera functions take named arguments, so the path components are passed as
/// one array; omitting `items` renders an empty path.
#[derive(Debug)]
pub struct MoodleNavPath;

impl Function for MoodleNavPath {
    fn call(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let items: Vec<&str> = match args.get("items") {
            None => Vec::new(),
            Some(Value::Array(values)) => values
                .iter()
                .map(|v| {
                    v.as_str().ok_or_else(|| {
                        tera::Error::msg("moodle_nav_path `items` must contain only strings")
                    })
                })
                .collect::<Result<_>>()?,
            Some(_) => {
                return Err(tera::Error::msg(
                    "moodle_nav_path `items` must be an array of strings",
                ))
            }
        };
        Ok(Value::String(nav_path_label(&items)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Register both documentation macros by name on the given Tera environment.
///
/// This is the single registration step the docs build environment performs
/// at startup. `repo_url` is the configured repository base URL, injected
/// into `source_file` here instead of read from build config at call time.
pub fn register_functions(tera: &mut Tera, repo_url: &str) {
    tera.register_function("source_file", SourceFile::new(repo_url));
    tera.register_function("moodle_nav_path", MoodleNavPath);
}
