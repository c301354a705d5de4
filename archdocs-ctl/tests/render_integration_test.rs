//! Integration tests for the page rendering pipeline.
//!
//! Creates docs pages and site configs in temp directories and drives the
//! compiled binary end to end: config discovery, macro expansion, file output.
//!
//! Self-contained — no dependency on a real docs checkout being on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the compiled archdocs-ctl binary.
fn archdocs_ctl_bin() -> PathBuf {
    // In integration tests, CARGO_BIN_EXE_<name> gives the path to the binary
    PathBuf::from(env!("CARGO_BIN_EXE_archdocs-ctl"))
}

/// Run archdocs-ctl with the given args from a working directory.
///
/// HOME is pointed at the working directory so a user-global
/// ~/.config/archdocs.toml on the host can't leak into config discovery.
fn run_archdocs_ctl(work_dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(archdocs_ctl_bin())
        .args(args)
        .current_dir(work_dir)
        .env("HOME", work_dir)
        .output()
        .expect("Failed to execute archdocs-ctl")
}

/// Create an archdocs.toml in the given directory.
fn write_site_config(dir: &Path, repo_url: &str) {
    fs::write(
        dir.join("archdocs.toml"),
        format!("repo-url = \"{repo_url}\"\n"),
    )
    .unwrap();
}

// ==========================================================================
// Render Tests
// ==========================================================================

#[test]
fn test_render_expands_source_file_macro() {
    let temp = TempDir::new().unwrap();
    write_site_config(temp.path(), "https://example.com/repo/");
    fs::write(
        temp.path().join("page.md"),
        "See {{ source_file(filepath=\"classes/x.php\") }} for details.\n",
    )
    .unwrap();

    let output = run_archdocs_ctl(temp.path(), &["render", "page.md"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("href=\"https://example.com/repo/blob/master/classes/x.php\""));
    assert!(stdout.contains("<code>classes/x.php</code>"));
    assert!(stdout.contains("target=\"_blank\""));
}

#[test]
fn test_render_expands_nav_path_macro() {
    let temp = TempDir::new().unwrap();
    write_site_config(temp.path(), "https://example.com/repo/");
    fs::write(
        temp.path().join("page.md"),
        "Go to {{ moodle_nav_path(items=[\"Site administration\", \"Plugins\", \"Archiving\"]) }}.\n",
    )
    .unwrap();

    let output = run_archdocs_ctl(temp.path(), &["render", "page.md"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Site administration / Plugins / Archiving"));
    assert!(stdout.contains(":simple-moodle:"));
}

#[test]
fn test_render_writes_output_file() {
    let temp = TempDir::new().unwrap();
    write_site_config(temp.path(), "https://example.com/repo");
    fs::write(
        temp.path().join("page.md"),
        "{{ source_file(filepath=\"lib.php\", title=\"Library\") }}\n",
    )
    .unwrap();

    let output = run_archdocs_ctl(
        temp.path(),
        &["render", "page.md", "--output", "site/page.md"],
    );
    assert!(output.status.success());

    let rendered = fs::read_to_string(temp.path().join("site").join("page.md")).unwrap();
    assert!(rendered.contains("<code>Library</code>"));
    assert!(rendered.contains("https://example.com/repo/blob/master/lib.php"));
}

#[test]
fn test_render_repo_url_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    write_site_config(temp.path(), "https://config.example/repo");
    fs::write(
        temp.path().join("page.md"),
        "{{ source_file(filepath=\"lib.php\") }}\n",
    )
    .unwrap();

    let output = run_archdocs_ctl(
        temp.path(),
        &[
            "render",
            "page.md",
            "--repo-url",
            "https://flag.example/repo",
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://flag.example/repo/blob/master/lib.php"));
    assert!(!stdout.contains("config.example"));
}

#[test]
fn test_render_without_repo_url_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("page.md"),
        "{{ source_file(filepath=\"lib.php\") }}\n",
    )
    .unwrap();

    let output = run_archdocs_ctl(temp.path(), &["render", "page.md"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("repo-url"));
}

#[test]
fn test_render_missing_page_fails() {
    let temp = TempDir::new().unwrap();
    write_site_config(temp.path(), "https://example.com/repo");

    let output = run_archdocs_ctl(temp.path(), &["render", "absent.md"]);
    assert!(!output.status.success());
}

#[test]
fn test_render_with_explicit_config_flag() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom-config.toml");
    fs::write(
        &config_path,
        "repo-url = \"https://custom.example/repo\"\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("page.md"),
        "{{ source_file(filepath=\"lib.php\") }}\n",
    )
    .unwrap();

    let output = run_archdocs_ctl(
        temp.path(),
        &["render", "page.md", "--config", "custom-config.toml"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://custom.example/repo/blob/master/lib.php"));
}

// ==========================================================================
// Macro Listing Tests
// ==========================================================================

#[test]
fn test_macros_lists_both_macros() {
    let temp = TempDir::new().unwrap();
    write_site_config(temp.path(), "https://example.com/repo");

    let output = run_archdocs_ctl(temp.path(), &["macros"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("source_file"));
    assert!(stdout.contains("moodle_nav_path"));
    assert!(stdout.contains("https://example.com/repo"));
}

#[test]
fn test_macros_warns_without_repo_url() {
    let temp = TempDir::new().unwrap();

    let output = run_archdocs_ctl(temp.path(), &["macros"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No repo-url configured"));
}
