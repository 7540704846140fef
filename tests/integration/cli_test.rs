//! Integration tests for the treescan binary
//!
//! Each test builds a tree under a temporary working directory and runs the
//! binary there, so the default `content` root resolves inside it.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::{tempdir, TempDir};

fn run_treescan(cwd: &Path, args: &[&str]) -> Result<(String, String, bool), String> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treescan"));
    cmd.args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd
        .output()
        .map_err(|e| format!("Failed to run treescan: {}", e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let success = output.status.code() == Some(0);

    Ok((stdout, stderr, success))
}

/// content/a.json, content/b.txt, content/sub/c.json
fn scenario_tree() -> TempDir {
    let cwd = tempdir().unwrap();
    let content = cwd.path().join("content");
    fs::create_dir_all(content.join("sub")).unwrap();
    fs::write(content.join("a.json"), r#"{"x":1}"#).unwrap();
    fs::write(content.join("b.txt"), "plain text").unwrap();
    fs::write(content.join("sub/c.json"), "// comment\n{\"y\":2}").unwrap();
    cwd
}

#[test]
fn test_default_mode_decodes_json_under_content() {
    let cwd = scenario_tree();
    let (stdout, stderr, success) = run_treescan(cwd.path(), &[]).unwrap();

    assert!(success, "scan should exit 0: {}", stderr);
    assert_eq!(
        stdout,
        "content/a.json\n{\"x\":1}\ncontent/sub/c.json\n{\"y\":2}\n"
    );
    assert!(stderr.is_empty(), "No stderr expected: {}", stderr);
}

#[test]
fn test_filter_mode_prints_paths_only() {
    let cwd = scenario_tree();
    let (stdout, _, success) = run_treescan(cwd.path(), &["--mode", "filter"]).unwrap();

    assert!(success);
    assert_eq!(stdout, "content/a.json\ncontent/sub/c.json\n");
}

#[test]
fn test_all_mode_prints_every_entry() {
    let cwd = scenario_tree();
    let (stdout, _, success) = run_treescan(cwd.path(), &["--mode", "all"]).unwrap();

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "content",
            "content/a.json",
            "content/b.txt",
            "content/sub",
            "content/sub/c.json"
        ]
    );
}

#[test]
fn test_missing_root_exits_zero_without_output() {
    let cwd = tempdir().unwrap();

    for mode in ["all", "filter", "decode"] {
        let (stdout, stderr, success) = run_treescan(cwd.path(), &["--mode", mode]).unwrap();
        assert!(success, "mode {} should exit 0", mode);
        assert!(stdout.is_empty(), "mode {} printed: {}", mode, stdout);
        assert!(stderr.is_empty(), "mode {} logged: {}", mode, stderr);
    }
}

#[test]
fn test_empty_root() {
    let cwd = tempdir().unwrap();
    fs::create_dir(cwd.path().join("content")).unwrap();

    let (stdout, _, _) = run_treescan(cwd.path(), &["--mode", "all"]).unwrap();
    assert_eq!(stdout, "content\n");

    let (stdout, _, _) = run_treescan(cwd.path(), &["--mode", "filter"]).unwrap();
    assert!(stdout.is_empty());

    let (stdout, _, _) = run_treescan(cwd.path(), &[]).unwrap();
    assert!(stdout.is_empty());
}

#[test]
fn test_malformed_file_prints_path_and_exits_zero() {
    let cwd = tempdir().unwrap();
    let content = cwd.path().join("content");
    fs::create_dir(&content).unwrap();
    fs::write(content.join("bad.json"), "{ name: invalid }").unwrap();
    fs::write(content.join("good.json"), "[1, 2,]").unwrap();

    let (stdout, stderr, success) = run_treescan(cwd.path(), &[]).unwrap();
    assert!(success);
    assert_eq!(stdout, "content/bad.json\ncontent/good.json\n[1,2]\n");
    assert!(stderr.is_empty(), "failures are silent by default: {}", stderr);
}

#[test]
fn test_report_errors_and_summary_go_to_stderr() {
    let cwd = tempdir().unwrap();
    let content = cwd.path().join("content");
    fs::create_dir(&content).unwrap();
    fs::write(content.join("bad.json"), "{ name: invalid }").unwrap();

    let (stdout, stderr, success) =
        run_treescan(cwd.path(), &["--report-errors", "--summary"]).unwrap();
    assert!(success);
    assert_eq!(stdout, "content/bad.json\n");
    assert!(stderr.contains("bad.json"), "error should be reported: {}", stderr);
    assert!(stderr.contains("1 undecodable"), "summary expected: {}", stderr);
}

#[test]
fn test_explicit_root_and_pretty_output() {
    let cwd = tempdir().unwrap();
    let data = cwd.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("v.json"), r#"{"k": [true]}"#).unwrap();

    let (stdout, _, success) = run_treescan(cwd.path(), &["data", "--pretty"]).unwrap();
    assert!(success);
    assert_eq!(stdout, "data/v.json\n{\n  \"k\": [\n    true\n  ]\n}\n");
}

#[test]
fn test_output_is_idempotent() {
    let cwd = scenario_tree();
    let (first, _, _) = run_treescan(cwd.path(), &[]).unwrap();
    let (second, _, _) = run_treescan(cwd.path(), &[]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_arguments_fail() {
    let cwd = tempdir().unwrap();
    let (_, stderr, success) = run_treescan(cwd.path(), &["--mode", "bogus"]).unwrap();
    assert!(!success);
    assert!(!stderr.is_empty());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_silent() {
    let cwd = scenario_tree();
    std::os::unix::fs::symlink("/nonexistent", cwd.path().join("content/dangling.json"))
        .unwrap();

    let (stdout, stderr, success) = run_treescan(cwd.path(), &[]).unwrap();
    assert!(success, "scan should exit 0: {}", stderr);
    assert_eq!(
        stdout,
        "content/a.json\n{\"x\":1}\ncontent/dangling.json\ncontent/sub/c.json\n{\"y\":2}\n"
    );
    assert!(stderr.is_empty(), "No stderr expected: {}", stderr);

    let (stdout, stderr, success) = run_treescan(cwd.path(), &["--follow-links"]).unwrap();
    assert!(success, "scan should exit 0: {}", stderr);
    assert_eq!(
        stdout,
        "content/a.json\n{\"x\":1}\ncontent/sub/c.json\n{\"y\":2}\n"
    );
    assert!(stderr.is_empty(), "No stderr expected: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_fifo_path_printed_without_value() {
    let cwd = scenario_tree();
    let status = Command::new("mkfifo")
        .arg(cwd.path().join("content/pipe.json"))
        .status()
        .unwrap();
    assert!(status.success());

    let (stdout, stderr, success) = run_treescan(cwd.path(), &[]).unwrap();
    assert!(success, "scan should exit 0: {}", stderr);
    assert_eq!(
        stdout,
        "content/a.json\n{\"x\":1}\ncontent/pipe.json\ncontent/sub/c.json\n{\"y\":2}\n"
    );
}
