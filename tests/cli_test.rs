//! CLI integration tests
//!
//! Runs the built binary against canvas files in a temporary directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const VALID: &str = r##"{"edges":[{"id":"e1","fromNode":"1","toNode":"2","color":"3"}],
"nodes":[{"type":"text","id":"1","text":"Hello","x":10,"y":20,"width":100,"height":50,"color":"1"},
{"id":"2","type":"link","x":0,"y":0,"width":10,"height":10,"url":"https://example.com","color":"#00FF00"}]}"##;

fn jsoncanvas(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jsoncanvas"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run jsoncanvas")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_reports_each_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.canvas"), VALID).unwrap();
    fs::write(dir.path().join("bad.canvas"), r#"{"nodes":[{"id":"x","type":"oval"}]}"#).unwrap();

    let ok = jsoncanvas(dir.path(), &["check", "good.canvas"]);
    assert!(ok.status.success());
    assert!(stdout(&ok).contains("good.canvas (2 nodes, 1 edges)"));

    let mixed = jsoncanvas(dir.path(), &["check", "good.canvas", "bad.canvas"]);
    assert!(!mixed.status.success());
    let out = stdout(&mixed);
    assert!(out.contains("bad.canvas [unknown_enum_value]"));
}

#[test]
fn test_check_strict() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dangling.canvas"),
        r#"{"nodes":[],"edges":[{"id":"e1","fromNode":"x","toNode":"y"}]}"#,
    )
    .unwrap();

    assert!(jsoncanvas(dir.path(), &["check", "dangling.canvas"]).status.success());

    let strict = jsoncanvas(dir.path(), &["check", "--strict", "dangling.canvas"]);
    assert!(!strict.status.success());
    assert!(stdout(&strict).contains("2 violation(s)"));
}

#[test]
fn test_fmt_canonical_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("board.canvas"), VALID).unwrap();

    let output = jsoncanvas(dir.path(), &["fmt", "--compact", "board.canvas"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with(
        r#"{"nodes":[{"id":"1","type":"text","x":10,"y":20,"width":100,"height":50,"color":"1","text":"Hello"}"#
    ));

    let write = jsoncanvas(dir.path(), &["fmt", "--write", "board.canvas"]);
    assert!(write.status.success());
    let written = fs::read_to_string(dir.path().join("board.canvas")).unwrap();
    assert!(written.starts_with("{\n  \"nodes\": ["));
}

#[test]
fn test_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.canvas"), "{}").unwrap();
    fs::write(dir.path().join("a.canvas"), "{}").unwrap();
    fs::write(dir.path().join("c.txt"), "").unwrap();

    let output = jsoncanvas(dir.path(), &["list", "."]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a.canvas\nb.canvas\n");
}

#[test]
fn test_inspect_uses_palette() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("board.canvas"), VALID).unwrap();
    fs::write(
        dir.path().join("palette.toml"),
        "[palette]\nred = \"#ff0000\"\n",
    )
    .unwrap();

    let output = jsoncanvas(
        dir.path(),
        &["inspect", "--config", "palette.toml", "board.canvas"],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("nodes: 2"));
    assert!(out.contains("node \"1\": preset 1 -> #ff0000"));
    assert!(out.contains("node \"2\": #00FF00"));
    assert!(out.contains("edge \"e1\": preset 3 -> #e0de71"));
}

#[test]
fn test_config_show() {
    let dir = TempDir::new().unwrap();
    let output = jsoncanvas(dir.path(), &["config", "show"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("[palette]"));
    assert!(out.contains("strict = false"));
}
