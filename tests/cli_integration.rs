//! Integration tests that run the CLI binary.

use std::fs;
use std::path::Path;

const SLOTS: usize = 1024;

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_lab", "-", "action", "-", "gen"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a definitions document where every slot has `default_size`,
/// except the listed overrides.
fn write_defs(path: &Path, default_size: &str, overrides: &[(usize, &str)], map: &str) {
    let mut sizes = vec![default_size.to_string(); SLOTS];
    for (i, s) in overrides {
        sizes[*i] = s.to_string();
    }
    let sizes: Vec<String> = sizes.iter().map(|s| format!("\"{}\"", s)).collect();
    let doc = format!(
        "{{\"CommandSizes\": [{}], \"CommandMap\": {}}}",
        sizes.join(", "),
        map
    );
    fs::write(path, doc).expect("write defs");
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--input"), "expected usage text in output");
    assert!(stdout.contains("--output"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lab-action-gen"));
}

#[test]
fn cli_default_paths_generate_definition_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    write_defs(
        &tmp.path().join("AgentLabDefsPS2.json"),
        "0xC",
        &[(3, "0x14"), (5, "0"), (7, "0x18")],
        r#"{"3": {"Name": "Foo", "Arguments": ["single", "single"]}}"#,
    );

    let output = bin()
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let text = fs::read_to_string(tmp.path().join("AgentLab/ActionDefinitionsPs2.lab"))
        .expect("definition file written");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), SLOTS);
    assert!(text.ends_with(";\n"));
    assert_eq!(lines[0], "action AUnknown_0() : 0;");
    assert_eq!(lines[3], "action Foo(float param1, int param2) : 3;");
    assert_eq!(lines[5], "action AUnknown_5_DELETED() : 5;");
    assert_eq!(
        lines[7],
        "action AUnknown_7(int param1, int param2, int param3) : 7;"
    );
}

#[test]
fn cli_output_dash_prints_to_stdout() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let input = tmp.path().join("defs.json5");
    write_defs(&input, "0", &[], "{}");

    let output = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg("-")
        .arg("-v")
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), SLOTS);
    assert_eq!(
        stdout.lines().nth(1023),
        Some("action AUnknown_1023_DELETED() : 1023;")
    );
    // logs stay on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Wrote 1024 actions"), "stderr: {}", stderr);
}

#[test]
fn cli_runs_twice_with_identical_output() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let input = tmp.path().join("defs.json");
    let out = tmp.path().join("out.lab");
    write_defs(
        &input,
        "0x20",
        &[(10, "0")],
        r#"{"1": {"Name": "Walk", "Arguments": ["single", "int", "single", "single", "int"]}}"#,
    );

    let mut results = Vec::new();
    for _ in 0..2 {
        let status = bin()
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(&out)
            .status()
            .expect("binary not found - run cargo build first");
        assert!(status.success());
        results.push(fs::read(&out).expect("output"));
    }
    assert_eq!(results[0], results[1]);
}

#[test]
fn cli_missing_input_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("AgentLabDefsPS2.json"),
        "expected read error naming the input, got: {}",
        stderr
    );
}

#[test]
fn cli_malformed_hex_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let input = tmp.path().join("defs.json");
    write_defs(&input, "0xC", &[(17, "0xQ")], "{}");

    let output = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(tmp.path().join("out.lab"))
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CommandSizes[17]"), "got: {}", stderr);
    assert!(!tmp.path().join("out.lab").exists());
}

#[test]
fn cli_short_argument_list_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let input = tmp.path().join("defs.json");
    write_defs(
        &input,
        "0xC",
        &[(2, "0x18")],
        r#"{"2": {"Name": "Spin", "Arguments": ["single"]}}"#,
    );

    let output = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg("-")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Spin"), "got: {}", stderr);
}

#[test]
fn cli_completions_bash() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("lab-action-gen"));
}
