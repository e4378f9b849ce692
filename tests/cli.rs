use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn parafmt() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("parafmt"));
    cmd.env_remove("PARAFMT_MARKER");
    cmd
}

#[test]
fn format_strips_markers_and_collapses_blank_runs() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("example.txt");
    let output = temp.path().join("out.txt");
    write_file(&input, "1→Hello.\n\n\n\n2→World.\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done:"))
        .stdout(predicate::str::contains("out.txt"))
        .stdout(predicate::str::contains("2 lines written"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "Hello.\n\nWorld.\n");
}

#[test]
fn format_prints_exactly_two_status_lines() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("a.txt");
    write_file(&input, "A\nB\n");

    let assert = parafmt().arg("format").arg(&input).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("a.txt → "));
}

#[test]
fn format_defaults_output_to_pretty_sibling() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("example.txt");
    write_file(&input, "\n\nX\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 line written"));

    let output = temp.path().join("example-pretty.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), "\nX\n");
    assert_eq!(fs::read_to_string(&input).unwrap(), "\n\nX\n");
}

#[test]
fn format_overwrites_existing_output() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    write_file(&input, "short\n");
    write_file(&output, "a much longer previous content\n\nwith paragraphs\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "short\n");
}

#[test]
fn format_json_report() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    write_file(&input, "1→a\n\n\n\n2→b  \n");

    let assert = parafmt()
        .arg("--format")
        .arg("json")
        .arg("format")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["mode"], "format");
    assert_eq!(report["stats"]["lines_read"], 5);
    assert_eq!(report["stats"]["markers_stripped"], 2);
    assert_eq!(report["stats"]["non_blank"], 2);
    assert_eq!(report["stats"]["blank_lines_dropped"], 2);
    assert_eq!(report["bytes"], 5);
    assert_eq!(report["changed"], true);
    assert_eq!(report["hash"].as_str().unwrap().len(), 16);
}

#[test]
fn format_quiet_prints_nothing() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    write_file(&input, "x\n");

    parafmt()
        .arg("-q")
        .arg("format")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn format_custom_marker_from_flag_and_env() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    let out_flag = temp.path().join("flag.txt");
    let out_env = temp.path().join("env.txt");
    write_file(&input, "1|one\n2→two\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(&out_flag)
        .arg("--marker")
        .arg("|")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out_flag).unwrap(), "one\n2→two\n");

    parafmt()
        .env("PARAFMT_MARKER", "|")
        .arg("format")
        .arg(&input)
        .arg(&out_env)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out_env).unwrap(), "one\n2→two\n");
}

#[test]
fn format_missing_input_fails() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("out.txt");

    parafmt()
        .arg("format")
        .arg(temp.path().join("missing.txt"))
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read input"));

    assert!(!output.exists());
}

#[test]
fn check_error_exit_code_differs_from_needs_formatting() {
    let temp = tempdir().unwrap();

    parafmt()
        .arg("check")
        .arg(temp.path().join("missing.txt"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to check"))
        .stderr(predicate::str::contains("cannot read input"));

    let bad = temp.path().join("bad.txt");
    fs::write(&bad, b"\xff\n").unwrap();
    parafmt()
        .arg("check")
        .arg(&bad)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn information_separator_lines_count_as_blank() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    write_file(&input, "a\n\x1f\n\x1c\nb\x1e\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lines written"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\n\nb\n");
}

#[test]
fn format_invalid_utf8_fails_unless_lossy() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("bad.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, b"1\xe2\x86\x92ok\n\xff\n").unwrap();

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));

    let assert = parafmt()
        .arg("--format")
        .arg("jsonl")
        .arg("format")
        .arg(&input)
        .arg(&output)
        .arg("--lossy")
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["warnings"][0]["code"], "LOSSY_CONVERSION");
    assert_eq!(fs::read_to_string(&output).unwrap(), "ok\n\u{FFFD}\n");
}

#[test]
fn format_unwritable_output_fails() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    write_file(&input, "x\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(temp.path().join("no-such-dir").join("out.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot write output"));
}

#[test]
fn check_reports_and_sets_exit_code() {
    let temp = tempdir().unwrap();
    let messy = temp.path().join("messy.txt");
    let clean = temp.path().join("clean.txt");
    write_file(&messy, "1→a\n\n\nb\n");
    write_file(&clean, "a\n\nb\n");

    parafmt()
        .arg("check")
        .arg(&messy)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Would reformat:"));

    parafmt()
        .arg("check")
        .arg(&clean)
        .assert()
        .success()
        .stdout(predicate::str::contains("Already formatted:"));

    assert_eq!(fs::read_to_string(&messy).unwrap(), "1→a\n\n\nb\n");
}

#[test]
fn formatting_is_idempotent() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    let once = temp.path().join("once.txt");
    let twice = temp.path().join("twice.txt");
    write_file(&input, "\n\n1→x  \n2→\n3→\n4→y\n\n\n\nz\t\n\n");

    parafmt()
        .arg("format")
        .arg(&input)
        .arg(&once)
        .assert()
        .success();
    parafmt()
        .arg("format")
        .arg(&once)
        .arg(&twice)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&once).unwrap(),
        fs::read_to_string(&twice).unwrap()
    );
    parafmt().arg("check").arg(&once).assert().success();
}

#[test]
fn verbose_logs_to_stderr() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in.txt");
    write_file(&input, "1→a\n");

    parafmt()
        .arg("-v")
        .arg("--format")
        .arg("json")
        .arg("format")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("markers stripped"));
}
