use assert_cmd::prelude::*;
use chrono::NaiveDate;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn timelog() -> Command {
    let mut cmd = Command::cargo_bin("timelog").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// Splits "<Month> <DD>, <YYYY>: rest" and checks the prefix is a real date.
fn assert_stamped(line: &str, rest: &str) {
    let (prefix, tail) = line
        .split_once(": ")
        .unwrap_or_else(|| panic!("no timestamp prefix in {line:?}"));
    NaiveDate::parse_from_str(prefix, "%B %d, %Y")
        .unwrap_or_else(|e| panic!("bad timestamp {prefix:?}: {e}"));
    assert_eq!(tail, rest);
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("timelog.toml");
    fs::write(&path, body).unwrap();
    path
}

#[rstest]
#[case(&["--help"], "Usage:")]
#[case(&["put", "--help"], "--no-newline")]
#[case(&["demo", "--help"], "--path")]
fn help_is_printed(#[case] args: &[&str], #[case] needle: &str) {
    timelog()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains(needle));
}

#[test]
fn put_without_text_is_usage_error() {
    timelog()
        .arg("put")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[rstest]
#[case("monolithic")]
#[case("horizontal")]
#[case("vertical")]
fn put_appends_one_stamped_line(#[case] variant: &str) {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    timelog()
        .args(["put", "Message", "--variant", variant, "--path"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("({variant})")));

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.ends_with('\n'));
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_stamped(lines[0], "Message");
}

#[test]
fn no_newline_leaves_text_verbatim() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    timelog()
        .args(["put", "a", "--no-newline", "--path"])
        .arg(&log)
        .assert()
        .success();
    timelog()
        .args(["put", "b", "--no-newline", "--path"])
        .arg(&log)
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(!contents.contains('\n'));
    assert!(contents.ends_with(": b"));
}

#[test]
fn demo_writes_one_line_per_composition() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    timelog()
        .args(["demo", "--path"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("(monolithic)"))
        .stdout(predicate::str::contains("(horizontal)"))
        .stdout(predicate::str::contains("(vertical)"));

    let contents = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_stamped(line, "Message");
    }
}

#[test]
fn config_supplies_path_and_variant() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("from-config.txt");
    let cfg = write_config(
        dir.path(),
        &format!(
            "[destination]\npath = {:?}\n\n[composition]\nvariant = \"horizontal\"\n\n[logging]\nlevel = \"warn\"\n",
            log.display().to_string()
        ),
    );

    timelog()
        .arg("--config")
        .arg(&cfg)
        .args(["put", "configured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(horizontal)"));

    let contents = fs::read_to_string(&log).unwrap();
    assert_stamped(contents.trim_end(), "configured");
}

#[test]
fn command_line_path_beats_config() {
    let dir = tempdir().unwrap();
    let from_cfg = dir.path().join("cfg.txt");
    let from_cli = dir.path().join("cli.txt");
    let cfg = write_config(
        dir.path(),
        &format!("[destination]\npath = {:?}\n", from_cfg.display().to_string()),
    );

    timelog()
        .arg("--config")
        .arg(&cfg)
        .args(["put", "x", "--path"])
        .arg(&from_cli)
        .assert()
        .success();

    assert!(from_cli.exists());
    assert!(!from_cfg.exists());
}

#[test]
fn missing_directory_fails_without_creating_anything() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("missing").join("log.txt");

    timelog()
        .args(["put", "Message", "--path"])
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("What happened"))
        .stderr(predicate::str::contains("parent directory does not exist"));

    assert!(!log.parent().unwrap().exists());
}

#[test]
fn json_mode_reports_structured_error() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("missing").join("log.txt");

    let out = timelog()
        .args(["--json", "--log-level", "off", "put", "Message", "--path"])
        .arg(&log)
        .output()
        .unwrap();
    assert!(!out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let last = stderr.lines().last().unwrap();
    let v: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(v["status"], "error");
    assert_eq!(v["error"], "io");
    assert_eq!(v["path"], log.display().to_string());
}

#[test]
fn json_mode_reports_success_on_stdout() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    let out = timelog()
        .args(["--json", "put", "Message", "--variant", "vertical", "--path"])
        .arg(&log)
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["variant"], "vertical");
}

#[rstest]
#[case("[destination]\npath = \"\"\n", "destination.path")]
#[case("[logging]\nlevel = \"loud\"\n", "logging.level")]
#[case("[composition]\nvariant = \"diagonal\"\n", "invalid TOML")]
fn invalid_config_is_rejected(#[case] body: &str, #[case] needle: &str) {
    let dir = tempdir().unwrap();
    let cfg = write_config(dir.path(), body);

    timelog()
        .arg("--config")
        .arg(&cfg)
        .args(["put", "x", "--path"])
        .arg(dir.path().join("log.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(needle));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempdir().unwrap();

    timelog()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[rstest]
#[case("verbose")]
#[case("loud")]
fn unknown_log_level_is_usage_error(#[case] level: &str) {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    timelog()
        .args(["--log-level", level, "put", "x", "--path"])
        .arg(&log)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(level));

    assert!(!log.exists());
}

#[test]
fn log_level_accepts_any_case() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    timelog()
        .args(["--log-level", "DEBUG", "put", "x", "--path"])
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::contains("line appended"));
}

#[test]
fn piped_stderr_has_no_ansi_escapes() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("log.txt");

    timelog()
        .args(["--log-level", "debug", "put", "x", "--path"])
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::contains("line appended"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
