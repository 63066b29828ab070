use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Runs the binary with `home` as both home and config directory, so a
/// developer's own config file never leaks into a test.
fn lockscan_with_home(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lockscan"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lockscan")
}

fn lockscan(args: &[&str]) -> Output {
    let home = tempfile::tempdir().unwrap();
    lockscan_with_home(home.path(), args)
}

/// Runs a scan of `lock` with `config` written as the user's config file.
fn scan_with_config(lock: &str, config: &str) -> Output {
    let home = tempfile::tempdir().unwrap();
    let config_dir = dirs_config_dir(home.path()).join("lockscan");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), config).unwrap();

    let file = lock_file(lock);
    lockscan_with_home(home.path(), &[file.path().to_str().unwrap()])
}

/// Where the `dirs` crate looks for config under a given home.
fn dirs_config_dir(home: &Path) -> std::path::PathBuf {
    if cfg!(target_os = "macos") {
        home.join("Library").join("Application Support")
    } else {
        home.to_path_buf()
    }
}

fn lock_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn scan(content: &str) -> Output {
    let file = lock_file(content);
    lockscan(&[file.path().to_str().unwrap()])
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    let output = lockscan(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
}

#[test]
fn unreadable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("package-lock.json");
    let output = lockscan(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn malformed_json_fails_without_report() {
    let output = scan("{\"packages\": {");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid JSON"));
}

#[test]
fn missing_packages_object_fails() {
    let output = scan(r#"{"name": "app", "lockfileVersion": 3}"#);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"packages\""));
}

#[test]
fn empty_packages_reports_nothing_found() {
    let output = scan(r#"{"packages": {}}"#);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("(none)\n"));
    assert!(stdout.contains("VULNERABILITY ANALYSIS"));
    assert!(stdout.contains("VULNERABILITY SUMMARY"));
    assert!(stdout.contains("Vulnerable packages found: 0"));
    assert!(!stdout.contains("Recommendation"));
}

#[test]
fn compromised_version_is_reported_with_success_status() {
    let output = scan(
        r#"{"packages": {
            "": {"name": "app", "version": "1.0.0"},
            "node_modules/debug": {"version": "4.4.2"},
            "node_modules/express/node_modules/debug": {"version": "2.6.9"},
            "node_modules/chalk": {"version": "4.1.2"}
        }}"#,
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("debug    debug@2.6.9, debug@4.4.2\n"));
    assert!(stdout.contains("Package: chalk\n"));
    assert!(stdout.contains("Package: debug\n  Project versions: 2.6.9, 4.4.2\n"));
    assert!(stdout.contains("Vulnerable packages found: 1\n  - debug: 4.4.2\n"));
    assert!(stdout.contains("Recommendation"));
    assert!(!stdout.contains("Package: app"));
}

#[test]
fn output_is_deterministic() {
    let file = lock_file(
        r#"{"packages": {
            "node_modules/zeta": {"version": "1.0.0"},
            "node_modules/Alpha": {"version": "1.0.0"},
            "node_modules/zeta/node_modules/Alpha": {"version": "2.0.0"},
            "node_modules/ansi-styles": {"version": "6.2.2"},
            "node_modules/strip-ansi": {"version": "7.1.1"}
        }}"#,
    );
    let path = file.path().to_str().unwrap();

    let first = lockscan(&[path]);
    let second = lockscan(&[path]);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn nested_copies_of_one_version_are_counted_together() {
    let output = scan_with_config(
        r#"{"packages": {
            "node_modules/foo": {"version": "1.0.0"},
            "node_modules/bar/node_modules/foo": {"version": "1.0.0"}
        }}"#,
        "builtin_rules = false\n\n[rules]\nfoo = \"1.0.0\"\n",
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Package  Versions    \n-------  ------------\nfoo      foo@1.0.0 x2\n"));
    assert!(stdout.contains("Package: foo\n"));
    assert!(stdout.contains("  Is vulnerable version used: YES\n  Vulnerable versions found: 1.0.0\n"));
    assert!(stdout.contains("Vulnerable packages found: 1\n  - foo: 1.0.0\n"));
}

#[test]
fn other_version_is_not_vulnerable() {
    let output = scan_with_config(
        r#"{"packages": {"node_modules/baz": {"version": "2.0.0"}}}"#,
        "builtin_rules = false\n\n[rules]\nbaz = \"1.0.0\"\n",
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "Package: baz\n  Project versions: 2.0.0\n  Vulnerable version: 1.0.0\n  Is vulnerable version used: NO\n"
    ));
    assert!(stdout.contains("Vulnerable packages found: 0\n"));
}

#[test]
fn config_json_format_is_used() {
    let output = scan_with_config(
        r#"{"packages": {"node_modules/chalk": {"version": "5.6.1"}}}"#,
        "format = \"json\"\n",
    );

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["vulnerable_packages"][0], "chalk");
}

#[test]
fn unknown_config_format_falls_back_to_text() {
    let output = scan_with_config(r#"{"packages": {}}"#, "format = \"xml\"\n");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("(none)\n"));
    assert!(stdout.contains("VULNERABILITY SUMMARY"));
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let output = scan_with_config(
        r#"{"packages": {"node_modules/debug": {"version": "4.4.2"}}}"#,
        "strict = \"maybe\"\n",
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  - debug: 4.4.2\n"));
}
