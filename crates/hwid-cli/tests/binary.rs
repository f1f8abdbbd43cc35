//! # Binary Exit-Status Tests
//!
//! Run the built `hardwareid` binary and check what reaches stdout and the
//! exit status. Identifier values depend on the build host, so assertions
//! are about shape, not content.

use std::process::Command;

fn hardwareid(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hardwareid"))
        .args(args)
        .output()
        .expect("failed to run hardwareid binary")
}

#[test]
fn protected_output_is_one_hex_line() {
    let out = hardwareid(&["--appid", "app.id"]);
    if !out.status.success() {
        // Interface enumeration denied on this host.
        assert_eq!(out.status.code(), Some(1));
        return;
    }
    let stdout = String::from_utf8(out.stdout).unwrap();
    let line = stdout.trim_end_matches('\n');
    assert_eq!(line.len(), 64);
    assert!(line.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn raw_and_protected_outputs_differ() {
    let raw = hardwareid(&[]);
    let protected = hardwareid(&["--appid", "app.id"]);
    if raw.status.success() && protected.status.success() {
        assert_ne!(raw.stdout, protected.stdout);
    }
}

#[test]
fn json_output_parses() {
    let out = hardwareid(&["--json"]);
    if out.status.success() {
        let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(value["protected"], false);
        assert_eq!(value["strategy"], "network");
        assert!(value["id"].is_string());
    }
}

#[test]
fn bad_config_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hardwareid.yaml");
    std::fs::write(&path, "strategy: tpm\n").unwrap();
    let out = hardwareid(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn unknown_flag_is_usage_error() {
    let out = hardwareid(&["--mac"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[cfg(not(windows))]
#[test]
fn composite_off_windows_exits_non_zero() {
    let out = hardwareid(&["--strategy", "composite"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not supported"), "stderr: {stderr}");
}
