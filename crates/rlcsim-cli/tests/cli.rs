//! End-to-end runs of the `rlcsim` binary.

use std::process::Command;

fn rlcsim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rlcsim"))
}

#[test]
fn test_sweep_json_reports_resonance() {
    let out = rlcsim()
        .args(["sweep", "--json"])
        .output()
        .expect("failed to run rlcsim");
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["parameters"]["topology"], "RLC");
    assert_eq!(report["result"]["points"].as_array().unwrap().len(), 500);
    let f_res = report["result"]["resonant_frequency"].as_f64().unwrap();
    assert!((f_res - 4109.36).abs() / 4109.36 < 0.013);
}

#[test]
fn test_transient_rc_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("rc.csv");
    let out = rlcsim()
        .args(["transient", "-t", "rc", "-R", "1k", "-C", "100n", "--voltage", "5"])
        .arg("--csv")
        .arg(&csv)
        .output()
        .expect("failed to run rlcsim");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Time constant: tau = 100.0000us"));

    let text = std::fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("time_s,charge_v,discharge_v\n"));
    assert_eq!(text.lines().count(), 501);
}

#[test]
fn test_resistor_transient_fails() {
    let out = rlcsim()
        .args(["transient", "-t", "R", "-q"])
        .output()
        .expect("failed to run rlcsim");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("only RC, RL and RLC circuits have a time response"));
}

#[test]
fn test_invalid_resistance_fails() {
    let out = rlcsim()
        .args(["sweep", "--resistance=-5"])
        .output()
        .expect("failed to run rlcsim");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid circuit parameters"));
}
