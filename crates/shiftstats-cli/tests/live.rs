//! CLI tests against the live ShiftStats service.
//!
//! These tests are opt-in: set `SHIFTSTATS_LIVE_TESTS=1` to run them. They
//! use the built-in key unless `SHIFTSTATS_API_KEY` is set.

use std::process::Output;

use tokio::process::Command;

fn live_enabled() -> bool {
    std::env::var("SHIFTSTATS_LIVE_TESTS").is_ok_and(|v| v == "1")
}

async fn run_live(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shiftstats"))
        .args(args)
        .output()
        .await
        .expect("Failed to execute CLI")
}

#[tokio::test]
async fn test_live_login() {
    if !live_enabled() {
        eprintln!("Skipping: SHIFTSTATS_LIVE_TESTS not set");
        return;
    }

    let output = run_live(&["login"]).await;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test]
async fn test_live_demo() {
    if !live_enabled() {
        eprintln!("Skipping: SHIFTSTATS_LIVE_TESTS not set");
        return;
    }

    let output = run_live(&["demo"]).await;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let standings: serde_json::Value =
        serde_json::from_str(stdout.lines().next().unwrap_or_default()).unwrap();
    assert!(standings["teams"].is_array());
}
