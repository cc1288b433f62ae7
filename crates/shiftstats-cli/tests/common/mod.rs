use std::process::Output;

use tokio::process::Command;

/// API key the mock server accepts.
pub const TEST_KEY: &str = "test-api-key";

/// Run the CLI binary with arguments, inheriting nothing from the caller's
/// ShiftStats environment.
pub async fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shiftstats"))
        .args(args)
        .env_remove("SHIFTSTATS_API_KEY")
        .env_remove("SHIFTSTATS_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI against a mock server with the test key.
pub async fn run_cli_against(base_url: &str, args: &[&str]) -> Output {
    let mut full = vec!["--base-url", base_url, "--api-key", TEST_KEY];
    full.extend_from_slice(args);
    run_cli(&full).await
}

/// Run the CLI against a mock server and expect success.
pub async fn run_cli_success(base_url: &str, args: &[&str]) -> String {
    let output = run_cli_against(base_url, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI against a mock server and expect failure.
pub async fn run_cli_failure(base_url: &str, args: &[&str]) -> String {
    let output = run_cli_against(base_url, args).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
