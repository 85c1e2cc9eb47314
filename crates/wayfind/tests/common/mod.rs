//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/wayfind to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_wayfind_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "wayfind", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build wayfind");

    assert!(status.success(), "Failed to build wayfind binary");

    workspace.join("target/debug/wayfind")
}

/// Run the wayfind binary with the given arguments
pub fn run_wayfind(args: &[&str]) -> Output {
    let binary = get_wayfind_binary();

    Command::new(&binary)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute wayfind binary")
}

/// Run an interactive session, feeding the script through stdin
pub fn run_wayfind_session(args: &[&str], script: &str) -> Output {
    let binary = get_wayfind_binary();

    let mut child = Command::new(&binary)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn wayfind binary");

    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write session script");

    child
        .wait_with_output()
        .expect("Failed to wait for wayfind binary")
}
