//! Common test utilities for binary tests.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the contacts binary with the given arguments and stdin.
///
/// Logging goes to stderr so tests never touch the user's log file.
pub fn run_contacts(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_contacts"))
        .arg("--log-stderr")
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("CONTACTS_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // The child may exit before reading (e.g. --help), so a broken pipe is fine.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait on child");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
