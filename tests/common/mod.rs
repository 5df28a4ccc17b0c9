//! Shared helpers for driving the `chgate` binary.

use std::process::Command;

/// Result of one `chgate` invocation.
pub struct Run {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl Run {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|err| panic!("parse stdout as JSON ({err}): {}", self.stdout))
    }
}

pub fn chgate(args: &[&str]) -> Run {
    let output = Command::new(env!("CARGO_BIN_EXE_chgate"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run chgate");
    Run {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
