//! System command runner
//!
//! Spawns the program directly (no shell), waits for it and captures both
//! output streams. Child stderr never reaches the terminal.

use std::process::Stdio;

use crate::domain::entities::{Command, ExecOutcome};
use crate::domain::ports::CommandRunner;

/// Runner that spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &Command) -> ExecOutcome {
        let output = std::process::Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) => ExecOutcome::from_exit(
                command,
                output.status.code(),
                String::from_utf8_lossy(&output.stdout).into_owned(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ),
            Err(e) => ExecOutcome::spawn_failed(command, e.to_string()),
        }
    }
}
