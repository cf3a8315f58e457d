//! Outcome of running one external command
//!
//! Failures are values by default. Callers that need a failing command to
//! stop them opt in with [`ExecOutcome::into_checked`].

use crate::error::{BerthError, BerthResult};

use super::Command;

/// Why a command did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Process ran and exited with a non-zero status
    NonZeroExit(i32),
    /// Process was terminated without an exit status (e.g. by a signal)
    Terminated,
    /// Process could not be started
    SpawnFailed(String),
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::NonZeroExit(code) => write!(f, "exit status {}", code),
            FailureKind::Terminated => write!(f, "terminated without exit status"),
            FailureKind::SpawnFailed(reason) => write!(f, "could not start: {}", reason),
        }
    }
}

/// Status, captured output and failure kind of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Rendered command line, for logs and errors
    pub command: String,
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub failure: Option<FailureKind>,
}

impl ExecOutcome {
    /// Build from a process exit status and captured streams
    pub fn from_exit(command: &Command, status: Option<i32>, stdout: String, stderr: String) -> Self {
        let failure = match status {
            Some(0) => None,
            Some(code) => Some(FailureKind::NonZeroExit(code)),
            None => Some(FailureKind::Terminated),
        };
        Self {
            command: command.to_string(),
            status,
            stdout,
            stderr,
            failure,
        }
    }

    pub fn spawn_failed(command: &Command, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            command: command.to_string(),
            status: None,
            stdout: String::new(),
            stderr: reason.clone(),
            failure: Some(FailureKind::SpawnFailed(reason)),
        }
    }

    /// Successful outcome with the given stdout
    pub fn succeeded(command: &Command, stdout: impl Into<String>) -> Self {
        Self::from_exit(command, Some(0), stdout.into(), String::new())
    }

    /// Failed outcome with the given status and stderr
    pub fn exited(command: &Command, code: i32, stderr: impl Into<String>) -> Self {
        Self::from_exit(command, Some(code), String::new(), stderr.into())
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// 0 on success, the process status on failure, -1 when there is none
    pub fn exit_code(&self) -> i32 {
        match (&self.failure, self.status) {
            (None, _) => 0,
            (Some(_), Some(code)) => code,
            (Some(_), None) => -1,
        }
    }

    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Non-empty stdout lines, trimmed. Failed commands yield nothing.
    pub fn lines(&self) -> Vec<String> {
        if !self.is_success() {
            return Vec::new();
        }
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Strict mode: turn any failure into `BerthError::CommandFailed`
    pub fn into_checked(self) -> BerthResult<Self> {
        match &self.failure {
            None => Ok(self),
            Some(kind) => Err(BerthError::CommandFailed {
                command: self.command.clone(),
                status: kind.to_string(),
                stderr: self.stderr.trim().to_string(),
            }),
        }
    }
}
