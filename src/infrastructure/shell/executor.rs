//! Shell executor
//!
//! Thin façade over a [`CommandRunner`]: validates the command, logs it,
//! and hands back an [`ExecOutcome`]. Failures are swallowed by default and
//! raised only through the `*_checked` entry points.

use tracing::{debug, warn};

use crate::domain::entities::{Command, ExecOutcome};
use crate::domain::ports::CommandRunner;
use crate::error::BerthResult;

/// Whether captured output is trimmed before it is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trim {
    #[default]
    Keep,
    /// Strip surrounding whitespace and newlines (single-token output)
    Surrounding,
}

/// Synchronous command executor
pub struct Shell<R> {
    runner: R,
}

impl<R: CommandRunner> Shell<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run a command, reporting failure in the outcome.
    ///
    /// Only an unusable command (empty program) is an `Err`.
    pub fn run(&self, command: &Command) -> BerthResult<ExecOutcome> {
        command.validate()?;
        debug!(command = %command, "running");

        let outcome = self.runner.execute(command);

        if !outcome.stderr.trim().is_empty() {
            debug!(command = %command, stderr = %outcome.stderr.trim(), "stderr");
        }
        if let Some(failure) = &outcome.failure {
            warn!(command = %command, %failure, "command failed; continuing");
        }
        Ok(outcome)
    }

    /// Run a command and return its exit code (0 on success)
    pub fn status(&self, command: &Command) -> BerthResult<i32> {
        Ok(self.run(command)?.exit_code())
    }

    /// Run a command; any failure becomes `BerthError::CommandFailed`
    pub fn run_checked(&self, command: &Command) -> BerthResult<ExecOutcome> {
        self.run(command)?.into_checked()
    }

    /// Run a command and return its stdout, empty when it failed
    pub fn capture(&self, command: &Command, trim: Trim) -> BerthResult<String> {
        let outcome = self.run(command)?;
        if !outcome.is_success() {
            return Ok(String::new());
        }
        Ok(match trim {
            Trim::Keep => outcome.stdout,
            Trim::Surrounding => outcome.stdout.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BerthError;
    use crate::infrastructure::shell::RecordingRunner;

    #[test]
    fn run_rejects_empty_program() {
        let shell = Shell::new(RecordingRunner::new());
        let err = shell.run(&Command::new("")).unwrap_err();
        assert!(matches!(err, BerthError::InvalidArgument { .. }));
        assert!(shell.runner().calls().is_empty());
    }

    #[test]
    fn status_returns_exit_code_instead_of_raising() {
        let shell = Shell::new(RecordingRunner::new().fail(&["node", "ls"], 1));
        let code = shell
            .status(&Command::new("docker").args(["node", "ls"]))
            .unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn run_checked_raises_on_failure() {
        let shell = Shell::new(RecordingRunner::new().fail(&["swarm"], 2));
        let err = shell
            .run_checked(&Command::new("docker").args(["swarm", "init"]))
            .unwrap_err();
        assert!(matches!(err, BerthError::CommandFailed { .. }));
    }

    #[test]
    fn capture_trims_single_token_output() {
        let shell = Shell::new(RecordingRunner::new().respond(&["node"], "manager-01\n"));
        let cmd = Command::new("docker").args(["node", "ls"]);
        assert_eq!(shell.capture(&cmd, Trim::Keep).unwrap(), "manager-01\n");
        assert_eq!(shell.capture(&cmd, Trim::Surrounding).unwrap(), "manager-01");
    }

    #[test]
    fn capture_of_failed_command_is_empty() {
        let shell = Shell::new(RecordingRunner::new().fail(&["images"], 1));
        let out = shell
            .capture(&Command::new("docker").arg("images"), Trim::Keep)
            .unwrap();
        assert!(out.is_empty());
    }
}
