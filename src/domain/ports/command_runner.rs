//! CommandRunner port - the single process-invocation primitive
//!
//! Everything Berth does to the container engine goes through this trait,
//! which lets the Docker operations run against a recording double in tests.

use crate::domain::entities::{Command, ExecOutcome};

/// Runs one external command synchronously
///
/// Implementations:
/// - `SystemRunner` - spawns a real process and waits for it
/// - test doubles that record commands and replay scripted output
pub trait CommandRunner {
    /// Run `command` to completion, capturing stdout and stderr.
    ///
    /// Never fails: a process that cannot be started is reported as an
    /// outcome with `FailureKind::SpawnFailed`.
    fn execute(&self, command: &Command) -> ExecOutcome;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, command: &Command) -> ExecOutcome {
        (**self).execute(command)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn execute(&self, command: &Command) -> ExecOutcome {
        (**self).execute(command)
    }
}
