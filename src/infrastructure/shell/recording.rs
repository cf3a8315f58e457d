//! Recording command runner
//!
//! Records every command instead of spawning it and answers from a list of
//! scripted replies. Backs `--dry-run` and the Docker operation tests.

use std::cell::RefCell;

use crate::domain::entities::{Command, ExecOutcome};
use crate::domain::ports::CommandRunner;

/// Scripted answer for commands whose argv starts with a given prefix
#[derive(Debug, Clone)]
pub enum Reply {
    Stdout(String),
    Exit { code: i32, stderr: String },
}

impl Reply {
    pub fn stdout(text: impl Into<String>) -> Self {
        Reply::Stdout(text.into())
    }

    pub fn exit(code: i32) -> Self {
        Reply::Exit {
            code,
            stderr: String::new(),
        }
    }
}

type Hook = Box<dyn Fn(&Command)>;

/// Runner that records commands and replays scripted output
///
/// Unscripted commands succeed with empty stdout. Replies are matched by
/// argv prefix in the order they were added.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Command>>,
    replies: Vec<(Vec<String>, Reply)>,
    hook: Option<Hook>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `stdout` to commands whose argv starts with `prefix`
    pub fn respond(self, prefix: &[&str], stdout: &str) -> Self {
        self.reply(prefix, Reply::stdout(stdout))
    }

    /// Fail commands whose argv starts with `prefix`
    pub fn fail(self, prefix: &[&str], code: i32) -> Self {
        self.reply(prefix, Reply::exit(code))
    }

    pub fn reply(mut self, prefix: &[&str], reply: Reply) -> Self {
        self.replies
            .push((prefix.iter().map(|s| s.to_string()).collect(), reply));
        self
    }

    /// Call `hook` with each command before it is answered
    pub fn on_execute(mut self, hook: impl Fn(&Command) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Every command seen so far
    pub fn calls(&self) -> Vec<Command> {
        self.calls.borrow().clone()
    }

    /// Every command seen so far, rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&self, command: &Command) -> ExecOutcome {
        if let Some(hook) = &self.hook {
            hook(command);
        }
        self.calls.borrow_mut().push(command.clone());

        let reply = self.replies.iter().find(|(prefix, _)| {
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            command.has_args_prefix(&prefix)
        });

        match reply {
            Some((_, Reply::Stdout(text))) => ExecOutcome::succeeded(command, text.clone()),
            Some((_, Reply::Exit { code, stderr })) => {
                ExecOutcome::exited(command, *code, stderr.clone())
            }
            None => ExecOutcome::succeeded(command, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let runner = RecordingRunner::new();
        runner.execute(&Command::new("docker").args(["node", "ls"]));
        runner.execute(&Command::new("docker").args(["swarm", "init"]));
        assert_eq!(
            runner.command_lines(),
            vec!["docker node ls", "docker swarm init"]
        );
    }

    #[test]
    fn first_matching_reply_wins() {
        let runner = RecordingRunner::new()
            .respond(&["images"], "abc123\n")
            .fail(&["images"], 1);
        let outcome = runner.execute(&Command::new("docker").args(["images", "web"]));
        assert_eq!(outcome.stdout_trimmed(), "abc123");
    }

    #[test]
    fn unscripted_commands_succeed_silently() {
        let runner = RecordingRunner::new().fail(&["node"], 1);
        let outcome = runner.execute(&Command::new("docker").args(["ps"]));
        assert!(outcome.is_success());
        assert!(outcome.stdout.is_empty());
    }
}
