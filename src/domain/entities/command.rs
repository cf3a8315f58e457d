//! Command entity - one external invocation as a program plus argv
//!
//! Arguments are kept as a list and handed to the OS as-is, so secret
//! names, paths and filter values are never interpreted by a shell.

use crate::error::{BerthError, BerthResult};

/// An external command: program name and argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Reject commands that cannot be spawned at all
    pub fn validate(&self) -> BerthResult<()> {
        if self.program.trim().is_empty() {
            return Err(BerthError::invalid_argument(
                "command program must be a non-empty string",
            ));
        }
        Ok(())
    }

    /// True if the argument vector begins with `prefix`
    pub fn has_args_prefix(&self, prefix: &[&str]) -> bool {
        self.args.len() >= prefix.len() && self.args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

fn display_quoted(f: &mut std::fmt::Formatter<'_>, part: &str) -> std::fmt::Result {
    let needs_quotes = part.is_empty()
        || part
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '$' | '`' | '\\'));
    if needs_quotes {
        write!(f, "'{}'", part.replace('\'', "'\\''"))
    } else {
        write!(f, "{}", part)
    }
}

/// Shell-like rendering, used only for logs and error messages
impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_quoted(f, &self.program)?;
        for arg in &self.args {
            write!(f, " ")?;
            display_quoted(f, arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_arguments_in_order() {
        let cmd = Command::new("docker")
            .arg("secret")
            .args(["create", "db-password"]);
        assert_eq!(cmd.program(), "docker");
        assert_eq!(cmd.argv(), ["secret", "create", "db-password"]);
    }

    #[test]
    fn empty_program_is_invalid() {
        let err = Command::new("  ").validate().unwrap_err();
        assert!(matches!(err, BerthError::InvalidArgument { .. }));
    }

    #[test]
    fn display_quotes_only_when_needed() {
        let cmd = Command::new("docker")
            .args(["node", "ls", "--format", "{{.Hostname}}"])
            .arg("two words");
        assert_eq!(
            cmd.to_string(),
            "docker node ls --format {{.Hostname}} 'two words'"
        );
    }

    #[test]
    fn args_prefix_matching() {
        let cmd = Command::new("docker").args(["volume", "ls", "--quiet"]);
        assert!(cmd.has_args_prefix(&["volume", "ls"]));
        assert!(cmd.has_args_prefix(&[]));
        assert!(!cmd.has_args_prefix(&["volume", "rm"]));
        assert!(!cmd.has_args_prefix(&["volume", "ls", "--quiet", "--filter"]));
    }
}
