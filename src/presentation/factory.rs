//! Manager Factory
//!
//! Wires a [`DockerManager`] to a real or a recording runner.

use std::io::{self, Write};

use tracing::warn;

use crate::application::DockerManager;
use crate::config::Config;
use crate::domain::entities::Command;
use crate::domain::ports::CommandRunner;
use crate::infrastructure::{RecordingRunner, SystemRunner};
use crate::presentation::output::{emit, OutputFormat};

/// Runner chosen at startup
pub type DynRunner = Box<dyn CommandRunner>;

/// Manager used by the binary
pub type ConcreteDockerManager = DockerManager<DynRunner>;

/// Manager that spawns real engine commands
pub fn create_docker_manager(config: Config) -> ConcreteDockerManager {
    DockerManager::new(Box::new(SystemRunner::new()), config)
}

/// Manager that prints each command instead of running it.
///
/// Every command succeeds with empty output, so lookups find nothing.
/// Under JSON output each command is its own `dry_run_command` event.
pub fn create_dry_run_manager(config: Config, format: OutputFormat) -> ConcreteDockerManager {
    let runner = RecordingRunner::new().on_execute(move |command| {
        let printed = match format {
            OutputFormat::Json => emit(dry_run_event(command)),
            OutputFormat::Text => writeln!(io::stdout().lock(), "{}", command),
        };
        if let Err(e) = printed {
            warn!(error = %e, "failed to print dry-run command");
        }
    });
    DockerManager::new(Box::new(runner), config)
}

fn dry_run_event(command: &Command) -> serde_json::Value {
    serde_json::json!({
        "event": "dry_run_command",
        "command": command.to_string(),
    })
}
