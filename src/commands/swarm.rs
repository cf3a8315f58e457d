use anyhow::Result;

use berth::application::SwarmStatus;
use berth::presentation::cli::SwarmCommand;
use berth::presentation::output::emit_value;

use super::Context;

pub fn run(ctx: &Context, cmd: SwarmCommand) -> Result<()> {
    match cmd {
        SwarmCommand::Init => {
            let status = ctx.docker.ensure_swarm_initialized()?;
            if ctx.json() {
                emit_value("swarm_init", &serde_json::json!({ "status": status }))?;
            } else {
                match status {
                    SwarmStatus::AlreadyActive => println!("Swarm already active."),
                    SwarmStatus::Initialized => println!("Swarm initialized."),
                    SwarmStatus::InitFailed => eprintln!("Swarm initialization failed."),
                }
            }
            if status == SwarmStatus::InitFailed {
                std::process::exit(1);
            }
            Ok(())
        }
        SwarmCommand::Hostname => {
            let hostname = ctx.docker.manager_hostname()?;
            if ctx.json() {
                emit_value("swarm_hostname", &serde_json::json!({ "hostname": hostname }))?;
            } else if !hostname.is_empty() {
                println!("{}", hostname);
            }
            Ok(())
        }
    }
}
