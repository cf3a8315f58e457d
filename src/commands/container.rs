use anyhow::Result;

use berth::presentation::cli::ContainerCommand;
use berth::presentation::output::{emit_value, render_removal};

use super::Context;

pub fn run(ctx: &Context, cmd: ContainerCommand) -> Result<()> {
    match cmd {
        ContainerCommand::Ids { image } => {
            let ids = ctx.docker.resolve_container_ids(&image)?;
            if ctx.json() {
                emit_value("container_ids", &serde_json::json!({ "image": image, "ids": ids }))?;
            } else {
                for id in ids {
                    println!("{}", id);
                }
            }
            Ok(())
        }
        ContainerCommand::Rm { names, status } => {
            let report = ctx.docker.remove_containers(&names, status)?;
            if ctx.json() {
                emit_value("container_rm", &report)?;
            } else {
                render_removal(&mut std::io::stdout().lock(), "container", &report)?;
            }
            Ok(())
        }
    }
}
