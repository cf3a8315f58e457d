use anyhow::{Context as _, Result};

use berth::infrastructure::prompt;
use berth::presentation::output::emit_value;

use super::Context;

pub fn run(ctx: &Context, volumes: bool, yes: bool) -> Result<()> {
    if !yes {
        let question = if volumes {
            "Remove all unused images, containers, networks and volumes?"
        } else {
            "Remove all unused images, containers and networks?"
        };
        let confirmed = prompt::confirm(question).context("confirmation required; pass --yes")?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = ctx.docker.prune_system(volumes)?;
    if ctx.json() {
        emit_value(
            "prune",
            &serde_json::json!({ "volumes": volumes, "success": outcome.is_success() }),
        )?;
    } else if outcome.is_success() {
        print!("{}", outcome.stdout);
    }
    Ok(())
}
