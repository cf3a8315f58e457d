use anyhow::{Context as _, Result};

use berth::presentation::cli::VolumeCommand;
use berth::presentation::output::{emit_value, render_removal};

use super::{resolve_stack, Context};

pub fn run(ctx: &Context, cmd: VolumeCommand) -> Result<()> {
    match cmd {
        VolumeCommand::Ensure(args) => {
            let stack = resolve_stack(ctx, args.stack)?;
            ctx.docker
                .ensure_volume_dirs(&stack, &args.dirs)
                .with_context(|| format!("failed to create volume directories for {}", stack))?;
            report_dirs(ctx, "volume_ensure", &stack, &args.dirs)
        }
        VolumeCommand::Purge(args) => {
            let stack = resolve_stack(ctx, args.stack)?;
            ctx.docker
                .purge_volume_dirs(&stack, &args.dirs)
                .with_context(|| format!("failed to purge volume directories for {}", stack))?;
            report_dirs(ctx, "volume_purge", &stack, &args.dirs)
        }
        VolumeCommand::Rm { names } => {
            let report = ctx.docker.remove_volumes(&names)?;
            if ctx.json() {
                emit_value("volume_rm", &report)?;
            } else {
                render_removal(&mut std::io::stdout().lock(), "volume", &report)?;
            }
            Ok(())
        }
        VolumeCommand::Push { host, volume } => {
            ctx.docker
                .copy_host_to_volume(&host, &volume)
                .with_context(|| format!("failed to copy {} into {}", host.display(), volume.display()))?;
            if ctx.json() {
                emit_value(
                    "volume_push",
                    &serde_json::json!({ "host": host, "volume": volume }),
                )?;
            }
            Ok(())
        }
        VolumeCommand::Pull { volume, host } => {
            ctx.docker
                .copy_volume_to_host(&volume, &host)
                .with_context(|| format!("failed to copy {} into {}", volume.display(), host.display()))?;
            if ctx.json() {
                emit_value(
                    "volume_pull",
                    &serde_json::json!({ "volume": volume, "host": host }),
                )?;
            }
            Ok(())
        }
    }
}

fn report_dirs(ctx: &Context, event: &str, stack: &str, dirs: &[String]) -> Result<()> {
    if ctx.json() {
        emit_value(
            event,
            &serde_json::json!({
                "stack": stack,
                "access": ctx.docker.volume_access().to_string(),
                "dirs": dirs,
            }),
        )?;
    } else {
        for dir in dirs {
            println!("{}", ctx.docker.volume_dir_path(stack, dir).display());
        }
    }
    Ok(())
}
