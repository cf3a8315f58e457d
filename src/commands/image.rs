use anyhow::Result;

use berth::presentation::cli::ImageCommand;
use berth::presentation::output::{emit_value, render_removal};

use super::Context;

pub fn run(ctx: &Context, cmd: ImageCommand) -> Result<()> {
    match cmd {
        ImageCommand::Check { names } => {
            let present = ctx.docker.all_images_present(&names)?;
            if ctx.json() {
                emit_value("image_check", &serde_json::json!({ "present": present }))?;
            } else if present {
                println!("All images present.");
            } else {
                println!("Some images are missing.");
            }
            if !present {
                std::process::exit(1);
            }
            Ok(())
        }
        ImageCommand::Id { name } => {
            let id = ctx.docker.resolve_image_id(&name)?;
            if ctx.json() {
                emit_value("image_id", &serde_json::json!({ "name": name, "id": id }))?;
            } else if let Some(id) = id {
                println!("{}", id);
            }
            Ok(())
        }
        ImageCommand::Rm { names } => {
            let report = ctx.docker.remove_images(&names)?;
            if ctx.json() {
                emit_value("image_rm", &report)?;
            } else {
                render_removal(&mut std::io::stdout().lock(), "image", &report)?;
            }
            Ok(())
        }
    }
}
