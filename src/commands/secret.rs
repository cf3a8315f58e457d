use anyhow::{Context as _, Result};

use berth::infrastructure::prompt;
use berth::presentation::cli::SecretCommand;
use berth::presentation::output::{emit_value, render_removal};

use super::Context;

pub fn run(ctx: &Context, cmd: SecretCommand) -> Result<()> {
    match cmd {
        SecretCommand::Create { name, value } => {
            let value = match value {
                Some(value) => value,
                None => prompt::ask(&format!("Value for secret '{}'", name), true)
                    .context("secret value is required")?,
            };

            let outcome = ctx.docker.submit_secret(&value, &name)?;
            if ctx.json() {
                emit_value(
                    "secret_create",
                    &serde_json::json!({ "name": name, "success": outcome.is_success() }),
                )?;
            } else if outcome.is_success() {
                println!("Secret '{}' created.", name);
            }
            if !outcome.is_success() {
                outcome
                    .into_checked()
                    .with_context(|| format!("failed to create secret '{}'", name))?;
            }
            Ok(())
        }
        SecretCommand::Rm { names } => {
            let report = ctx.docker.remove_secrets(&names)?;
            if ctx.json() {
                emit_value("secret_rm", &report)?;
            } else {
                render_removal(&mut std::io::stdout().lock(), "secret", &report)?;
            }
            Ok(())
        }
    }
}
