use anyhow::{Context as _, Result};

use berth::presentation::output::emit_value;
use berth::presentation::ConsoleTeardownSink;

use super::Context;

pub fn run(
    ctx: &Context,
    stack: Option<String>,
    wait: Option<u64>,
    no_poll: bool,
    message: &str,
) -> Result<()> {
    let sink = ConsoleTeardownSink::new(ctx.format);

    let mut sequencer = ctx.docker.teardown();
    if let Some(wait) = wait {
        sequencer = sequencer.budget(wait);
    }
    if no_poll {
        sequencer = sequencer.poll(false);
    }

    let report = match stack {
        Some(stack) => sequencer.run_for(&stack, message, &sink),
        None => sequencer.run(message, &sink),
    }
    .context("stack teardown failed")?;

    if ctx.json() {
        emit_value("teardown", &report)?;
    }
    Ok(())
}
