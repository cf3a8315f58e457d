//! Berth CLI - idempotent Docker swarm, volume and secret reconciliation
//!
//! Usage: berth [OPTIONS] <COMMAND>
//!
//! Commands:
//!   swarm      Swarm membership
//!   secret     Swarm secrets
//!   image      Local images
//!   container  Containers
//!   volume     Volumes and their backing directories
//!   prune      Remove unused images, containers and networks
//!   teardown   Remove the manager's stack and wait for it to drain

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use berth::presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = commands::Context::from_cli(&cli)?;

    match cli.command {
        Commands::Swarm(cmd) => commands::swarm::run(&ctx, cmd),
        Commands::Secret(cmd) => commands::secret::run(&ctx, cmd),
        Commands::Image(cmd) => commands::image::run(&ctx, cmd),
        Commands::Container(cmd) => commands::container::run(&ctx, cmd),
        Commands::Volume(cmd) => commands::volume::run(&ctx, cmd),
        Commands::Prune { volumes, yes } => commands::prune::run(&ctx, volumes, yes),
        Commands::Teardown {
            stack,
            wait,
            no_poll,
            message,
        } => commands::teardown::run(&ctx, stack, wait, no_poll, &message),
    }
}

/// Stderr logging; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
