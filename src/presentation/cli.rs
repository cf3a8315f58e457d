//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--config`, `--platform`,
//! `--dry-run`) are inherited by every subcommand.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{ContainerStatus, VolumeAccess};

/// Berth - idempotent Docker swarm, volume and secret reconciliation
#[derive(Parser, Debug)]
#[command(name = "berth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./berth.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Volume access mode: native or helper-container (default: detect)
    #[arg(long, global = true, value_name = "MODE")]
    pub platform: Option<VolumeAccess>,

    /// Print the engine commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Swarm membership
    #[command(subcommand)]
    Swarm(SwarmCommand),

    /// Swarm secrets
    #[command(subcommand)]
    Secret(SecretCommand),

    /// Local images
    #[command(subcommand)]
    Image(ImageCommand),

    /// Containers
    #[command(subcommand)]
    Container(ContainerCommand),

    /// Volumes and their backing directories
    #[command(subcommand)]
    Volume(VolumeCommand),

    /// Remove unused images, containers and networks
    Prune {
        /// Also remove unused volumes
        #[arg(long)]
        volumes: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove the manager's stack and wait for its containers to go away
    Teardown {
        /// Stack name (default: the swarm manager's hostname)
        #[arg(long)]
        stack: Option<String>,

        /// Seconds to wait at most (default: teardown.wait_seconds)
        #[arg(long, value_name = "SECONDS")]
        wait: Option<u64>,

        /// Wait the full budget even if the stack is already gone
        #[arg(long)]
        no_poll: bool,

        /// Printed once the teardown is finished
        #[arg(long, default_value = "Stack removed.")]
        message: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SwarmCommand {
    /// Create a single-node swarm unless this node already is in one
    Init,
    /// Print the swarm manager's hostname
    Hostname,
}

#[derive(Subcommand, Debug)]
pub enum SecretCommand {
    /// Register a secret (prompts for the value when --value is omitted)
    Create {
        name: String,

        /// Secret value; visible in the process list, prefer the prompt
        #[arg(long)]
        value: Option<String>,
    },
    /// Remove secrets matching each name
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImageCommand {
    /// Exit non-zero unless every image is present locally
    Check {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the ID of an image
    Id { name: String },
    /// Force-remove every local image of each repository
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContainerCommand {
    /// Print running containers created from an image
    Ids { image: String },
    /// Force-remove containers by name
    Rm {
        #[arg(required = true)]
        names: Vec<String>,

        /// Only remove containers in this state: running, exited or dead
        #[arg(long, default_value = "any")]
        status: ContainerStatus,
    },
}

#[derive(Subcommand, Debug)]
pub enum VolumeCommand {
    /// Create the stack's volume directories
    Ensure(VolumeDirs),
    /// Delete the stack's volume directories
    Purge(VolumeDirs),
    /// Force-remove volumes matching each name
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Merge a host directory into a volume directory
    Push { host: PathBuf, volume: PathBuf },
    /// Merge a volume directory into a host directory
    Pull { volume: PathBuf, host: PathBuf },
}

#[derive(Args, Debug)]
pub struct VolumeDirs {
    /// Stack name (default: the swarm manager's hostname)
    #[arg(long)]
    pub stack: Option<String>,

    /// Directories relative to the stack, e.g. `_pgdata/_data`
    #[arg(required = true)]
    pub dirs: Vec<String>,
}
