//! Subcommand handlers
//!
//! Each handler maps one subcommand onto one `DockerManager` operation and
//! renders the result.

pub mod container;
pub mod image;
pub mod prune;
pub mod secret;
pub mod swarm;
pub mod teardown;
pub mod volume;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use berth::config::{Config, PROJECT_CONFIG_FILE};
use berth::presentation::cli::Cli;
use berth::presentation::factory::{create_docker_manager, create_dry_run_manager, ConcreteDockerManager};
use berth::presentation::output::print_config_warnings;
use berth::presentation::OutputFormat;

/// Everything a handler needs, resolved once from the global flags
pub struct Context {
    pub docker: ConcreteDockerManager,
    pub format: OutputFormat,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = load_config(cli.config.clone(), cli.json)?;
        if let Some(access) = cli.platform {
            config.volumes.access = Some(access);
        }

        let docker = if cli.dry_run {
            create_dry_run_manager(config, OutputFormat::from_json_flag(cli.json))
        } else {
            create_docker_manager(config)
        };

        Ok(Self {
            docker,
            format: OutputFormat::from_json_flag(cli.json),
        })
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Explicit `--config`, else `./berth.toml`, else the user config
fn load_config(explicit: Option<PathBuf>, json: bool) -> Result<Config> {
    let path = explicit.or_else(|| {
        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        project.exists().then_some(project)
    });

    let Some(path) = path else {
        return Ok(Config::load_or_default(None));
    };

    let (config, warnings) = Config::load_with_warnings(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    if !json {
        print_config_warnings(&path, &warnings);
    }
    Ok(config.with_env_overrides())
}

/// Stack given on the command line, or the swarm manager's hostname
pub fn resolve_stack(ctx: &Context, stack: Option<String>) -> Result<String> {
    match stack {
        Some(stack) => Ok(stack),
        None => {
            let stack = ctx
                .docker
                .manager_hostname()
                .context("failed to query the swarm manager")?;
            if stack.is_empty() {
                anyhow::bail!("could not determine the stack name; pass --stack or run on a swarm manager");
            }
            Ok(stack)
        }
    }
}
