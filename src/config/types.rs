//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VolumeAccess;
use crate::error::BerthResult;

use super::loader::{self, ConfigWarning};

/// Container engine CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// Engine CLI binary
    #[serde(default = "default_docker_binary")]
    pub binary: String,

    /// Prepended to image names when resolving image IDs
    /// (e.g. `registry.example.com/team/`)
    #[serde(default)]
    pub registry_prefix: String,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: default_docker_binary(),
            registry_prefix: String::new(),
        }
    }
}

fn default_docker_binary() -> String {
    "docker".to_string()
}

/// Volume directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumesConfig {
    /// Directory holding the engine's named volumes
    #[serde(default = "default_volumes_root")]
    pub root: PathBuf,

    /// Access mode; detected from the host OS when unset
    #[serde(default)]
    pub access: Option<VolumeAccess>,

    /// Long-lived container bind-mounting the engine host's root
    #[serde(default = "default_helper_container")]
    pub helper_container: String,

    /// Where the engine host's root is mounted inside the helper container
    #[serde(default = "default_helper_mount")]
    pub helper_mount: String,
}

impl Default for VolumesConfig {
    fn default() -> Self {
        Self {
            root: default_volumes_root(),
            access: None,
            helper_container: default_helper_container(),
            helper_mount: default_helper_mount(),
        }
    }
}

impl VolumesConfig {
    /// Configured access mode, or the one detected for this host
    pub fn effective_access(&self) -> VolumeAccess {
        self.access.unwrap_or_else(VolumeAccess::detect)
    }
}

fn default_volumes_root() -> PathBuf {
    PathBuf::from("/var/lib/docker/volumes")
}

fn default_helper_container() -> String {
    "volume-holder".to_string()
}

fn default_helper_mount() -> String {
    "/vm-root".to_string()
}

/// Stack teardown settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeardownConfig {
    /// Grace window in seconds
    #[serde(default = "default_wait_seconds")]
    pub wait_seconds: u64,

    /// Stop waiting as soon as no container of the stack remains
    #[serde(default = "default_true")]
    pub poll: bool,
}

impl Default for TeardownConfig {
    fn default() -> Self {
        Self {
            wait_seconds: default_wait_seconds(),
            poll: true,
        }
    }
}

fn default_wait_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// Secret submission settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsConfig {
    /// Directory for the short-lived secret file; system temp dir when unset
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl SecretsConfig {
    pub fn effective_temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub docker: DockerConfig,

    #[serde(default)]
    pub volumes: VolumesConfig,

    #[serde(default)]
    pub teardown: TeardownConfig,

    #[serde(default)]
    pub secrets: SecretsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BerthResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BerthResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (BERTH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
