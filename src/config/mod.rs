//! Configuration module for Berth
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BERTH_*)
//! 3. Project config (./berth.toml)
//! 4. User config (<config dir>/berth/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DockerConfig, SecretsConfig, TeardownConfig, VolumesConfig};
