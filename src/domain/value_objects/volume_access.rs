//! How volume directories are reached from the host
//!
//! - `Native`: the volume's backing directory is on the local filesystem
//! - `HelperContainer`: every operation is proxied through a long-lived
//!   container that bind-mounts the engine host's root

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Volume access mode, decided once per call from configuration or host OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeAccess {
    Native,
    HelperContainer,
}

impl VolumeAccess {
    /// Access mode for the current host
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Only Linux hosts see engine volumes as plain directories; Docker
    /// Desktop on Windows and macOS keeps them inside its own VM.
    pub fn for_os(os: &str) -> Self {
        if os == "linux" {
            VolumeAccess::Native
        } else {
            VolumeAccess::HelperContainer
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, VolumeAccess::Native)
    }
}

impl std::fmt::Display for VolumeAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeAccess::Native => write!(f, "native"),
            VolumeAccess::HelperContainer => write!(f, "helper-container"),
        }
    }
}

impl FromStr for VolumeAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "linux" => Ok(VolumeAccess::Native),
            "helper-container" | "helper" | "windows" => Ok(VolumeAccess::HelperContainer),
            other => Err(format!(
                "unknown volume access '{}' (expected 'native' or 'helper-container')",
                other
            )),
        }
    }
}
