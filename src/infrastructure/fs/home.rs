//! Configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs (e.g. `SHGetKnownFolderPath` on
//! Windows) that ignore environment variables, so tests cannot redirect it.
//! `berth_config_dir()` checks `BERTH_TEST_CONFIG_HOME` first and falls back
//! to `dirs::config_dir()`.

use std::path::PathBuf;

/// Environment variable for test isolation of the configuration directory.
pub const BERTH_TEST_CONFIG_HOME_VAR: &str = "BERTH_TEST_CONFIG_HOME";

/// Get the directory holding `berth/config.toml`.
///
/// # Returns
///
/// - `Some(PathBuf)` - `BERTH_TEST_CONFIG_HOME` if set, else the platform
///   configuration directory
/// - `None` - if neither can be resolved
pub fn berth_config_dir() -> Option<PathBuf> {
    std::env::var(BERTH_TEST_CONFIG_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Path of the user-level configuration file
pub fn user_config_path() -> Option<PathBuf> {
    berth_config_dir().map(|dir| dir.join("berth").join("config.toml"))
}
