//! File System Implementations
//!
//! - `LocalFs` - idempotent reconciliation over the local disk
//! - configuration directory lookup

mod home;
mod local;

pub use home::{berth_config_dir, user_config_path, BERTH_TEST_CONFIG_HOME_VAR};
pub use local::{LocalFs, DIRECTORY_MODE};
