//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `shell/` - command runners and the `Shell` executor
//! - `fs/` - local file system reconciler
//! - `text`, `archive`, `prompt` - file, archive and terminal utilities

pub mod archive;
pub mod fs;
pub mod prompt;
pub mod shell;
pub mod text;

// Re-export for convenience
pub use fs::LocalFs;
pub use shell::{RecordingRunner, Shell, SystemRunner, Trim};
