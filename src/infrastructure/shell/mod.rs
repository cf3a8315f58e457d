//! Shell Executor
//!
//! - `SystemRunner` - spawns real processes
//! - `RecordingRunner` - records commands and replays scripted output
//! - `Shell` - validation, logging and swallow/strict failure handling

mod executor;
mod recording;
mod runner;

pub use executor::{Shell, Trim};
pub use recording::{RecordingRunner, Reply};
pub use runner::SystemRunner;
