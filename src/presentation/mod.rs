//! Presentation Layer
//!
//! - `cli` - argument model (clap)
//! - `factory` - wires the Docker manager to a runner
//! - `output` - text and JSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use output::{ConsoleTeardownSink, OutputFormat};
