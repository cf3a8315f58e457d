//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod teardown_sink;

pub use command_runner::CommandRunner;
pub use teardown_sink::{NoopTeardownSink, TeardownEvent, TeardownSink};
