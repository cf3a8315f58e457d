//! Application Layer
//!
//! Operations composed from the domain ports and infrastructure adapters.

pub mod docker;

pub use docker::{
    DockerManager, RemovalReport, SwarmStatus, TeardownReport, TeardownSequencer, TeardownState,
};
