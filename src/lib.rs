//! Berth - idempotent Docker swarm, volume and secret reconciliation
//!
//! Berth wraps the container engine CLI and the local file system in a set
//! of best-effort, re-runnable operations: create what is missing, remove
//! what is present, and treat "nothing to do" as success. It is meant to be
//! run over and over across redeployments of the same stack.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DockerManager, RemovalReport, SwarmStatus, TeardownReport};
pub use config::Config;
pub use domain::entities::{Command, ExecOutcome, FailureKind};
pub use domain::value_objects::{ChildKind, ContainerStatus, EntityKind, VolumeAccess};
pub use error::{BerthError, BerthResult};
pub use infrastructure::{LocalFs, RecordingRunner, Shell, SystemRunner, Trim};
