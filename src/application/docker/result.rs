//! Result types for Docker reconciliation

use serde::Serialize;

/// Outcome of `ensure_swarm_initialized`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwarmStatus {
    /// This node already belongs to a swarm
    AlreadyActive,
    /// A new single-node swarm was created
    Initialized,
    /// `swarm init` was attempted and failed (logged, not raised)
    InitFailed,
}

/// Result of a bulk removal
///
/// Each requested name lands in exactly one of `removed`, `not_found`
/// or `failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    /// Names whose matching objects were removed
    pub removed: Vec<String>,
    /// Names that matched nothing
    pub not_found: Vec<String>,
    /// Names whose removal command failed
    pub failed: Vec<String>,
}

impl RemovalReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no removal command failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.removed.len() + self.not_found.len() + self.failed.len()
    }
}
