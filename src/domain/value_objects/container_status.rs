//! Container status filter used by bulk container removal

use std::str::FromStr;

/// Status scope for `remove_containers`
///
/// `Any` removes by name only; the other variants restrict removal to
/// containers currently in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerStatus {
    #[default]
    Any,
    Running,
    Exited,
    Dead,
}

impl ContainerStatus {
    /// Lenient parse: anything that is not a recognized status means
    /// "no status scope".
    pub fn from_filter(filter: &str) -> Self {
        filter.parse().unwrap_or(ContainerStatus::Any)
    }

    /// Value for docker's `status=` filter, `None` when unscoped
    pub fn as_filter(&self) -> Option<&'static str> {
        match self {
            ContainerStatus::Any => None,
            ContainerStatus::Running => Some("running"),
            ContainerStatus::Exited => Some("exited"),
            ContainerStatus::Dead => Some("dead"),
        }
    }
}

impl FromStr for ContainerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "any" => Ok(ContainerStatus::Any),
            "running" => Ok(ContainerStatus::Running),
            "exited" => Ok(ContainerStatus::Exited),
            "dead" => Ok(ContainerStatus::Dead),
            other => Err(format!(
                "unknown container status '{}' (expected running, exited or dead)",
                other
            )),
        }
    }
}
