//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod answer;
mod container_status;
mod entity_kind;
mod volume_access;

pub use answer::Answer;
pub use container_status::ContainerStatus;
pub use entity_kind::{ChildKind, EntityKind};
pub use volume_access::VolumeAccess;
