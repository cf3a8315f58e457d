//! Docker Resource Manager
//!
//! - `manager` - swarm, secret, image, container and bulk removal operations
//! - `volumes` - volume directory operations, native or through the helper container
//! - `teardown` - stack removal followed by a bounded drain

mod manager;
mod result;
mod teardown;
mod volumes;

pub use manager::DockerManager;
pub use result::{RemovalReport, SwarmStatus};
pub use teardown::{TeardownReport, TeardownSequencer, TeardownState, STACK_NAMESPACE_LABEL};
