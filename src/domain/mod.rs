//! Domain Layer
//!
//! Plain values and the ports the infrastructure layer implements.
//!
//! ## Structure
//!
//! - `entities/` - `Command`, `ExecOutcome`
//! - `value_objects/` - `EntityKind`, `VolumeAccess`, `ContainerStatus`, `Answer`
//! - `ports/` - `CommandRunner`, `TeardownSink`
//!
//! Nothing here spawns processes or touches the file system.

pub mod entities;
pub mod ports;
pub mod value_objects;
