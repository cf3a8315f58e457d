//! Domain Entities
//!
//! - `Command` - an external invocation as program + argv
//! - `ExecOutcome` - status, captured output and failure kind of a run

mod command;
mod exec_outcome;

pub use command::Command;
pub use exec_outcome::{ExecOutcome, FailureKind};
