//! Teardown Event Port
//!
//! Progress reporting for the stack teardown sequencer.

/// Event emitted while a stack is being torn down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeardownEvent {
    /// Stack removal was requested
    Removing { stack: String },

    /// One drain tick; `elapsed` counts whole ticks before the sleep
    Elapsed { elapsed: u64, budget: u64 },

    /// No containers of the stack remain; draining stopped early
    Converged { elapsed: u64 },

    /// Teardown finished; carries the caller's completion message
    Finished { message: String },
}

/// Trait for receiving teardown events
pub trait TeardownSink {
    fn on_event(&self, event: &TeardownEvent);
}

/// No-op sink for silent operation
pub struct NoopTeardownSink;

impl TeardownSink for NoopTeardownSink {
    fn on_event(&self, _event: &TeardownEvent) {}
}
