//! Stack Teardown Sequencer
//!
//! Removes a stack, then drains: one tick at a time until the wait budget
//! is used up, or earlier once no container labelled with the stack's
//! namespace is left (when polling is enabled). The drain loop cannot be
//! interrupted.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::domain::ports::{CommandRunner, TeardownEvent, TeardownSink};
use crate::error::{BerthError, BerthResult};

use super::manager::DockerManager;

/// Label the orchestrator puts on every container of a stack
pub const STACK_NAMESPACE_LABEL: &str = "com.docker.stack.namespace";

/// Sequencer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeardownState {
    Removing,
    Draining { elapsed: u64 },
    Done,
}

/// What a finished teardown looked like
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeardownReport {
    pub stack: String,
    /// Ticks spent draining
    pub elapsed: u64,
    /// True when the stack's containers were confirmed gone before the
    /// budget ran out
    pub converged: bool,
}

pub struct TeardownSequencer<'a, R> {
    docker: &'a DockerManager<R>,
    budget: u64,
    tick: Duration,
    poll: bool,
    state: TeardownState,
}

impl<R: CommandRunner> DockerManager<R> {
    /// Sequencer configured from `[teardown]`, ticking once per second
    pub fn teardown(&self) -> TeardownSequencer<'_, R> {
        TeardownSequencer {
            docker: self,
            budget: self.config.teardown.wait_seconds,
            tick: Duration::from_secs(1),
            poll: self.config.teardown.poll,
            state: TeardownState::Removing,
        }
    }

    /// True once no container, service or network of `stack` is listed
    ///
    /// Networks outlive the stack's containers, and a redeploy fails while
    /// they remain, so all three are checked. Stops at the first listing
    /// that still shows something.
    pub fn stack_drained(&self, stack: &str) -> BerthResult<bool> {
        let filter = format!("label={}={}", STACK_NAMESPACE_LABEL, stack);
        let listings = [
            self.docker().args(["ps", "--all", "--quiet", "--filter"]),
            self.docker().args(["service", "ls", "--quiet", "--filter"]),
            self.docker().args(["network", "ls", "--quiet", "--filter"]),
        ];
        for list in listings {
            let outcome = self.shell.run(&list.arg(filter.as_str()))?;
            if !outcome.is_success() || !outcome.lines().is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<'a, R: CommandRunner> TeardownSequencer<'a, R> {
    /// Number of ticks to wait at most
    pub fn budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn poll(mut self, poll: bool) -> Self {
        self.poll = poll;
        self
    }

    pub fn state(&self) -> TeardownState {
        self.state
    }

    /// Tear down the stack named after the swarm manager's hostname
    pub fn run(&mut self, message: &str, sink: &dyn TeardownSink) -> BerthResult<TeardownReport> {
        let stack = self.docker.manager_hostname()?;
        self.run_for(&stack, message, sink)
    }

    /// Tear down `stack`, blocking until drained or out of budget
    pub fn run_for(
        &mut self,
        stack: &str,
        message: &str,
        sink: &dyn TeardownSink,
    ) -> BerthResult<TeardownReport> {
        if stack.trim().is_empty() {
            return Err(BerthError::invalid_argument(
                "stack name is empty; is this node a swarm manager?",
            ));
        }

        self.state = TeardownState::Removing;
        sink.on_event(&TeardownEvent::Removing {
            stack: stack.to_string(),
        });
        self.docker
            .shell
            .run(&self.docker.docker().args(["stack", "rm", stack]))?;

        let mut elapsed = 0;
        let mut converged = false;
        self.state = TeardownState::Draining { elapsed };

        while elapsed != self.budget {
            sink.on_event(&TeardownEvent::Elapsed {
                elapsed,
                budget: self.budget,
            });
            if self.poll && self.docker.stack_drained(stack)? {
                converged = true;
                sink.on_event(&TeardownEvent::Converged { elapsed });
                break;
            }
            std::thread::sleep(self.tick);
            elapsed += 1;
            self.state = TeardownState::Draining { elapsed };
        }

        self.state = TeardownState::Done;
        info!(stack, elapsed, converged, "stack teardown finished");
        sink.on_event(&TeardownEvent::Finished {
            message: message.to_string(),
        });

        Ok(TeardownReport {
            stack: stack.to_string(),
            elapsed,
            converged,
        })
    }
}
