// Use cases layer: the per-tick aim workflow and the loop that drives it.

pub mod engine;
pub mod fire;
pub mod poll;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::AimEngine;
pub use fire::{FireOutcome, FireTrigger};
pub use poll::poll_task;
pub use types::{AimReport, PollSummary, SkipReason, TickOutcome};
