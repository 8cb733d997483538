// Interface adapters: simulated environments and logging sinks for the domain ports.

pub mod environment;
pub mod sinks;

pub use environment::{MockEnvironment, ReplayEnvironment};
pub use sinks::{LoggingFireControl, LoggingInputSink};
