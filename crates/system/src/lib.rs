//! Sampling engine: OS counters in, rates and rolling histories out.

pub mod clock;
pub mod format;
pub mod history;
pub mod sampler;
pub mod source;

pub use clock::{Clock, SystemClock};
pub use history::{Histories, RollingHistory};
pub use sampler::{CounterSnapshot, Sampler, SystemSampler};
pub use source::{CounterSource, NetCounters, SysinfoSource};
