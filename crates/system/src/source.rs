use pulse_core::{PulseError, Result};
use std::time::Duration;
use sysinfo::{Networks, System};

/// Shortest gap between two CPU refreshes that yields a meaningful usage.
pub const CPU_WARMUP: Duration = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;

/// Cumulative network byte counters summed over every interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub sent: u64,
    pub recv: u64,
}

/// Narrow view of the OS counters the sampler needs.
///
/// Implementations may refresh internal state on every call; any read that
/// cannot be served returns [`PulseError::CounterRead`].
pub trait CounterSource {
    /// Global CPU utilisation in percent.
    fn cpu_percent(&mut self) -> Result<f64>;

    /// Physical memory in use, in percent of total.
    fn memory_percent(&mut self) -> Result<f64>;

    /// Bytes sent/received since boot, all interfaces combined.
    fn network_counters(&mut self) -> Result<NetCounters>;
}

/// [`CounterSource`] backed by `sysinfo`.
pub struct SysinfoSource {
    system:   System,
    networks: Networks,
}

impl SysinfoSource {
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(PulseError::CounterRead(format!(
                "sysinfo does not support {}",
                std::env::consts::OS
            )));
        }

        let mut system = System::new();
        // CPU usage is a delta between two refreshes; prime the first one.
        system.refresh_cpu_usage();

        Ok(Self {
            system,
            networks: Networks::new_with_refreshed_list(),
        })
    }
}

impl std::fmt::Debug for SysinfoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysinfoSource")
            .field("cpus", &self.system.cpus().len())
            .field("interfaces", &self.networks.len())
            .finish()
    }
}

impl CounterSource for SysinfoSource {
    fn cpu_percent(&mut self) -> Result<f64> {
        self.system.refresh_cpu_usage();
        if self.system.cpus().is_empty() {
            return Err(PulseError::CounterRead("no CPUs reported".into()));
        }
        Ok(f64::from(self.system.global_cpu_usage()))
    }

    fn memory_percent(&mut self) -> Result<f64> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(PulseError::CounterRead("total memory reported as zero".into()));
        }
        Ok(self.system.used_memory() as f64 / total as f64 * 100.0)
    }

    fn network_counters(&mut self) -> Result<NetCounters> {
        // false = keep interfaces that disappeared so their totals stay counted
        self.networks.refresh(false);
        let counters = self
            .networks
            .iter()
            .fold(NetCounters::default(), |acc, (_, data)| NetCounters {
                sent: acc.sent.saturating_add(data.total_transmitted()),
                recv: acc.recv.saturating_add(data.total_received()),
            });
        Ok(counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmup_is_shorter_than_default_interval() {
        assert!(CPU_WARMUP <= Duration::from_secs(1));
    }
}
