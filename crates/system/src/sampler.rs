use crate::clock::{Clock, SystemClock};
use crate::history::Histories;
use crate::source::{CounterSource, NetCounters, SysinfoSource};
use pulse_core::{HistoryFrame, Result, Sample};
use tracing::debug;

/// Last observed cumulative network counters and when they were read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSnapshot {
    /// Clock reading in seconds (see [`Clock::now_secs`]).
    pub taken_at: f64,
    pub sent:     u64,
    pub recv:     u64,
}

/// Turns cumulative OS counters into [`Sample`]s and keeps the rolling
/// histories behind the plots.
///
/// Exactly one owner calls [`Sampler::sample`]; readers take a
/// [`HistoryFrame`] copy afterwards.
#[derive(Debug)]
pub struct Sampler<S, C = SystemClock> {
    source:    S,
    clock:     C,
    snapshot:  CounterSnapshot,
    histories: Histories,
}

/// The sampler used by the application: `sysinfo` counters, monotonic clock.
pub type SystemSampler = Sampler<SysinfoSource, SystemClock>;

impl SystemSampler {
    pub fn system() -> Result<Self> {
        Sampler::new(SysinfoSource::new()?, SystemClock::new())
    }
}

impl<S: CounterSource, C: Clock> Sampler<S, C> {
    /// Seed the counter snapshot from one read and pre-fill every history.
    pub fn new(mut source: S, clock: C) -> Result<Self> {
        let NetCounters { sent, recv } = source.network_counters()?;
        let snapshot = CounterSnapshot { taken_at: clock.now_secs(), sent, recv };

        Ok(Self {
            source,
            clock,
            snapshot,
            histories: Histories::default(),
        })
    }

    /// Take one sample and append it to the histories.
    ///
    /// A failed counter read returns early and leaves all state untouched.
    pub fn sample(&mut self) -> Result<Sample> {
        let now = self.clock.now_secs();
        let cpu = clamp_percent(self.source.cpu_percent()?);
        let ram = clamp_percent(self.source.memory_percent()?);
        let net = self.source.network_counters()?;

        let mut elapsed = now - self.snapshot.taken_at;
        if !(elapsed > 0.0 && elapsed.is_finite()) {
            debug!(elapsed, "non-positive elapsed time; using 1s");
            elapsed = 1.0;
        }

        let sample = Sample {
            cpu_percent:   cpu,
            ram_percent:   ram,
            net_sent_rate: rate(self.snapshot.sent, net.sent, elapsed),
            net_recv_rate: rate(self.snapshot.recv, net.recv, elapsed),
        };

        self.snapshot = CounterSnapshot { taken_at: now, sent: net.sent, recv: net.recv };

        self.histories.cpu.push(sample.cpu_percent);
        self.histories.ram.push(sample.ram_percent);
        self.histories.net_sent.push(sample.net_sent_rate);
        self.histories.net_recv.push(sample.net_recv_rate);

        debug!(
            cpu = sample.cpu_percent,
            ram = sample.ram_percent,
            sent = sample.net_sent_rate,
            recv = sample.net_recv_rate,
            "sample"
        );

        Ok(sample)
    }

    pub fn histories(&self) -> &Histories {
        &self.histories
    }

    /// Owned copy of the histories for the display.
    #[must_use]
    pub fn frame(&self) -> HistoryFrame {
        self.histories.frame()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.snapshot
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

/// Bytes/second between two cumulative readings; a counter that went
/// backwards (interface reset, wraparound) yields 0.
fn rate(last: u64, current: u64, elapsed: f64) -> f64 {
    if current < last {
        debug!(last, current, "network counter regressed");
    }
    current.saturating_sub(last) as f64 / elapsed
}

/// Percentages are pinned to `[0, 100]`; NaN reads as 0.
fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
