use chrono::{DateTime, Local};

/// Number of samples kept for every time-series display.
pub const HISTORY_LEN: usize = 60;

/// One instantaneous reading of CPU, RAM and network throughput.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    /// Global CPU usage (0.0 – 100.0).
    pub cpu_percent: f64,
    /// RAM in use (0.0 – 100.0).
    pub ram_percent: f64,
    /// Bytes/second sent across all interfaces.
    pub net_sent_rate: f64,
    /// Bytes/second received across all interfaces.
    pub net_recv_rate: f64,
}

/// Owned copy of the four rolling histories, oldest sample first.
///
/// Taken after each sample so the view never borrows the sampler itself.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFrame {
    pub cpu:      Vec<f64>,
    pub ram:      Vec<f64>,
    pub net_sent: Vec<f64>,
    pub net_recv: Vec<f64>,
    /// Largest sent or received rate in the window, bytes/second.
    pub net_peak: f64,
}

impl Default for HistoryFrame {
    fn default() -> Self {
        Self {
            cpu:      vec![0.0; HISTORY_LEN],
            ram:      vec![0.0; HISTORY_LEN],
            net_sent: vec![0.0; HISTORY_LEN],
            net_recv: vec![0.0; HISTORY_LEN],
            net_peak: 0.0,
        }
    }
}

/// Central application state — all widgets read from this snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Most recent successful sample.
    pub sample: Sample,
    /// History copy taken together with `sample`.
    pub history: HistoryFrame,
    /// Wall-clock time of the last successful sample, `None` before the first.
    pub updated_at: Option<DateTime<Local>>,
    /// Last sampling error, cleared by the next successful sample.
    pub last_error: Option<String>,
}

impl AppState {
    /// Record a successful sample together with its history copy.
    pub fn record(&mut self, sample: Sample, history: HistoryFrame) {
        self.sample     = sample;
        self.history    = history;
        self.updated_at = Some(Local::now());
        self.last_error = None;
    }

    /// Record a failed tick. Previous values stay on display.
    pub fn record_error(&mut self, error: impl ToString) {
        self.last_error = Some(error.to_string());
    }

    /// One-line status shown under the gauges.
    #[must_use]
    pub fn status_line(&self) -> String {
        match (&self.last_error, self.updated_at) {
            (Some(err), _)   => format!("Sampling failed: {err}"),
            (None, Some(at)) => format!("Updated {}", at.format("%H:%M:%S")),
            (None, None)     => "Waiting for first sample…".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_full_width_zeroes() {
        let frame = HistoryFrame::default();
        for series in [&frame.cpu, &frame.ram, &frame.net_sent, &frame.net_recv] {
            assert_eq!(series.len(), HISTORY_LEN);
            assert!(series.iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn error_keeps_previous_sample() {
        let mut state = AppState::default();
        let sample = Sample { cpu_percent: 10.0, ..Sample::default() };
        state.record(sample, HistoryFrame::default());
        state.record_error("denied");

        assert_eq!(state.sample, sample);
        assert_eq!(state.status_line(), "Sampling failed: denied");
    }

    #[test]
    fn success_clears_error() {
        let mut state = AppState::default();
        state.record_error("denied");
        state.record(Sample::default(), HistoryFrame::default());

        assert!(state.last_error.is_none());
        assert!(state.status_line().starts_with("Updated "));
    }
}
