use pulse_core::{HistoryFrame, HISTORY_LEN};
use std::collections::VecDeque;

/// Fixed-width rolling history backing a live time-series display.
///
/// Always holds exactly `capacity` entries: it starts pre-filled and every
/// push evicts the oldest entry. Iteration is oldest first.
#[derive(Debug, Clone)]
pub struct RollingHistory<T> {
    samples:  VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RollingHistory<T> {
    /// Create a history of `capacity` copies of `fill`.
    pub fn filled(capacity: usize, fill: T) -> Self {
        let mut samples = VecDeque::with_capacity(capacity);
        samples.extend(std::iter::repeat(fill).take(capacity));
        Self { samples, capacity }
    }

    /// Owned copy of the contents, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.samples.iter().cloned().collect()
    }
}

impl<T> RollingHistory<T> {
    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl RollingHistory<f64> {
    /// Largest sample in the window, `0.0` when empty.
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }
}

/// The four series shown by the monitor.
#[derive(Debug, Clone)]
pub struct Histories {
    pub cpu:      RollingHistory<f64>,
    pub ram:      RollingHistory<f64>,
    pub net_sent: RollingHistory<f64>,
    pub net_recv: RollingHistory<f64>,
}

impl Default for Histories {
    fn default() -> Self {
        Self {
            cpu:      RollingHistory::filled(HISTORY_LEN, 0.0),
            ram:      RollingHistory::filled(HISTORY_LEN, 0.0),
            net_sent: RollingHistory::filled(HISTORY_LEN, 0.0),
            net_recv: RollingHistory::filled(HISTORY_LEN, 0.0),
        }
    }
}

impl Histories {
    /// Copy every series for the display.
    #[must_use]
    pub fn frame(&self) -> HistoryFrame {
        HistoryFrame {
            cpu:      self.cpu.to_vec(),
            ram:      self.ram.to_vec(),
            net_sent: self.net_sent.to_vec(),
            net_recv: self.net_recv.to_vec(),
            net_peak: self.net_sent.max().max(self.net_recv.max()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_full() {
        let h = RollingHistory::filled(60, 0.0);
        assert_eq!(h.len(), 60);
        assert!(h.to_vec().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn push_evicts_oldest() {
        let mut h = RollingHistory::filled(3, 0);
        h.push(1);
        h.push(2);
        h.push(3);
        h.push(4);
        assert_eq!(h.to_vec(), vec![2, 3, 4]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut h = RollingHistory::filled(0, 0.0);
        h.push(1.0);
        assert!(h.is_empty());
        assert_eq!(h.max(), 0.0);
    }

    #[test]
    fn max_tracks_window() {
        let mut h = RollingHistory::filled(2, 0.0);
        h.push(8.0);
        h.push(4.0);
        assert_eq!(h.max(), 8.0);
        h.push(1.0);
        assert_eq!(h.max(), 4.0);
    }

    #[test]
    fn frame_copies_every_series() {
        let mut hist = Histories::default();
        hist.net_recv.push(5.0);
        let frame = hist.frame();
        assert_eq!(frame.net_recv.len(), HISTORY_LEN);
        assert_eq!(frame.net_recv.last(), Some(&5.0));
        assert_eq!(frame.cpu, vec![0.0; HISTORY_LEN]);
    }

    #[test]
    fn frame_peak_covers_both_directions() {
        let mut hist = Histories::default();
        hist.net_sent.push(300.0);
        hist.net_recv.push(1200.0);
        hist.net_sent.push(50.0);
        assert_eq!(hist.frame().net_peak, 1200.0);
    }
}
