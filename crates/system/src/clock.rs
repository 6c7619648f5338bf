use std::time::Instant;

/// Time source for rate computation, in seconds.
///
/// Only differences between two readings are meaningful.
pub trait Clock {
    fn now_secs(&self) -> f64;
}

/// Monotonic clock measured from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
