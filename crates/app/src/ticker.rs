//! Per-tick sampling policy, kept apart from the Iced state so it can run
//! against any [`CounterSource`] / [`Clock`].
//!
//! - A failed read skips the tick: the last sample and frame stay on screen
//!   and the error goes to the status line.
//! - A sampler that could not be opened is retried on every tick.
//! - The next successful sample clears the error.

use pulse_core::{state::AppState, Result};
use pulse_system::{source::CPU_WARMUP, Clock, CounterSource, Sampler};
use std::time::Duration;
use tracing::{info, warn};

/// Try to open the sampler into `slot`; `true` on success.
pub(crate) fn open<S, C>(
    slot: &mut Option<Sampler<S, C>>,
    state: &mut AppState,
    open: impl FnOnce() -> Result<Sampler<S, C>>,
) -> bool
where
    S: CounterSource,
    C: Clock,
{
    match open() {
        Ok(sampler) => {
            info!("Sampler ready");
            *slot = Some(sampler);
            true
        }
        Err(e) => {
            warn!("Cannot open system counters: {e}; retrying next tick");
            state.record_error(e);
            false
        }
    }
}

/// Handle one timer tick.
///
/// When the sampler is missing this tick only (re)opens it; the first
/// sample follows on the next tick so the counters have a baseline.
pub(crate) fn tick<S, C>(
    slot: &mut Option<Sampler<S, C>>,
    state: &mut AppState,
    reopen: impl FnOnce() -> Result<Sampler<S, C>>,
) where
    S: CounterSource,
    C: Clock,
{
    let Some(sampler) = slot.as_mut() else {
        open(slot, state, reopen);
        return;
    };

    match sampler.sample() {
        Ok(sample) => state.record(sample, sampler.frame()),
        Err(e) => {
            warn!("Sample skipped: {e}");
            state.record_error(e);
        }
    }
}

/// Delay before the first sample after the sampler opens.
///
/// CPU usage needs two refreshes a minimum gap apart; waiting a whole
/// interval would leave the window blank for that long.
pub(crate) fn first_tick_delay(interval: Duration) -> Duration {
    CPU_WARMUP.min(interval)
}
