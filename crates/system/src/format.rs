//! Human-readable byte and rate formatting for the display.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;

/// Format a bytes-per-second rate (e.g. `"512 B/s"`, `"1.5 KB/s"`).
pub fn format_rate(bps: f64) -> String {
    if bps < KIB {
        format!("{bps:.0} B/s")
    } else if bps < MIB {
        format!("{:.1} KB/s", bps / KIB)
    } else {
        format!("{:.1} MB/s", bps / MIB)
    }
}

/// Bytes/second → KB/second, the unit of the network plot.
#[inline]
pub fn to_kib(bps: f64) -> f64 {
    bps / KIB
}
