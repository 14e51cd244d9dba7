use std::time::Duration;

/// Microseconds per millisecond.
const US_PER_MS: u128 = 1_000;
/// Microseconds per second.
const US_PER_SEC: u128 = 1_000_000;
/// Milliseconds per second.
const MS_PER_SEC: u128 = 1_000;
/// Fraction scale for formatted durations.
const FRACTION_SCALE: u128 = 1_000;

/// Formats a duration with the coarsest unit that keeps it above one,
/// using three fractional digits: `850µs`, `12.345ms`, `1.500s`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < US_PER_MS {
        return format!("{}µs", micros);
    }
    if micros < US_PER_SEC {
        return format!(
            "{}.{:03}ms",
            micros / US_PER_MS,
            micros % FRACTION_SCALE
        );
    }
    let millis = duration.as_millis();
    format!("{}.{:03}s", millis / MS_PER_SEC, millis % FRACTION_SCALE)
}

/// Formats a latency recorded in microseconds.
#[must_use]
pub(crate) fn format_micros(micros: u64) -> String {
    format_duration(Duration::from_micros(micros))
}
