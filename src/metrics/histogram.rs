use hdrhistogram::Histogram;

/// Latency distribution in microseconds.
#[derive(Debug)]
pub struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, String> {
        let hist = Histogram::<u64>::new(3)
            .map_err(|err| format!("Failed to create histogram: {}", err))?;
        Ok(Self { hist })
    }

    /// Record a latency value in microseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    pub fn record(&mut self, latency_us: u64) -> Result<(), String> {
        let value = latency_us.max(1);
        self.hist
            .record(value)
            .map_err(|err| format!("Failed to record latency: {}", err))
    }

    /// Returns p50, p90 and p99 in microseconds.
    #[must_use]
    pub fn percentiles(&self) -> (u64, u64, u64) {
        if self.count() == 0 {
            return (0, 0, 0);
        }

        (
            self.hist.value_at_quantile(0.5),
            self.hist.value_at_quantile(0.9),
            self.hist.value_at_quantile(0.99),
        )
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_reports_zero_percentiles() -> Result<(), String> {
        let histogram = LatencyHistogram::new()?;
        if histogram.percentiles() != (0, 0, 0) {
            return Err("Expected zero percentiles".to_owned());
        }
        Ok(())
    }

    #[test]
    fn percentiles_follow_recorded_values() -> Result<(), String> {
        let mut histogram = LatencyHistogram::new()?;
        for value in 1..=100_u64 {
            histogram.record(value.saturating_mul(1_000))?;
        }
        let (p50, p90, p99) = histogram.percentiles();
        if !(49_000..=51_000).contains(&p50) {
            return Err(format!("Unexpected p50: {}", p50));
        }
        if !(89_000..=91_000).contains(&p90) {
            return Err(format!("Unexpected p90: {}", p90));
        }
        if !(98_000..=100_100).contains(&p99) {
            return Err(format!("Unexpected p99: {}", p99));
        }
        if histogram.count() != 100 {
            return Err(format!("Unexpected count: {}", histogram.count()));
        }
        Ok(())
    }

    #[test]
    fn zero_latency_is_recorded_as_minimum() -> Result<(), String> {
        let mut histogram = LatencyHistogram::new()?;
        histogram.record(0)?;
        let (p50, _, _) = histogram.percentiles();
        if p50 != 1 {
            return Err(format!("Expected p50 of 1us, got {}", p50));
        }
        Ok(())
    }
}
