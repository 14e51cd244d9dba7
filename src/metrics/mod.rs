//! Latency aggregation.
mod histogram;

pub use histogram::LatencyHistogram;
