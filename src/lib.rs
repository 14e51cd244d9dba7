//! Core library for the `barrage` CLI.
//!
//! The [`stress`] module runs a fixed number of HTTP requests against one or
//! more targets with bounded concurrency and returns a measurement for every
//! request. The remaining modules build the requests and clients it sends
//! with, turn CLI flags and config files into a run, and report results.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;
pub mod stress;
