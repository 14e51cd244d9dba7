//! Fixed-volume stress runs: validation, request queues, worker pools and
//! the coordinator that runs every target side by side.
mod duration;
mod pool;
mod queue;
mod run;
mod sink;
mod stat;
mod target;
mod validate;


pub use duration::parse_duration;
pub use queue::RequestQueue;
pub use run::run_stress;
pub use sink::OutputSink;
pub use stat::{CapturedResponse, RequestSnapshot, RequestStat, ResultMatrix};
pub use target::{
    DEFAULT_CONCURRENCY, DEFAULT_COUNT, DEFAULT_METHOD, DEFAULT_TIMEOUT, DEFAULT_URL,
    DEFAULT_USER_AGENT, RunConfig, Target,
};
pub use validate::validate_config;
