//! Human-readable output for stress runs: live progress lines, per-target
//! summaries and the JSON export of a finished run.
mod export;
mod format;
pub mod progress;
mod summary;

pub use export::export_json;
pub use format::format_duration;
pub use summary::{TargetSummary, summarize_target, summary_lines};
