use thiserror::Error;

#[derive(Debug, Error)]
pub enum DurationError {
    #[error("Duration must not be empty.")]
    Empty,
    #[error("Invalid duration '{value}'.")]
    InvalidFormat { value: String },
    #[error("Missing unit in duration '{value}'.")]
    MissingUnit { value: String },
    #[error("Invalid duration unit '{unit}' in '{value}'.")]
    InvalidUnit { value: String, unit: String },
    #[error("Negative duration '{value}'.")]
    Negative { value: String },
    #[error("Duration overflow in '{value}'.")]
    Overflow { value: String },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("zero targets")]
    NoTargets,
    #[error("nil writer")]
    MissingSink,
    #[error("Missing URL (pass one or more URLs or provide targets in config).")]
    MissingUrl,
    #[error("target {index}: empty URL")]
    EmptyUrl { index: usize },
    #[error("target {index}: request count must be greater than zero")]
    CountNotPositive { index: usize },
    #[error("target {index}: concurrency must be greater than zero")]
    ConcurrencyNotPositive { index: usize },
    #[error("target {index}: method cannot be empty string")]
    EmptyMethod { index: usize },
    #[error(
        "target {index}: concurrency ({concurrency}) must not be higher than request count ({count})"
    )]
    ConcurrencyExceedsCount {
        index: usize,
        concurrency: usize,
        count: usize,
    },
    #[error("target {index}: failed to parse timeout '{value}': {source}")]
    InvalidTimeout {
        index: usize,
        value: String,
        #[source]
        source: DurationError,
    },
    #[error("target {index}: timeout '{value}' must be greater than one millisecond")]
    TimeoutTooShort { index: usize, value: String },
}
